use crate::enums::change_kind::ChangeKind;

/// Classifies a single change description into a change kind. The
/// category label provides context (it participates in rework and
/// inversion checks).
#[cfg_attr(test, mockall::automock)]
pub trait KindGuesser {
    fn guess(&self, description: &str, category: &str) -> ChangeKind;
}
