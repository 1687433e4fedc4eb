use serde::{Deserialize, Serialize};
use crate::enums::change_kind::ChangeKind;

/// One discrete change entry extracted from a patch note draft.
/// `category` is always non-empty after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub description: String,
    pub category: String,
    pub kind: ChangeKind,
}

impl Change {
    pub fn new(description: &str, category: &str, kind: ChangeKind) -> Self {
        Self {
            description: description.to_string(),
            category: category.to_string(),
            kind,
        }
    }
}
