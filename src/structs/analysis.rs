use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::enums::change_kind::ChangeKind;
use crate::enums::impact_level::ImpactLevel;

/// Aggregated view over the change list of a single note.
///
/// Invariant: the kind counts sum to `total_changes`, which equals the
/// length of the analyzed change list. `changes_by_category` keeps
/// first-seen order, which is why it is a list of pairs and not a map.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Analysis {
    pub impact_score: u32,
    pub impact_level: ImpactLevel,
    pub total_changes: usize,
    pub changes_by_kind: HashMap<ChangeKind, usize>,
    pub changes_by_category: Vec<(String, usize)>,
}

impl Analysis {
    pub fn kind_count(&self, kind: ChangeKind) -> usize {
        self.changes_by_kind.get(&kind).copied().unwrap_or(0)
    }

    pub fn category_count(&self, category: &str) -> usize {
        self.changes_by_category
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}
