use std::collections::HashMap;
use crate::enums::change_kind::ChangeKind;
use crate::enums::impact_level::ImpactLevel;
use crate::structs::analysis::Analysis;
use crate::structs::change::Change;

const FIX_WEIGHT: u32 = 2;
const OTHER_WEIGHT: u32 = 1;
const GAMEPLAY_WEIGHT: u32 = 3;

/// Volume bonus tiers, largest first. The first tier whose minimum the
/// change count reaches is applied once.
const VOLUME_BONUSES: &[(usize, u32)] = &[(30, 10), (15, 5), (5, 2)];

fn kind_weight(kind: ChangeKind) -> u32 {
    match kind {
        ChangeKind::Buff | ChangeKind::Debuff | ChangeKind::Rework => GAMEPLAY_WEIGHT,
        ChangeKind::Fix => FIX_WEIGHT,
        ChangeKind::Other => OTHER_WEIGHT,
    }
}

/// Aggregates a change list into kind and category tallies plus an
/// impact score and level.
pub struct PatchNoteAnalyzer;

impl PatchNoteAnalyzer {
    pub fn analyze(&self, changes: &[Change]) -> Analysis {
        let mut changes_by_kind: HashMap<ChangeKind, usize> = HashMap::new();
        let mut changes_by_category: Vec<(String, usize)> = Vec::new();
        let mut impact_score = 0u32;

        for change in changes {
            *changes_by_kind.entry(change.kind).or_insert(0) += 1;
            impact_score += kind_weight(change.kind);

            match changes_by_category
                .iter_mut()
                .find(|(name, _)| name == &change.category)
            {
                Some((_, count)) => *count += 1,
                None => changes_by_category.push((change.category.clone(), 1)),
            }
        }

        let total_changes = changes.len();
        impact_score += VOLUME_BONUSES
            .iter()
            .find(|(min_changes, _)| total_changes >= *min_changes)
            .map(|(_, bonus)| *bonus)
            .unwrap_or(0);

        Analysis {
            impact_score,
            impact_level: ImpactLevel::from_score(impact_score),
            total_changes,
            changes_by_kind,
            changes_by_category,
        }
    }
}
