use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum ChangeKind {
    #[serde(rename = "buff")]
    Buff,
    #[serde(rename = "debuff")]
    Debuff,
    #[serde(rename = "rework")]
    Rework,
    #[serde(rename = "fix")]
    Fix,
    #[serde(rename = "other")]
    Other,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 5] = [
        ChangeKind::Buff,
        ChangeKind::Debuff,
        ChangeKind::Rework,
        ChangeKind::Fix,
        ChangeKind::Other,
    ];

    /// Stable lowercase discriminant used for serialization and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buff => "buff",
            Self::Debuff => "debuff",
            Self::Rework => "rework",
            Self::Fix => "fix",
            Self::Other => "other",
        }
    }

    /// Uppercase tag rendered in report bullets.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Buff => "BUFF",
            Self::Debuff => "DEBUFF",
            Self::Rework => "REWORK",
            Self::Fix => "FIX",
            Self::Other => "OTHER",
        }
    }

    /// Heading used for the per-kind counters in the summary section.
    pub fn summary_name(&self) -> &'static str {
        match self {
            Self::Buff => "Buffs",
            Self::Debuff => "Debuffs",
            Self::Rework => "Reworks",
            Self::Fix => "Fixes",
            Self::Other => "Other",
        }
    }
}

impl Default for ChangeKind {
    fn default() -> Self {
        ChangeKind::Other
    }
}
