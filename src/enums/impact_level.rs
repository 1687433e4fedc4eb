use serde::{Deserialize, Serialize};
use crate::config::constants::{MAJOR_SCORE_THRESHOLD, MEDIUM_SCORE_THRESHOLD};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ImpactLevel {
    #[serde(rename = "minor")]
    Minor,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "major")]
    Major,
}

impl ImpactLevel {
    /// Buckets an impact score into a level. Pure and monotonic: a higher
    /// score never maps to a lower level.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= MAJOR_SCORE_THRESHOLD => Self::Major,
            s if s >= MEDIUM_SCORE_THRESHOLD => Self::Medium,
            _ => Self::Minor,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Minor => "MINOR",
            Self::Medium => "MEDIUM",
            Self::Major => "MAJOR",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Minor => "🟢",
            Self::Medium => "🟡",
            Self::Major => "🔴",
        }
    }
}

impl Default for ImpactLevel {
    fn default() -> Self {
        ImpactLevel::Minor
    }
}
