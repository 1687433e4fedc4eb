use crate::helpers::config_helper::ConfigHelper;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DetectionConfig {
    /// Minimum weighted-signal score for input to count as a patch note.
    #[serde(default = "ConfigHelper::default_score_threshold")]
    pub score_threshold: u32,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            score_threshold: ConfigHelper::default_score_threshold(),
        }
    }
}
