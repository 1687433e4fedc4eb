use serde::{Deserialize, Serialize};
use crate::structs::config::detection_config::DetectionConfig;
use crate::structs::config::guesser_config::GuesserConfig;
use crate::structs::config::limits_config::LimitsConfig;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub detection: DetectionConfig,

    #[serde(default)]
    pub guesser: GuesserConfig,

    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detection: DetectionConfig::default(),
            guesser: GuesserConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}
