use crate::helpers::config_helper::ConfigHelper;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LimitsConfig {
    /// Input beyond this many bytes is truncated before analysis.
    #[serde(default = "ConfigHelper::default_max_input_bytes")]
    pub max_input_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: ConfigHelper::default_max_input_bytes(),
        }
    }
}
