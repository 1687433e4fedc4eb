use crate::config::constants::{DEFAULT_MAX_INPUT_BYTES, DEFAULT_SCORE_THRESHOLD};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_score_threshold() -> u32 {
        DEFAULT_SCORE_THRESHOLD
    }

    pub fn default_max_input_bytes() -> usize {
        DEFAULT_MAX_INPUT_BYTES
    }
}
