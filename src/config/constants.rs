pub const DEFAULT_SCORE_THRESHOLD: u32 = 4;
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024;

/// Minimum accepted values for user-supplied config.
pub const MIN_SCORE_THRESHOLD: u32 = 1;
pub const MIN_MAX_INPUT_BYTES: usize = 1024;

/// Impact score buckets.
pub const MAJOR_SCORE_THRESHOLD: u32 = 30;
pub const MEDIUM_SCORE_THRESHOLD: u32 = 10;

pub const CONFIG_DIR_NAME: &str = "patchlyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";
