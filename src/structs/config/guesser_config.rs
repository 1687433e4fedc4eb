use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GuesserConfig {
    /// Additional invert-on-increase keywords, appended after the
    /// built-in list. Matched as lowercase substrings.
    #[serde(default)]
    pub extra_invert_keywords: Vec<String>,
}
