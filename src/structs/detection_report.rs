use serde::{Deserialize, Serialize};

/// Outcome of the patch-note gate: the weighted score, the threshold it
/// was judged against and the signals that fired, in evaluation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    pub score: u32,
    pub threshold: u32,
    pub signals: Vec<(String, u32)>,
}

impl DetectionReport {
    pub fn is_patch_note(&self) -> bool {
        self.score >= self.threshold
    }
}
