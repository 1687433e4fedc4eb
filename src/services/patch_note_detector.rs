use once_cell::sync::Lazy;
use regex::Regex;
use crate::helpers::markup::is_bullet_line;
use crate::structs::detection_report::DetectionReport;
use crate::traits::note_detector::NoteDetector;

const PATCH_NOTES_WEIGHT: u32 = 3;
const CHANGELOG_WEIGHT: u32 = 2;
const BUG_FIX_WEIGHT: u32 = 1;
const BALANCE_WEIGHT: u32 = 1;
const VERSION_TOKEN_WEIGHT: u32 = 2;
const MANY_BULLETS_WEIGHT: u32 = 2;
const SOME_BULLETS_WEIGHT: u32 = 1;

const MANY_BULLETS_MIN: usize = 5;
const SOME_BULLETS_MIN: usize = 2;

static PATCH_NOTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)patch\s+notes?").unwrap());
static BUG_FIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)bug\s+fix(?:es)?").unwrap());
static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bv?\d+\.\d+(?:\.\d+)?\b").unwrap());

/// Weighted-signal gate. Each signal is independently additive; the text
/// passes when the total reaches the configured threshold. Tuned to
/// prefer false negatives over false positives.
pub struct PatchNoteDetector {
    score_threshold: u32,
}

impl PatchNoteDetector {
    pub fn new(score_threshold: u32) -> Self {
        Self { score_threshold }
    }
}

impl NoteDetector for PatchNoteDetector {
    fn detect(&self, text: &str) -> DetectionReport {
        let lowered = text.to_lowercase();
        let mut signals: Vec<(String, u32)> = Vec::new();

        if PATCH_NOTES_RE.is_match(text) {
            signals.push(("patch notes header".to_string(), PATCH_NOTES_WEIGHT));
        }
        if lowered.contains("changelog") {
            signals.push(("changelog mention".to_string(), CHANGELOG_WEIGHT));
        }
        if BUG_FIX_RE.is_match(text) {
            signals.push(("bug fix mention".to_string(), BUG_FIX_WEIGHT));
        }
        if lowered.contains("balance") {
            signals.push(("balance mention".to_string(), BALANCE_WEIGHT));
        }
        if VERSION_RE.is_match(text) {
            signals.push(("version token".to_string(), VERSION_TOKEN_WEIGHT));
        }

        let bullet_lines = text.lines().filter(|line| is_bullet_line(line)).count();
        if bullet_lines >= MANY_BULLETS_MIN {
            signals.push((format!("{} bullet lines", bullet_lines), MANY_BULLETS_WEIGHT));
        } else if bullet_lines >= SOME_BULLETS_MIN {
            signals.push((format!("{} bullet lines", bullet_lines), SOME_BULLETS_WEIGHT));
        }

        let score = signals.iter().map(|(_, weight)| weight).sum();

        DetectionReport {
            score,
            threshold: self.score_threshold,
            signals,
        }
    }
}
