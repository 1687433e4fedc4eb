use crate::structs::detection_report::DetectionReport;

/// Gate in front of the pipeline: scores raw text and decides whether it
/// is worth parsing as a patch note.
#[cfg_attr(test, mockall::automock)]
pub trait NoteDetector {
    fn detect(&self, text: &str) -> DetectionReport;

    fn is_patch_note(&self, text: &str) -> bool {
        self.detect(text).is_patch_note()
    }
}
