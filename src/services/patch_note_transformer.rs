use crate::errors::{PatchlyzerError, PatchlyzerResult};
use crate::services::change_type_guesser::ChangeTypeGuesser;
use crate::services::markdown_formatter::MarkdownFormatter;
use crate::services::patch_note_analyzer::PatchNoteAnalyzer;
use crate::services::patch_note_detector::PatchNoteDetector;
use crate::services::patch_note_parser::PatchNoteParser;
use crate::structs::analysis::Analysis;
use crate::structs::config::config::Config;
use crate::structs::parsed_note::ParsedNote;
use crate::traits::note_detector::NoteDetector;

/// The only entry point external callers use: gate the input, parse it,
/// analyze the changes and render the canonical report. Stateless across
/// calls; safe to share between threads of independent inputs.
pub struct PatchNoteTransformer {
    detector: Box<dyn NoteDetector>,
    parser: PatchNoteParser,
    analyzer: PatchNoteAnalyzer,
    formatter: MarkdownFormatter,
    max_input_bytes: usize,
}

impl PatchNoteTransformer {
    pub fn new(config: &Config) -> Self {
        let guesser =
            ChangeTypeGuesser::with_extra_keywords(&config.guesser.extra_invert_keywords);

        Self {
            detector: Box::new(PatchNoteDetector::new(config.detection.score_threshold)),
            parser: PatchNoteParser::new(Box::new(guesser)),
            analyzer: PatchNoteAnalyzer,
            formatter: MarkdownFormatter,
            max_input_bytes: config.limits.max_input_bytes,
        }
    }

    /// Replaces the gate. Test seam for substituting a fake detector.
    pub fn with_detector(mut self, detector: Box<dyn NoteDetector>) -> Self {
        self.detector = detector;
        self
    }

    pub fn transform(&self, raw_text: &str) -> PatchlyzerResult<String> {
        let (note, analysis) = self.transform_to_parts(raw_text)?;
        Ok(self.formatter.format(&note, &analysis))
    }

    /// Same pipeline as [`transform`](Self::transform), stopping before
    /// the markdown rendering step.
    pub fn transform_to_parts(&self, raw_text: &str) -> PatchlyzerResult<(ParsedNote, Analysis)> {
        let text = self.bounded(raw_text);

        let report = self.detector.detect(text);
        if !report.is_patch_note() {
            return Err(PatchlyzerError::not_patch_note(report.score, report.threshold));
        }

        let note = self.parser.parse(text);
        let analysis = self.analyzer.analyze(&note.changes);
        Ok((note, analysis))
    }

    /// Truncates oversized input at a char boundary. Bounding the text
    /// keeps regex cost predictable on hostile input.
    fn bounded<'a>(&self, text: &'a str) -> &'a str {
        if text.len() <= self.max_input_bytes {
            return text;
        }

        let mut end = self.max_input_bytes;
        while end > 0 && !text.is_char_boundary(end) {
            end -= 1;
        }
        &text[..end]
    }
}
