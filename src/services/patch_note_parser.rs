use crate::helpers::markup::{looks_like_heading, strip_bullet_marker, strip_heading_marker};
use crate::services::category_normalizer::CategoryNormalizer;
use crate::services::title_extractor::TitleExtractor;
use crate::structs::change::Change;
use crate::structs::parsed_note::ParsedNote;
use crate::traits::kind_guesser::KindGuesser;

/// Walks the note line by line, tracking the current section heading as
/// category context. Bullet lines become changes; heading lines update
/// the context; everything else is ignored. Change order mirrors source
/// order.
pub struct PatchNoteParser {
    extractor: TitleExtractor,
    normalizer: CategoryNormalizer,
    guesser: Box<dyn KindGuesser>,
}

impl PatchNoteParser {
    pub fn new(guesser: Box<dyn KindGuesser>) -> Self {
        Self {
            extractor: TitleExtractor,
            normalizer: CategoryNormalizer,
            guesser,
        }
    }

    pub fn parse(&self, raw_text: &str) -> ParsedNote {
        let lines: Vec<&str> = raw_text.lines().collect();
        let title = self.extractor.extract(&lines);

        // The line the title came from is not category context.
        let title_index = lines.iter().position(|line| !line.trim().is_empty());

        let mut current_category = String::new();
        let mut changes = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            if Some(index) == title_index {
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(description) = strip_bullet_marker(trimmed) {
                if description.is_empty() {
                    continue;
                }
                let kind = self.guesser.guess(description, &current_category);
                let category = self.normalizer.normalize(&current_category);
                changes.push(Change::new(description, &category, kind));
            } else if looks_like_heading(trimmed) {
                current_category = strip_heading_marker(trimmed).to_string();
            }
        }

        ParsedNote { title, changes }
    }
}
