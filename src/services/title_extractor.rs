use once_cell::sync::Lazy;
use regex::Regex;
use crate::helpers::markup::strip_heading_marker;

pub const FALLBACK_TITLE: &str = "Untitled Patch";

static TITLE_PHRASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(patch|version|update)\s+\d+").unwrap());

/// Derives the note title from the first non-blank line. No look-ahead:
/// a "better" title further down never wins.
pub struct TitleExtractor;

impl TitleExtractor {
    pub fn extract(&self, lines: &[&str]) -> String {
        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('#') {
                return strip_heading_marker(trimmed).to_string();
            }
            if TITLE_PHRASE_RE.is_match(trimmed) {
                return (*line).to_string();
            }
            return trimmed.to_string();
        }

        FALLBACK_TITLE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markdown_heading() {
        let extractor = TitleExtractor;
        assert_eq!(extractor.extract(&["", "# Patch 1.2"]), "Patch 1.2");
        assert_eq!(extractor.extract(&["## Hotfix 3"]), "Hotfix 3");
    }

    #[test]
    fn keeps_title_phrases_verbatim() {
        let extractor = TitleExtractor;
        assert_eq!(extractor.extract(&["Version 2 release notes"]), "Version 2 release notes");
        assert_eq!(extractor.extract(&["update 10 changes"]), "update 10 changes");
    }

    #[test]
    fn falls_back_to_first_line_trimmed() {
        let extractor = TitleExtractor;
        assert_eq!(extractor.extract(&["Some random text"]), "Some random text");
        assert_eq!(extractor.extract(&["  spaced out  "]), "spaced out");
    }

    #[test]
    fn no_lines_yields_fallback() {
        let extractor = TitleExtractor;
        assert_eq!(extractor.extract(&[]), FALLBACK_TITLE);
        assert_eq!(extractor.extract(&["", "   ", "\t"]), FALLBACK_TITLE);
    }

    #[test]
    fn first_non_blank_wins_over_later_heading() {
        let extractor = TitleExtractor;
        assert_eq!(
            extractor.extract(&["plain intro", "# Patch 9.0"]),
            "plain intro"
        );
    }
}
