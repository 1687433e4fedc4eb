use once_cell::sync::Lazy;
use regex::Regex;

/// Bullet markers that introduce a discrete change entry: `-`, `*`, `•`
/// or `N.` followed by whitespace.
static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:[-*•]|\d+\.)\s+").unwrap());

const MAX_LABEL_CHARS: usize = 40;
const MAX_LABEL_WORDS: usize = 4;

pub fn is_bullet_line(line: &str) -> bool {
    BULLET_RE.is_match(line)
}

/// Returns the bullet text with its marker stripped, or `None` if the
/// line is not a bullet.
pub fn strip_bullet_marker(line: &str) -> Option<&str> {
    BULLET_RE.find(line).map(|m| line[m.end()..].trim_end())
}

/// Strips a leading run of `#` and whitespace from a heading line.
pub fn strip_heading_marker(line: &str) -> &str {
    line.trim()
        .trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .trim_end_matches(':')
        .trim_end()
}

/// Section headings are either markdown headings (`#`, `##`, ...) or
/// short standalone label lines such as `Bug Fixes:` or `Weapons`.
/// A label line must be short, a handful of words at most, contain a
/// letter and not read like a sentence.
pub fn looks_like_heading(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_bullet_line(trimmed) {
        return false;
    }
    if trimmed.starts_with('#') {
        return true;
    }

    let label = trimmed.trim_end_matches(':');
    label.len() <= MAX_LABEL_CHARS
        && label.split_whitespace().count() <= MAX_LABEL_WORDS
        && label.chars().any(|c| c.is_alphabetic())
        && !label.ends_with(['.', '!', '?', ',', ';'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_bullet_markers() {
        assert!(is_bullet_line("- Damage increased"));
        assert!(is_bullet_line("  * Fixed a crash"));
        assert!(is_bullet_line("• Mana cost reduced"));
        assert!(is_bullet_line("3. Reworked ultimate"));
        assert!(!is_bullet_line("Damage increased"));
        assert!(!is_bullet_line("-5 to -3"));
    }

    #[test]
    fn strips_bullet_markers() {
        assert_eq!(strip_bullet_marker("- Damage increased"), Some("Damage increased"));
        assert_eq!(strip_bullet_marker("2. Fixed a bug  "), Some("Fixed a bug"));
        assert_eq!(strip_bullet_marker("no marker"), None);
    }

    #[test]
    fn recognizes_headings() {
        assert!(looks_like_heading("## Bug Fixes"));
        assert!(looks_like_heading("# Balance"));
        assert!(looks_like_heading("Weapons:"));
        assert!(looks_like_heading("New Champions"));
        assert!(!looks_like_heading("- Bug Fixes"));
        assert!(!looks_like_heading("We fixed a lot of issues in this release."));
        assert!(!looks_like_heading(""));
    }

    #[test]
    fn strips_heading_markers() {
        assert_eq!(strip_heading_marker("## Bug Fixes"), "Bug Fixes");
        assert_eq!(strip_heading_marker("Weapons:"), "Weapons");
        assert_eq!(strip_heading_marker("#Balance"), "Balance");
    }
}
