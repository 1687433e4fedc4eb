pub const DEFAULT_CATEGORY: &str = "Other";

/// Ordered (needle, canonical label) pairs. Several needles can match the
/// same label text, so order decides: first match wins.
const CATEGORY_RULES: &[(&str, &str)] = &[
    ("bug fixes", "Bug Fixes"),
    ("bugfixes", "Bug Fixes"),
    ("bugs", "Bug Fixes"),
    ("fixes", "Bug Fixes"),
    ("bug", "Bug Fixes"),
    ("new", "New Content"),
    ("added", "New Content"),
    ("introduc", "New Content"),
    ("sets", "New Content"),
    ("champions", "New Content"),
    ("heroes", "New Content"),
    ("characters", "New Content"),
    ("items", "New Content"),
    ("weapons", "New Content"),
    ("balance", "Balance"),
    ("balancing", "Balance"),
    ("general", "Other"),
    ("misc", "Other"),
    ("miscellaneous", "Other"),
];

/// Canonicalizes a free-text section label into one of a small set of
/// category names. Unrecognized labels land in the default category, so
/// a change never carries an empty category.
pub struct CategoryNormalizer;

impl CategoryNormalizer {
    pub fn normalize(&self, raw_category: &str) -> String {
        let lowered = raw_category.to_lowercase();
        let cleaned = lowered
            .trim()
            .trim_start_matches(|c: char| c == '#' || c.is_whitespace());

        for (needle, canonical) in CATEGORY_RULES {
            if cleaned.contains(needle) {
                return (*canonical).to_string();
            }
        }

        DEFAULT_CATEGORY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_known_labels() {
        let normalizer = CategoryNormalizer;
        assert_eq!(normalizer.normalize("## Bug Fixes"), "Bug Fixes");
        assert_eq!(normalizer.normalize("Bugfixes"), "Bug Fixes");
        assert_eq!(normalizer.normalize("New Champions"), "New Content");
        assert_eq!(normalizer.normalize("Balance Changes"), "Balance");
        assert_eq!(normalizer.normalize("General"), "Other");
    }

    #[test]
    fn unknown_labels_become_other() {
        let normalizer = CategoryNormalizer;
        assert_eq!(normalizer.normalize("totally unrelated"), "Other");
        assert_eq!(normalizer.normalize(""), "Other");
    }

    #[test]
    fn first_match_wins_when_needles_overlap() {
        let normalizer = CategoryNormalizer;
        // "new bug fixes" contains both "bug fixes" and "new"; the fix
        // rule sits earlier in the table.
        assert_eq!(normalizer.normalize("new bug fixes"), "Bug Fixes");
        // "weapons balancing" hits "weapons" before "balancing".
        assert_eq!(normalizer.normalize("weapons balancing"), "New Content");
    }

    #[test]
    fn never_returns_empty() {
        let normalizer = CategoryNormalizer;
        for label in ["", "  ", "###", "???"] {
            assert!(!normalizer.normalize(label).is_empty());
        }
    }
}
