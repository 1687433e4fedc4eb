use once_cell::sync::Lazy;
use regex::Regex;
use crate::enums::change_kind::ChangeKind;
use crate::helpers::numeric::parse_stat_value;
use crate::traits::kind_guesser::KindGuesser;

/// Terms for which a numeric increase is semantically a weakening.
/// Matched as lowercase substrings of the description plus category.
const DEFAULT_INVERT_KEYWORDS: &[&str] = &[
    "cooldown",
    "cost",
    "mana cost",
    "mp cost",
    "delay",
    "cast time",
    "stagger",
];

static FIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(fix|fixed|bug)\b").unwrap());

/// `A → B`, `A -> B` or `A to B` where both sides parse as numbers
/// (optional sign, comma or dot decimal separator, optional `%`).
static TRANSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?P<from>[+-]?\d+(?:[.,]\d+)?)\s*%?\s*(?:→|->|\bto\b)\s*(?P<to>[+-]?\d+(?:[.,]\d+)?)",
    )
    .unwrap()
});

static LEADING_SIGN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]\d").unwrap());

static BUFF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\b(buff(ed)?|increased?|improved)\b|more damage|more health)").unwrap()
});

static NERF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\b(nerf(ed)?|debuff|reduced?|decreased?)\b|less damage|less health)").unwrap()
});

/// Classifies one change description into a change kind.
///
/// Evaluation order, first match wins:
/// 1. rework mention (description or category)
/// 2. whole-word fix/bug mention
/// 3. numeric transition `A → B`, classified by delta sign
/// 4. explicit leading `+N`/`-N`, treated as a unit delta
/// 5. buff/nerf keyword scan
/// 6. everything else is Other
///
/// Before a delta is classified, its sign is negated when any
/// invert-on-increase keyword appears in the description or category.
pub struct ChangeTypeGuesser {
    invert_keywords: Vec<String>,
}

impl ChangeTypeGuesser {
    pub fn new() -> Self {
        Self::with_extra_keywords(&[])
    }

    pub fn with_extra_keywords(extra: &[String]) -> Self {
        let mut invert_keywords: Vec<String> = DEFAULT_INVERT_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .collect();
        invert_keywords.extend(
            extra
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty()),
        );
        Self { invert_keywords }
    }

    fn should_invert(&self, haystack: &str) -> bool {
        self.invert_keywords
            .iter()
            .any(|keyword| haystack.contains(keyword.as_str()))
    }

    fn classify_delta(&self, delta: f64, haystack: &str) -> ChangeKind {
        let delta = if self.should_invert(haystack) { -delta } else { delta };

        if delta > 0.0 {
            ChangeKind::Buff
        } else if delta < 0.0 {
            ChangeKind::Debuff
        } else {
            ChangeKind::Other
        }
    }

    fn numeric_transition(description: &str) -> Option<f64> {
        let caps = TRANSITION_RE.captures(description)?;
        let from = parse_stat_value(&caps["from"])?;
        let to = parse_stat_value(&caps["to"])?;
        Some(to - from)
    }
}

impl Default for ChangeTypeGuesser {
    fn default() -> Self {
        Self::new()
    }
}

impl KindGuesser for ChangeTypeGuesser {
    fn guess(&self, description: &str, category: &str) -> ChangeKind {
        let haystack = format!("{} {}", description, category).to_lowercase();

        if haystack.contains("rework") || haystack.contains("re-work") {
            return ChangeKind::Rework;
        }

        if FIX_RE.is_match(description) {
            return ChangeKind::Fix;
        }

        // Unparsable numeric tokens fall through to the next tier.
        if let Some(delta) = Self::numeric_transition(description) {
            return self.classify_delta(delta, &haystack);
        }

        let trimmed = description.trim();
        if LEADING_SIGN_RE.is_match(trimmed) {
            let delta = if trimmed.starts_with('+') { 1.0 } else { -1.0 };
            return self.classify_delta(delta, &haystack);
        }

        if BUFF_RE.is_match(description) {
            return ChangeKind::Buff;
        }
        if NERF_RE.is_match(description) {
            return ChangeKind::Debuff;
        }

        ChangeKind::Other
    }
}
