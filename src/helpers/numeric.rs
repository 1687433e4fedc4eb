/// Parses a numeric token as it appears in patch notes: optional leading
/// sign, comma or dot as decimal separator, optional trailing `%`.
/// Returns `None` instead of failing so callers can fall back to the next
/// heuristic.
pub fn parse_stat_value(raw: &str) -> Option<f64> {
    let cleaned = raw
        .trim()
        .trim_end_matches('%')
        .trim()
        .replace(',', ".");

    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_stat_value("10"), Some(10.0));
        assert_eq!(parse_stat_value("-3"), Some(-3.0));
        assert_eq!(parse_stat_value("+5"), Some(5.0));
    }

    #[test]
    fn parses_decimal_comma_and_percent() {
        assert_eq!(parse_stat_value("12,5"), Some(12.5));
        assert_eq!(parse_stat_value("1.75"), Some(1.75));
        assert_eq!(parse_stat_value("40%"), Some(40.0));
        assert_eq!(parse_stat_value("2,5 %"), Some(2.5));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(parse_stat_value("ten"), None);
        assert_eq!(parse_stat_value(""), None);
        assert_eq!(parse_stat_value("1.2.3"), None);
    }
}
