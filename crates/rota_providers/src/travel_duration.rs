use std::sync::LazyLock;

use regex::Regex;

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)").expect("valid duration regex"));

/// Extracts the first integer of a free-text travel estimate, e.g. `"15 min"` -> 15.
///
/// Returns `None` when the text carries no number, or one too large to
/// represent; rankings treat that as infinitely far.
pub fn parse_duration_minutes(text: &str) -> Option<u64> {
    LEADING_NUMBER
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration_minutes("15 min"), Some(15));
        assert_eq!(parse_duration_minutes("about 7 mins"), Some(7));
        assert_eq!(parse_duration_minutes("1 hr 20 min"), Some(1));
        assert_eq!(parse_duration_minutes("42"), Some(42));
    }

    #[test]
    fn test_parse_duration_minutes_without_number() {
        assert_eq!(parse_duration_minutes(""), None);
        assert_eq!(parse_duration_minutes("unknown"), None);
        assert_eq!(parse_duration_minutes("99999999999999999999999 min"), None);
    }
}
