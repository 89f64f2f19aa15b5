//! Parsing of raw form input into draft fields

/// Quantity typed into a number input. Empty means 0; garbage keeps
/// `current`.
pub fn parse_quantity(raw: &str, current: i32) -> i32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    raw.parse::<i32>().unwrap_or(current)
}

/// Trimmed text or `None` when blank
pub fn non_blank(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12", 0), 12);
        assert_eq!(parse_quantity(" 7 ", 0), 7);
        assert_eq!(parse_quantity("", 5), 0);
        assert_eq!(parse_quantity("1x", 5), 5);
        assert_eq!(parse_quantity("-3", 5), -3);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  P/1 "), Some("P/1".to_string()));
        assert_eq!(non_blank("   "), None);
    }
}
