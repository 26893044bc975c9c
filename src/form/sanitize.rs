//! Numeric field filtering

/// Keep only digits, commas and periods
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_letters() {
        assert_eq!(sanitize("12a,b.3"), "12,.3");
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize("12a,b.3");
        assert_eq!(sanitize(&once), once);

        for raw in ["", "abc", "1 000 000", "-5", "1e9", "٣٤", "10 GB"] {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_keeps_separators() {
        assert_eq!(sanitize("1,024.50"), "1,024.50");
    }

    #[test]
    fn test_drops_sign_and_whitespace() {
        assert_eq!(sanitize(" -42 "), "42");
        assert_eq!(sanitize("+7"), "7");
    }

    #[test]
    fn test_drops_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not 0-9
        assert_eq!(sanitize("٣٤5"), "5");
    }
}
