//! Integer coercion for numeric-string roll fields.
//!
//! Several roll exports stringify numeric columns (age, serial number,
//! household sequence). Coercion failures are absorbed as `None`; they are
//! never an error at this layer.

/// Parse a string value to an integer, trimming surrounding whitespace.
///
/// Returns `None` for empty input or anything that is not a plain base-10
/// integer.
pub fn parse_int(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers() {
        assert_eq!(parse_int("123"), Some(123));
        assert_eq!(parse_int("-4"), Some(-4));
    }

    #[test]
    fn whitespace() {
        assert_eq!(parse_int("  42  "), Some(42));
    }

    #[test]
    fn empty() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
    }

    #[test]
    fn invalid() {
        assert_eq!(parse_int("x"), None);
        assert_eq!(parse_int("12a"), None);
        assert_eq!(parse_int("1.5"), None);
    }
}
