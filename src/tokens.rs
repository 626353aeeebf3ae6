//! Token classification helpers.

/// Majority classification of one batch of tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchKind {
    /// At most half of the tokens fail to parse as numbers.
    Numeric,
    /// Strictly more than half of the tokens fail to parse as numbers.
    Categorical,
}

/// Parse a token as a finite number.
///
/// Surrounding whitespace is ignored. Spellings such as `nan` or `inf`, and
/// literals that overflow to infinity, are not numbers.
pub fn parse_numeric(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn looks_numeric(token: &str) -> bool {
    parse_numeric(token).is_some()
}

/// Classify a batch by majority vote over numeric parses.
///
/// A batch is categorical only when the non-numeric count exceeds
/// `len / 2` (integer division), so an exact tie stays numeric.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> BatchKind {
    let non_numeric = tokens.iter().filter(|t| !looks_numeric(t.as_ref())).count();
    if non_numeric > tokens.len() / 2 {
        BatchKind::Categorical
    } else {
        BatchKind::Numeric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_accepts_numbers() {
        assert_eq!(parse_numeric("1.0"), Some(1.0));
        assert_eq!(parse_numeric(" -2.5 "), Some(-2.5));
        assert_eq!(parse_numeric("3e2"), Some(300.0));
        assert_eq!(parse_numeric("42"), Some(42.0));
        assert_eq!(parse_numeric(".5"), Some(0.5));
    }

    #[test]
    fn test_parse_numeric_rejects_words() {
        assert_eq!(parse_numeric("red"), None);
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("12abc"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("1e400"), None);
    }

    #[test]
    fn test_classify_majority() {
        assert_eq!(classify(&["red", "blue", "red", "green"]), BatchKind::Categorical);
        assert_eq!(classify(&["1.0", "2.5", "3.3"]), BatchKind::Numeric);
        assert_eq!(classify(&["a", "b", "c", "d", "42"]), BatchKind::Categorical);
        assert_eq!(classify(&["a", "1", "2"]), BatchKind::Numeric);
        assert_eq!(classify(&["a", "b", "2"]), BatchKind::Categorical);
    }

    #[test]
    fn test_classify_exact_half_is_numeric() {
        assert_eq!(classify(&["a", "b", "1", "2"]), BatchKind::Numeric);
        assert_eq!(classify(&["a", "1"]), BatchKind::Numeric);
    }

    #[test]
    fn test_classify_edge_sizes() {
        let empty: [&str; 0] = [];
        assert_eq!(classify(&empty), BatchKind::Numeric);
        assert_eq!(classify(&["x"]), BatchKind::Categorical);
        assert_eq!(classify(&["7"]), BatchKind::Numeric);
    }

    #[test]
    fn test_classify_owned_strings() {
        let tokens = vec!["x".to_string(), "y".to_string()];
        assert_eq!(classify(&tokens), BatchKind::Categorical);
    }
}
