//! Small helpers shared by startup and the installer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading non-zero integer, optionally signed and zero-padded.
static NONZERO_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?0*[1-9]").expect("static regex is valid")
});

/// Convert a textual option value into a boolean.
///
/// `true`, `yes` and `on` (case-insensitive, no surrounding whitespace) and any
/// string starting with a non-zero number are true. Everything else is false.
pub fn option_str_to_bool(value: &str) -> bool {
    let lower = value.to_lowercase();
    matches!(lower.as_str(), "true" | "yes" | "on") || NONZERO_NUMBER.is_match(&lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_true() {
        assert!(option_str_to_bool("true"));
        assert!(option_str_to_bool("YES"));
        assert!(option_str_to_bool("On"));
    }

    #[test]
    fn test_keywords_with_whitespace_are_false() {
        assert!(!option_str_to_bool(" on"));
        assert!(!option_str_to_bool("yes "));
    }

    #[test]
    fn test_numbers() {
        assert!(option_str_to_bool("1"));
        assert!(option_str_to_bool("  +007"));
        assert!(option_str_to_bool("-3"));
        assert!(option_str_to_bool("12abc"));
        assert!(!option_str_to_bool("0"));
        assert!(!option_str_to_bool("000"));
        assert!(!option_str_to_bool("-0"));
    }

    #[test]
    fn test_other_values_are_false() {
        assert!(!option_str_to_bool(""));
        assert!(!option_str_to_bool("off"));
        assert!(!option_str_to_bool("false"));
        assert!(!option_str_to_bool("enabled"));
    }
}
