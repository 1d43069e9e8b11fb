//! Isogram check: no letter appears more than once

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashSet as SeenSet;
#[cfg(not(feature = "fx-hash"))]
use std::collections::HashSet as SeenSet;

/// Check whether `text` is an isogram
///
/// Letters are compared case-insensitively; spaces, hyphens and other
/// non-letters may repeat.
pub fn is_isogram(text: &str) -> bool {
    let mut seen = SeenSet::default();
    text.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .all(|c| seen.insert(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        assert!(is_isogram(""));
    }

    #[test]
    fn test_simple_isogram() {
        assert!(is_isogram("isogram"));
        assert!(is_isogram("lumberjacks"));
    }

    #[test]
    fn test_repeated_letter() {
        assert!(!is_isogram("eleven"));
    }

    #[test]
    fn test_mixed_case_duplicate() {
        assert!(!is_isogram("Alphabet"));
    }

    #[test]
    fn test_hyphens_and_spaces_ignored() {
        assert!(is_isogram("six-year-old"));
        assert!(is_isogram("Emily Jung Schwartzkopf"));
        assert!(!is_isogram("up-to-date"));
    }
}
