//! Anagram detection
//!
//! Two words are anagrams when their case-insensitive letter multisets match.
//! A word is never its own anagram.

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as CountMap;
#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap as CountMap;

/// Count each character of the lowercased word
pub fn letter_counts(word: &str) -> CountMap<char, usize> {
    let mut counts = CountMap::default();
    for c in word.chars().flat_map(char::to_lowercase) {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Select the candidates that are anagrams of `word`
///
/// Comparison is case-insensitive. Candidates equal to `word` (ignoring case)
/// are excluded. Candidate order is preserved.
pub fn find_anagrams<'a>(word: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    let lowered = word.to_lowercase();
    let target = letter_counts(word);

    candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.to_lowercase() != lowered)
        .filter(|candidate| letter_counts(candidate) == target)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matches() {
        assert!(find_anagrams("diaper", &["hello", "world", "zombies", "pants"]).is_empty());
    }

    #[test]
    fn test_detects_multiple_anagrams() {
        let result = find_anagrams("master", &["stream", "pigeon", "maters"]);
        assert_eq!(result, vec!["stream", "maters"]);
    }

    #[test]
    fn test_repeated_letters_must_match_count() {
        assert!(find_anagrams("galea", &["eagle"]).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let result = find_anagrams("Orchestra", &["cashregister", "Carthorse", "radishes"]);
        assert_eq!(result, vec!["Carthorse"]);
    }

    #[test]
    fn test_identity_excluded() {
        assert!(find_anagrams("BANANA", &["banana", "Banana", "BANANA"]).is_empty());
    }

    #[test]
    fn test_identity_excluded_but_others_kept() {
        let result = find_anagrams("LISTEN", &["LISTEN", "Silent"]);
        assert_eq!(result, vec!["Silent"]);
    }

    #[test]
    fn test_letter_counts() {
        let counts = letter_counts("AaB");
        assert_eq!(counts.get(&'a'), Some(&2));
        assert_eq!(counts.get(&'b'), Some(&1));
    }
}
