//! Little sister's vocabulary: prefixes, suffixes and word groups

use thiserror::Error;

/// Vocabulary exercise errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    /// Word group without a prefix
    #[error("word group must start with a prefix")]
    MissingPrefix,
    /// Word index past the end of the sentence
    #[error("sentence has {len} words, no word at index {index}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Prepend "un" to `word`
pub fn add_prefix_un(word: &str) -> String {
    format!("un{word}")
}

/// Build a word group string from a prefix followed by root words
///
/// `["en", "close", "joy"]` becomes `"en :: enclose :: enjoy"`; a lone
/// prefix keeps its separator, `["en"]` becomes `"en :: "`.
pub fn make_word_groups(vocab_words: &[&str]) -> Result<String, VocabError> {
    let (prefix, words) = vocab_words.split_first().ok_or(VocabError::MissingPrefix)?;

    let prefixed: Vec<String> = words.iter().map(|word| format!("{prefix}{word}")).collect();
    Ok(format!("{prefix} :: {}", prefixed.join(" :: ")))
}

/// Remove a trailing "ness", restoring a "y" where "iness" was used
pub fn remove_suffix_ness(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("iness") {
        format!("{stem}y")
    } else if let Some(stem) = word.strip_suffix("ness") {
        stem.to_string()
    } else {
        word.to_string()
    }
}

/// Turn the adjective at whitespace-separated `index` into a verb
///
/// Trailing punctuation is dropped; words ending in "e" take "n",
/// everything else takes "en".
pub fn adjective_to_verb(sentence: &str, index: usize) -> Result<String, VocabError> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let adjective = words.get(index).ok_or(VocabError::IndexOutOfRange {
        index,
        len: words.len(),
    })?;

    if let Some(stripped) = adjective.strip_suffix(|c: char| c.is_ascii_punctuation()) {
        return Ok(format!("{stripped}en"));
    }
    if adjective.ends_with('e') {
        return Ok(format!("{adjective}n"));
    }
    Ok(format!("{adjective}en"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_prefix_un() {
        assert_eq!(add_prefix_un("happy"), "unhappy");
        assert_eq!(add_prefix_un(""), "un");
    }

    #[test]
    fn test_make_word_groups() {
        assert_eq!(
            make_word_groups(&["en", "close", "joy", "lighten"]).unwrap(),
            "en :: enclose :: enjoy :: enlighten"
        );
        assert_eq!(make_word_groups(&["pre"]).unwrap(), "pre :: ");
    }

    #[test]
    fn test_make_word_groups_empty() {
        assert_eq!(make_word_groups(&[]), Err(VocabError::MissingPrefix));
    }

    #[test]
    fn test_remove_suffix_ness() {
        assert_eq!(remove_suffix_ness("heaviness"), "heavy");
        assert_eq!(remove_suffix_ness("sadness"), "sad");
        assert_eq!(remove_suffix_ness("kindly"), "kindly");
    }

    #[test]
    fn test_adjective_to_verb() {
        assert_eq!(adjective_to_verb("It got dark as the sun set.", 2).unwrap(), "darken");
        assert_eq!(adjective_to_verb("Look at the bright sky.", 3).unwrap(), "brighten");
        assert_eq!(adjective_to_verb("His expression went dark.", 3).unwrap(), "darken");
        assert_eq!(adjective_to_verb("Make it loose please", 2).unwrap(), "loosen");
    }

    #[test]
    fn test_adjective_to_verb_out_of_range() {
        assert_eq!(
            adjective_to_verb("Too short", 5),
            Err(VocabError::IndexOutOfRange { index: 5, len: 2 })
        );
    }
}
