//! String reversal

/// Reverse the characters of `text`
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
