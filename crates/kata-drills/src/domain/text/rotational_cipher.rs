//! Rotational (Caesar) cipher over the English alphabet

use crate::constants::MAX_ROTATION;
use thiserror::Error;

/// Rotational cipher errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key outside 0..=26
    #[error("key must be between 0 and {max}, found {0}", max = MAX_ROTATION)]
    InvalidKey(u8),
}

/// Shift every ASCII letter of `text` by `key` places
///
/// Case is preserved; digits, punctuation and non-ASCII characters are
/// copied unchanged. A key of 0 or 26 leaves the text as is.
pub fn rotate(text: &str, key: u8) -> Result<String, CipherError> {
    if key > MAX_ROTATION {
        return Err(CipherError::InvalidKey(key));
    }

    Ok(text.chars().map(|c| rotate_char(c, key)).collect())
}

#[inline]
fn rotate_char(c: char, key: u8) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let offset = (c as u8 - base + key) % 26;
    (base + offset) as char
}
