//! ISBN-10 verification

use crate::constants::ISBN_LENGTH;

/// Check whether `isbn` is a valid ISBN-10
///
/// Dashes are ignored. The remaining ten characters must be nine ASCII digits
/// followed by a digit or `X` (worth 10). The weighted sum
/// `d1*10 + d2*9 + ... + d10*1` must be divisible by 11.
pub fn is_valid(isbn: &str) -> bool {
    let chars: Vec<char> = isbn.chars().filter(|&c| c != '-').collect();
    if chars.len() != ISBN_LENGTH {
        return false;
    }

    let mut sum = 0u32;
    for (i, &c) in chars.iter().enumerate() {
        let digit = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'X' if i == ISBN_LENGTH - 1 => 10,
            _ => return false,
        };
        sum += digit * (ISBN_LENGTH - i) as u32;
    }

    sum % 11 == 0
}
