//! Roman numeral conversion
//!
//! Encoding uses the subtractive table greedily from the largest symbol.
//! Decoding accepts canonical numerals only, so every accepted string
//! re-encodes to itself.

use crate::constants::ROMAN_MAX;
use thiserror::Error;

/// Symbol table in descending order, subtractive pairs included
const SYMBOLS: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Roman numeral errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanError {
    /// Number above 3999
    #[error("number must be between 0 and {max}, found {0}", max = ROMAN_MAX)]
    OutOfRange(u32),
    /// Character that is not a Roman symbol
    #[error("invalid Roman symbol {0:?}")]
    InvalidSymbol(char),
    /// Symbols in a non-canonical order or repetition
    #[error("{0:?} is not a canonical Roman numeral")]
    NotCanonical(String),
    /// Empty input
    #[error("empty Roman numeral")]
    Empty,
}

/// Value of a single Roman symbol
#[inline]
fn symbol_value(symbol: char) -> Option<u32> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Convert `number` (0..=3999) to Roman numerals
///
/// Zero has no Roman symbol and converts to the empty string.
pub fn to_roman(number: u32) -> Result<String, RomanError> {
    if number > ROMAN_MAX {
        return Err(RomanError::OutOfRange(number));
    }

    let mut rest = number;
    let mut result = String::new();
    for (symbol, value) in SYMBOLS {
        let count = rest / value;
        rest %= value;
        result.push_str(&symbol.repeat(count as usize));
    }
    Ok(result)
}

/// Parse a canonical Roman numeral (I..=MMMCMXCIX)
pub fn from_roman(numeral: &str) -> Result<u32, RomanError> {
    if numeral.is_empty() {
        return Err(RomanError::Empty);
    }

    let values = numeral
        .chars()
        .map(|c| symbol_value(c).ok_or(RomanError::InvalidSymbol(c)))
        .collect::<Result<Vec<u32>, _>>()?;

    let mut total = 0u32;
    for (i, &value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if next > value => total = total.wrapping_sub(value),
            _ => total = total.wrapping_add(value),
        }
    }

    // Non-canonical forms such as "IIII" or "IC" either land outside the
    // range or fail to re-encode to the same text.
    if total == 0 || total > ROMAN_MAX || to_roman(total)? != numeral {
        return Err(RomanError::NotCanonical(numeral.to_string()));
    }
    Ok(total)
}
