//! Secret handshake decoding
//!
//! Each of the five low bits of the code selects an action; the fifth bit
//! reverses the actions gathered so far.

use crate::constants::HANDSHAKE_MAX;
use std::fmt;
use thiserror::Error;

/// Handshake errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandshakeError {
    /// No binary digits left after stripping
    #[error("binary string contains no 0/1 digits")]
    Empty,
    /// Code larger than 31
    #[error("code must be between 0 and {max}, found {0}", max = HANDSHAKE_MAX)]
    OutOfRange(u32),
    /// More significant binary digits than a u32 code holds
    #[error("binary code has {0} significant digits, at most 32 are supported")]
    TooManyDigits(usize),
}

/// Handshake actions in bit order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Wink,
    DoubleBlink,
    CloseYourEyes,
    Jump,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wink => "wink",
            Self::DoubleBlink => "double blink",
            Self::CloseYourEyes => "close your eyes",
            Self::Jump => "jump",
        })
    }
}

const ACTIONS: [Action; 4] = [
    Action::Wink,
    Action::DoubleBlink,
    Action::CloseYourEyes,
    Action::Jump,
];

const REVERSE_BIT: u32 = 1 << 4;

/// Decode a numeric handshake code (0..=31)
pub fn commands_from_code(code: u32) -> Result<Vec<Action>, HandshakeError> {
    if code > HANDSHAKE_MAX {
        return Err(HandshakeError::OutOfRange(code));
    }

    let mut actions: Vec<Action> = ACTIONS
        .iter()
        .enumerate()
        .filter(|(bit, _)| code & (1 << bit) != 0)
        .map(|(_, action)| *action)
        .collect();

    if code & REVERSE_BIT != 0 {
        actions.reverse();
    }
    Ok(actions)
}

/// Decode a handshake written as a binary string
///
/// Characters other than `0` and `1` are stripped first; leading zeros are
/// allowed.
pub fn commands(binary: &str) -> Result<Vec<Action>, HandshakeError> {
    let digits: Vec<u32> = binary
        .chars()
        .filter_map(|c| match c {
            '0' => Some(0),
            '1' => Some(1),
            _ => None,
        })
        .collect();

    if digits.is_empty() {
        return Err(HandshakeError::Empty);
    }

    let significant = &digits[digits.iter().position(|&d| d == 1).unwrap_or(digits.len())..];
    if significant.len() > u32::BITS as usize {
        return Err(HandshakeError::TooManyDigits(significant.len()));
    }

    let code = significant.iter().fold(0u32, |code, &digit| (code << 1) | digit);
    commands_from_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_actions() {
        assert_eq!(commands("00001").unwrap(), vec![Action::Wink]);
        assert_eq!(commands("00010").unwrap(), vec![Action::DoubleBlink]);
        assert_eq!(commands("00100").unwrap(), vec![Action::CloseYourEyes]);
        assert_eq!(commands("01000").unwrap(), vec![Action::Jump]);
    }

    #[test]
    fn test_combined_actions() {
        assert_eq!(
            commands("00011").unwrap(),
            vec![Action::Wink, Action::DoubleBlink]
        );
    }

    #[test]
    fn test_reverse() {
        assert_eq!(
            commands("10011").unwrap(),
            vec![Action::DoubleBlink, Action::Wink]
        );
        assert_eq!(
            commands("11111").unwrap(),
            vec![
                Action::Jump,
                Action::CloseYourEyes,
                Action::DoubleBlink,
                Action::Wink
            ]
        );
    }

    #[test]
    fn test_reverse_alone_and_zero() {
        assert!(commands("10000").unwrap().is_empty());
        assert!(commands("00000").unwrap().is_empty());
    }

    #[test]
    fn test_non_binary_characters_stripped() {
        assert_eq!(commands("0b0 0011").unwrap(), vec![Action::Wink, Action::DoubleBlink]);
        assert_eq!(commands("000001").unwrap(), vec![Action::Wink]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(commands("abc"), Err(HandshakeError::Empty));
        assert_eq!(commands("100000"), Err(HandshakeError::OutOfRange(32)));
        assert_eq!(commands_from_code(40), Err(HandshakeError::OutOfRange(40)));
    }

    #[test]
    fn test_overlong_codes() {
        let forty_ones = "1".repeat(40);
        assert_eq!(commands(&forty_ones), Err(HandshakeError::TooManyDigits(40)));
        let thirty_two_ones = "1".repeat(32);
        assert_eq!(commands(&thirty_two_ones), Err(HandshakeError::OutOfRange(u32::MAX)));
        let padded = format!("{}00011", "0".repeat(60));
        assert_eq!(commands(&padded).unwrap(), vec![Action::Wink, Action::DoubleBlink]);
    }

    #[test]
    fn test_display() {
        let words: Vec<String> = commands_from_code(0b1111)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(words, ["wink", "double blink", "close your eyes", "jump"]);
    }
}
