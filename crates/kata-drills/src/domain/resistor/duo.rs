//! Two-band resistor values

use super::{ResistorError, digit_of};

/// Two-digit value of the first two bands
///
/// At least two bands are required; additional bands are ignored.
pub fn value(colors: &[&str]) -> Result<u32, ResistorError> {
    let [first, second, ..] = colors else {
        return Err(ResistorError::TooFewBands {
            expected: 2,
            found: colors.len(),
        });
    };
    Ok(digit_of(first)? as u32 * 10 + digit_of(second)? as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_bands() {
        assert_eq!(value(&["brown", "black"]), Ok(10));
        assert_eq!(value(&["blue", "grey"]), Ok(68));
        assert_eq!(value(&["yellow", "violet"]), Ok(47));
        assert_eq!(value(&["white", "red"]), Ok(92));
    }

    #[test]
    fn test_leading_black() {
        assert_eq!(value(&["black", "brown"]), Ok(1));
    }

    #[test]
    fn test_extra_bands_ignored() {
        assert_eq!(value(&["green", "brown", "orange"]), Ok(51));
    }

    #[test]
    fn test_too_few_bands() {
        assert_eq!(
            value(&["red"]),
            Err(ResistorError::TooFewBands { expected: 2, found: 1 })
        );
    }

    #[test]
    fn test_invalid_color() {
        assert!(matches!(
            value(&["red", "pink"]),
            Err(ResistorError::UnknownColor(_))
        ));
    }
}
