//! Three-band resistor labels

use super::{ResistorError, format_ohms, ohms_from_bands};

/// Label for two digit bands and a multiplier band
///
/// `["orange", "orange", "red"]` reads "3.3 kiloohms". All given bands must
/// be digit colors; bands after the third are ignored.
pub fn label(colors: &[&str]) -> Result<String, ResistorError> {
    let [first, second, multiplier, rest @ ..] = colors else {
        return Err(ResistorError::TooFewBands {
            expected: 3,
            found: colors.len(),
        });
    };
    for color in rest {
        super::digit_of(color)?;
    }

    let ohms = ohms_from_bands(&[*first, *second], multiplier)?;
    Ok(format_ohms(ohms))
}
