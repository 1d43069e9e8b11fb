//! Full resistor labels with tolerance

use super::{Color, ResistorError, digit_of, format_ohms, ohms_from_bands};

/// Human-readable label for one, four or five color bands
///
/// - one band: the digit value, e.g. `["black"]` → "0 ohms"
/// - four bands: two digits, multiplier, tolerance
/// - five bands: three digits, multiplier, tolerance
pub fn resistor_label(colors: &[&str]) -> Result<String, ResistorError> {
    let (digits, multiplier, tolerance) = match colors {
        [single] => return Ok(format_ohms(digit_of(single)? as u128)),
        [a, b, multiplier, tolerance] => (vec![*a, *b], *multiplier, *tolerance),
        [a, b, c, multiplier, tolerance] => (vec![*a, *b, *c], *multiplier, *tolerance),
        _ => return Err(ResistorError::InvalidBandCount(colors.len())),
    };

    let ohms = ohms_from_bands(&digits, multiplier)?;
    let tolerance_color: Color = tolerance.parse()?;
    let percent = tolerance_color
        .tolerance()
        .ok_or(ResistorError::NotATolerance(tolerance_color))?;

    Ok(format!("{} ±{}%", format_ohms(ohms), percent))
}
