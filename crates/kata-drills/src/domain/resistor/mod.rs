//! Resistor color bands
//!
//! Ten digit colors map to 0-9; gold and silver only appear as tolerance
//! bands. Labels scale the resistance to the largest fitting metric prefix.

pub mod duo;
pub mod expert;
pub mod trio;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Metric prefixes from largest to smallest (name, power of ten)
pub const MAGNITUDES: [(&str, u32); 10] = [
    ("quetta", 30),
    ("ronna", 27),
    ("yotta", 24),
    ("zetta", 21),
    ("exa", 18),
    ("peta", 15),
    ("tera", 12),
    ("giga", 9),
    ("mega", 6),
    ("kilo", 3),
];

/// Resistor band colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

impl Color {
    /// Digit colors in value order
    pub const DIGITS: [Color; 10] = [
        Color::Black,
        Color::Brown,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
        Color::Grey,
        Color::White,
    ];

    /// Lowercase color name
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Brown => "brown",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Violet => "violet",
            Self::Grey => "grey",
            Self::White => "white",
            Self::Gold => "gold",
            Self::Silver => "silver",
        }
    }

    /// Digit value, `None` for gold and silver
    pub fn digit(self) -> Option<u8> {
        Self::DIGITS
            .iter()
            .position(|&c| c == self)
            .map(|i| i as u8)
    }

    /// Tolerance in percent, written exactly as printed on labels
    pub fn tolerance(self) -> Option<&'static str> {
        match self {
            Self::Grey => Some("0.05"),
            Self::Violet => Some("0.1"),
            Self::Blue => Some("0.25"),
            Self::Green => Some("0.5"),
            Self::Brown => Some("1"),
            Self::Red => Some("2"),
            Self::Gold => Some("5"),
            Self::Silver => Some("10"),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ResistorError;

    /// Parse a color name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::DIGITS
            .iter()
            .chain(&[Color::Gold, Color::Silver])
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ResistorError::UnknownColor(s.to_string()))
    }
}

/// Resistor decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResistorError {
    /// Not a resistor color at all
    #[error("{0:?} is not a valid resistor color")]
    UnknownColor(String),
    /// Tolerance-only color used where a digit is needed
    #[error("{0} has no digit value")]
    NotADigit(Color),
    /// Color that carries no tolerance used as the tolerance band
    #[error("{0} is not a tolerance color")]
    NotATolerance(Color),
    /// Fewer bands than the decoder reads
    #[error("at least {expected} colors are required, found {found}")]
    TooFewBands { expected: usize, found: usize },
    /// Band count the full label decoder does not support
    #[error("resistor labels have 1, 4 or 5 bands, found {0}")]
    InvalidBandCount(usize),
}

/// Parse a digit color and return its value
pub fn digit_of(color: &str) -> Result<u8, ResistorError> {
    let parsed: Color = color.parse()?;
    parsed.digit().ok_or(ResistorError::NotADigit(parsed))
}

/// Digit value of a single color band
pub fn color_code(color: &str) -> Result<u8, ResistorError> {
    digit_of(color)
}

/// All digit color names in value order
pub fn colors() -> [&'static str; 10] {
    Color::DIGITS.map(Color::name)
}

/// Format a resistance with the largest fitting metric prefix
///
/// Exact decimal arithmetic: 1500 becomes "1.5 kiloohms", 47000 becomes
/// "47 kiloohms", 220 stays "220 ohms".
pub fn format_ohms(ohms: u128) -> String {
    for (name, power) in MAGNITUDES {
        let scale = 10u128.pow(power);
        if ohms >= scale {
            let whole = ohms / scale;
            let fraction = ohms % scale;
            if fraction == 0 {
                return format!("{whole} {name}ohms");
            }
            let digits = format!("{:0width$}", fraction, width = power as usize);
            return format!("{whole}.{} {name}ohms", digits.trim_end_matches('0'));
        }
    }
    format!("{ohms} ohms")
}

/// Combine digit colors into a number and apply a multiplier color
pub(crate) fn ohms_from_bands(digits: &[&str], multiplier: &str) -> Result<u128, ResistorError> {
    let mut value: u128 = 0;
    for color in digits {
        value = value * 10 + digit_of(color)? as u128;
    }
    Ok(value * 10u128.pow(digit_of(multiplier)? as u32))
}
