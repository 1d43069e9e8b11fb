//! kata-drills - Solutions to short, self-contained programming exercises
//!
//! This crate provides:
//! - Text drills (anagrams, ciphers, RNA/protein translation, a word-math parser)
//! - Numeric puzzles (Armstrong numbers, Collatz steps, Roman numerals, handshakes)
//! - Resistor color band decoding (single band, duo, trio, full labels)
//! - Collection drills over caller-owned lists, maps and sets
//! - Parallel surveys running numeric checks over whole integer ranges

pub mod constants;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use app::survey::{
    ClassificationSummary, CollatzRecord, SurveyOptions, armstrong_numbers, classify_numbers,
    longest_collatz,
};
pub use domain::numbers::perfect_numbers::Classification;
pub use domain::numbers::roman::{from_roman, to_roman};
pub use domain::text::protein_translation::Protein;
pub use domain::text::wordy::{WordyError, answer};
