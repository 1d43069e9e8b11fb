//! Wheat grains on a chess board, doubling every square

use crate::constants::BOARD_SQUARES;
use thiserror::Error;

/// Grain counting errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrainsError {
    /// Square outside 1..=64
    #[error("square must be between 1 and {max}, found {0}", max = BOARD_SQUARES)]
    InvalidSquare(u32),
}

/// Grains on square `number` (1-based)
pub fn square(number: u32) -> Result<u64, GrainsError> {
    if !(1..=BOARD_SQUARES).contains(&number) {
        return Err(GrainsError::InvalidSquare(number));
    }
    Ok(1u64 << (number - 1))
}

/// Grains on the whole board
pub fn total() -> u64 {
    u64::MAX
}
