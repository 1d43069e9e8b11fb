//! Numeric puzzles and small calculators

pub mod armstrong;
pub mod binary_search;
pub mod collatz;
pub mod currency_exchange;
pub mod darts;
pub mod grains;
pub mod leap;
pub mod meltdown;
pub mod perfect_numbers;
pub mod raindrops;
pub mod roman;
pub mod secret_handshake;
pub mod triangle;
