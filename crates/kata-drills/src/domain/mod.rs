//! Domain layer - Pure exercise logic
//!
//! This module contains pure functions, lookup tables and validation
//! without I/O dependencies. Each exercise stands on its own.

pub mod collections;
pub mod numbers;
pub mod resistor;
pub mod text;
