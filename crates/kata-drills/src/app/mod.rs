//! Application layer - Use case implementations
//!
//! This module runs domain checks over large inputs in parallel.

pub mod survey;
