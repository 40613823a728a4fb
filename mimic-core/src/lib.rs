//! Core utilities and types for the mimic mock generator.
//!
//! This crate provides fundamental types and utilities used across
//! the mimic crates.

mod file;
mod utils;
mod version;

// File operations
pub use file::{OutputFile, Overwrite, WriteResult};
// String utilities
pub use utils::to_snake_case;
pub use version::Version;
