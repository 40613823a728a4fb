//! Generator parameters and batch configuration for mimic.
//!
//! - [`GeneratorParams`] - per-invocation parameters, decoded from a JSON blob
//! - [`MimicToml`] - a `mimic.toml` batch file listing many mocks to generate
//! - [`Error`] - decode, parse and validation failures with source spans

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod params;

pub use config::{BatchConfig, MimicToml, MockEntry};
pub use error::{Error, Result};
pub use params::{DEFAULT_MOCK_STRUCT_NAME_TEMPLATE, GeneratorParams};
