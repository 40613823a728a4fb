//! Core operations.
//!
//! This module contains the business logic for mimic commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod emit;

use std::path::Path;

use eyre::{Context, Result};
use mimic_codegen_go::decode_descriptor;
use mimic_ir::InterfaceFile;
use miette::Diagnostic;

pub use bake::bake;
pub use check::check;
pub use emit::{EmitOptions, emit};

/// Read and decode an interface descriptor file.
pub fn read_descriptor(path: &Path) -> Result<InterfaceFile> {
    let bytes =
        std::fs::read(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    decode_descriptor(&bytes).wrap_err_with(|| format!("Invalid descriptor {}", path.display()))
}

/// One-line description of a generator error, help text included.
pub fn describe(err: &mimic_codegen_go::Error) -> String {
    match err.help() {
        Some(help) => format!("{} ({})", err, help),
        None => err.to_string(),
    }
}
