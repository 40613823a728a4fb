//! Go testify mock synthesis for the mimic mock generator.
//!
//! Given an [`InterfaceDescriptor`](mimic_ir::InterfaceDescriptor) and
//! [`GeneratorParams`](mimic_params::GeneratorParams), [`Generator`] emits
//! one Go file declaring a struct that embeds `mock.Mock` and implements
//! every interface method by recording the call and extracting results.
//!
//! # Pipeline
//!
//! ```text
//! naming → structure → method (× N, using classifier + type_renderer) → GoFile
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod classifier;
mod error;
mod generator;
mod go_file;
mod imports;
mod method;
mod naming;
mod structure;
mod type_renderer;
mod validate;

pub mod ast;

pub use classifier::ResultKind;
pub use error::{Error, Result};
pub use generator::{
    GENERATOR_NAME, GENERATOR_VERSION, Generator, decode_descriptor, provenance_header,
};
pub use go_file::GoFile;
pub use imports::{ImportSpec, Imports, MOCK_PACKAGE, package_name};
pub use method::synthesize_method;
pub use mimic_codegen::{Formatter, GenerateResult, GeneratedFile, Unformatted};
pub use naming::{GO_NAMING, mock_struct_name, output_path};
pub use structure::synthesize_structure;
pub use type_renderer::{TypeRenderer, func_type};
pub use validate::{MAX_TYPE_DEPTH, validate};
