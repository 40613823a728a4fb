//! Shared code generation utilities for the mimic mock generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific synthesis engine (`mimic-codegen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`diagnostic`] - Errors, warnings and notes collected while checking input
//! - [`naming`] - Naming conventions and format-template expansion
//! - [`output`] - Generated files and the external formatter seam

pub mod builder;
pub mod diagnostic;
pub mod naming;
pub mod output;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use diagnostic::{Diagnostic, Severity};
pub use naming::{NamingConvention, expand_template};
pub use output::{Formatter, GenerateResult, GeneratedFile, Unformatted};
