//! Interface descriptor types for the mimic mock generator.
//!
//! This crate holds the structural description of a Go interface that the
//! synthesis engine consumes. Descriptors are produced by a parsing
//! collaborator and are read-only to the generator.
//!
//! # Architecture
//!
//! ```text
//! Go source → parser (external) → mimic-ir (descriptors) → mimic-codegen-go
//! ```
//!
//! The IR types are designed to be:
//! - Syntax-free (no positions, comments, or formatting)
//! - Already resolved (every named type records its defining package)
//! - Self-contained (no dependencies beyond serde)

mod interface;
mod types;

pub use interface::{InterfaceDescriptor, InterfaceFile, MethodDescriptor, ParamDescriptor};
pub use types::{ChanDir, TypeDescriptor};
