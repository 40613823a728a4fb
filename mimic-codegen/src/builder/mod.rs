//! Code generation building blocks.
//!
//! AST nodes describe themselves as [`CodeFragment`]s through
//! [`Renderable`]; a [`CodeBuilder`] turns fragments into indented text.

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
