//! Go AST builders for the declarations a mock file contains.
//!
//! These provide a small, structured model of Go syntax. Synthesis builds
//! these values and [`GoFile`](crate::GoFile) renders them via CodeBuilder.

mod decls;
mod stmts;

pub use decls::{Decl, Field, FuncDecl, Param, StructType};
pub use stmts::Stmt;
