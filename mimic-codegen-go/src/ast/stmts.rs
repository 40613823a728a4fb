//! Go statements.

use mimic_codegen::builder::{CodeFragment, Renderable};

/// A statement inside a Go function body.
///
/// Expressions are kept as rendered text; only the statement structure is
/// modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// An expression statement, e.g. `_m.Called(a)`.
    Expr(String),
    /// `lhs := rhs`
    Define { lhs: String, rhs: String },
    /// `var name ty`
    Var { name: String, ty: String },
    /// `lhs = rhs`
    Assign { lhs: String, rhs: String },
    /// `if init; cond { then } else { otherwise }`
    If {
        init: Option<String>,
        cond: String,
        then: Vec<Stmt>,
        otherwise: Option<Vec<Stmt>>,
    },
    /// `return a, b`
    Return(Vec<String>),
    /// An empty line between statement groups.
    Blank,
}

impl Stmt {
    pub fn expr(expr: impl Into<String>) -> Self {
        Self::Expr(expr.into())
    }

    pub fn define(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self::Define {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn var(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::Var {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn assign(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self::Assign {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// An `if` without an init statement or else branch.
    pub fn if_(cond: impl Into<String>, then: Vec<Stmt>) -> Self {
        Self::If {
            init: None,
            cond: cond.into(),
            then,
            otherwise: None,
        }
    }

    /// Attach an init statement to an `if`. No effect on other statements.
    pub fn with_init(self, init: impl Into<String>) -> Self {
        match self {
            Self::If {
                cond,
                then,
                otherwise,
                ..
            } => Self::If {
                init: Some(init.into()),
                cond,
                then,
                otherwise,
            },
            other => other,
        }
    }

    /// Attach an else branch to an `if`. No effect on other statements.
    pub fn with_else(self, otherwise: Vec<Stmt>) -> Self {
        match self {
            Self::If {
                init, cond, then, ..
            } => Self::If {
                init,
                cond,
                then,
                otherwise: Some(otherwise),
            },
            other => other,
        }
    }

    pub fn ret(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Return(values.into_iter().map(Into::into).collect())
    }
}

impl Renderable for Stmt {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Stmt::Expr(expr) => vec![CodeFragment::line(expr.as_str())],
            Stmt::Define { lhs, rhs } => vec![CodeFragment::line(format!("{} := {}", lhs, rhs))],
            Stmt::Var { name, ty } => vec![CodeFragment::line(format!("var {} {}", name, ty))],
            Stmt::Assign { lhs, rhs } => vec![CodeFragment::line(format!("{} = {}", lhs, rhs))],
            Stmt::If {
                init,
                cond,
                then,
                otherwise,
            } => {
                let header = match init {
                    Some(init) => format!("if {}; {} {{", init, cond),
                    None => format!("if {} {{", cond),
                };
                match otherwise {
                    Some(otherwise) => vec![
                        CodeFragment::block(header, then[..].to_fragments(), None),
                        CodeFragment::braced("} else {", otherwise[..].to_fragments()),
                    ],
                    None => vec![CodeFragment::braced(header, then[..].to_fragments())],
                }
            }
            Stmt::Return(values) if values.is_empty() => vec![CodeFragment::line("return")],
            Stmt::Return(values) => vec![CodeFragment::line(format!(
                "return {}",
                values.join(", ")
            ))],
            Stmt::Blank => vec![CodeFragment::blank()],
        }
    }
}
