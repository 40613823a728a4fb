//! Result classification.

use std::fmt;

use mimic_ir::TypeDescriptor;

/// How a mocked method extracts one of its results from the recorded call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// `r = ret.Error(i)`
    Error,
    /// `if ret.Get(i) != nil { r = ret.Get(i).(T) }`
    Nillable,
    /// `r = ret.Get(i).(T)`; a mismatched stand-in panics at call time.
    Value,
}

impl ResultKind {
    /// Classify a result type. Error takes priority over nillable.
    pub fn classify(ty: &TypeDescriptor) -> Self {
        if ty.is_error() {
            Self::Error
        } else if ty.is_nillable() {
            Self::Nillable
        } else {
            Self::Value
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Nillable => write!(f, "nillable"),
            Self::Value => write!(f, "value"),
        }
    }
}
