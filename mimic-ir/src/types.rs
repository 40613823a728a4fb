//! Type shape descriptors.

use serde::{Deserialize, Serialize};

/// Direction of a channel type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanDir {
    /// `chan T`
    #[default]
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}

/// Structural description of a type.
///
/// This is a closed taxonomy: every type reachable from an interface
/// descriptor is one of these shapes. The tree is finite and owned, so it
/// cannot contain cycles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// A declared type, e.g. `bytes.Buffer` or `User`.
    Named {
        /// Import path of the package that declares the type.
        /// Empty for universe-scope identifiers.
        #[serde(default)]
        package: String,
        name: String,
    },
    /// `*T`
    Pointer { elem: Box<TypeDescriptor> },
    /// `[]T`
    Slice { elem: Box<TypeDescriptor> },
    /// `[N]T`
    Array { len: u64, elem: Box<TypeDescriptor> },
    /// `map[K]V`
    Map {
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
    },
    /// `chan T`, `chan<- T` or `<-chan T`
    Chan {
        #[serde(default)]
        dir: ChanDir,
        elem: Box<TypeDescriptor>,
    },
    /// `func(P...) R...`
    Func {
        #[serde(default)]
        params: Vec<TypeDescriptor>,
        #[serde(default)]
        results: Vec<TypeDescriptor>,
    },
    /// Any anonymous interface type, empty or not.
    Interface,
    /// `...T`, only valid as the last parameter of a signature.
    Variadic { elem: Box<TypeDescriptor> },
    /// A predeclared type such as `string`, `int64` or `error`.
    Builtin { name: String },
}

impl TypeDescriptor {
    pub fn named(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn builtin(name: impl Into<String>) -> Self {
        Self::Builtin { name: name.into() }
    }

    pub fn pointer(elem: TypeDescriptor) -> Self {
        Self::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: TypeDescriptor) -> Self {
        Self::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn array(len: u64, elem: TypeDescriptor) -> Self {
        Self::Array {
            len,
            elem: Box::new(elem),
        }
    }

    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(dir: ChanDir, elem: TypeDescriptor) -> Self {
        Self::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    pub fn func(params: Vec<TypeDescriptor>, results: Vec<TypeDescriptor>) -> Self {
        Self::Func { params, results }
    }

    pub fn variadic(elem: TypeDescriptor) -> Self {
        Self::Variadic {
            elem: Box::new(elem),
        }
    }

    /// Convenience: the predeclared `string` type.
    pub fn string() -> Self {
        Self::builtin("string")
    }

    /// Convenience: the predeclared `error` type.
    pub fn error() -> Self {
        Self::builtin("error")
    }

    /// Returns true for `...T`.
    pub fn is_variadic(&self) -> bool {
        matches!(self, Self::Variadic { .. })
    }

    /// Returns true for the predeclared `error` type.
    ///
    /// A `Named` node with no package is accepted too, since some parsers
    /// record universe-scope identifiers that way.
    pub fn is_error(&self) -> bool {
        match self {
            Self::Builtin { name } => name == "error",
            Self::Named { package, name } => package.is_empty() && name == "error",
            _ => false,
        }
    }

    /// Returns true when the zero value of this type is `nil`.
    pub fn is_nillable(&self) -> bool {
        match self {
            Self::Pointer { .. }
            | Self::Slice { .. }
            | Self::Map { .. }
            | Self::Chan { .. }
            | Self::Func { .. }
            | Self::Interface
            | Self::Variadic { .. } => true,
            Self::Builtin { name } => name == "any",
            Self::Named { .. } | Self::Array { .. } => false,
        }
    }

    /// Direct children of this node, in rendering order.
    pub fn children(&self) -> Vec<&TypeDescriptor> {
        match self {
            Self::Named { .. } | Self::Builtin { .. } | Self::Interface => Vec::new(),
            Self::Pointer { elem }
            | Self::Slice { elem }
            | Self::Array { elem, .. }
            | Self::Chan { elem, .. }
            | Self::Variadic { elem } => vec![elem.as_ref()],
            Self::Map { key, value } => vec![key.as_ref(), value.as_ref()],
            Self::Func { params, results } => params.iter().chain(results.iter()).collect(),
        }
    }

    /// Nesting depth of the type tree; leaves have depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(TypeDescriptor::depth)
            .max()
            .unwrap_or(0)
    }
}
