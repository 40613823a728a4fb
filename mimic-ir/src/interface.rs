//! Interface, method and parameter descriptors.

use serde::{Deserialize, Serialize};

use crate::TypeDescriptor;

/// A named parameter or result of a method signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    /// Declared name; empty when the signature leaves it unnamed.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

impl ParamDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// An unnamed parameter or result.
    pub fn unnamed(ty: TypeDescriptor) -> Self {
        Self::new("", ty)
    }

    /// Returns true if the descriptor carries a usable name.
    ///
    /// The blank identifier `_` does not count as a name.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty() && self.name != "_"
    }
}

/// One method of an interface, with ordered parameters and results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamDescriptor>,
    #[serde(default)]
    pub results: Vec<ParamDescriptor>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            results: Vec::new(),
        }
    }

    pub fn param(mut self, param: ParamDescriptor) -> Self {
        self.params.push(param);
        self
    }

    pub fn result(mut self, result: ParamDescriptor) -> Self {
        self.results.push(result);
        self
    }

    /// Returns true if the last parameter is `...T`.
    pub fn is_variadic(&self) -> bool {
        self.params.last().is_some_and(|p| p.ty.is_variadic())
    }
}

/// A named interface and its methods in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDescriptor {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl InterfaceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }
}

/// All interfaces declared in one parsed source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceFile {
    /// Import path of the package the file belongs to.
    #[serde(default)]
    pub package_path: String,
    #[serde(default)]
    pub interfaces: Vec<InterfaceDescriptor>,
}

impl InterfaceFile {
    pub fn new(package_path: impl Into<String>) -> Self {
        Self {
            package_path: package_path.into(),
            interfaces: Vec::new(),
        }
    }

    pub fn interface(mut self, interface: InterfaceDescriptor) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Look up an interface by name. The first declaration wins.
    pub fn find_interface(&self, name: &str) -> Option<&InterfaceDescriptor> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    /// Names of all interfaces in declaration order.
    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces.iter().map(|i| i.name.as_str()).collect()
    }
}
