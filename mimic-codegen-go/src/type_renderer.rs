//! Rendering of type descriptors as Go type expressions.

use indexmap::IndexSet;
use mimic_ir::{ChanDir, TypeDescriptor};

use crate::imports::Imports;

/// Renders [`TypeDescriptor`]s as Go source, relative to the package the
/// generated file lives in.
///
/// Named types are qualified by the package that declares them unless that
/// package is the target package. Every qualified reference registers an
/// import. Input must have passed [`validate`](crate::validate::validate).
///
/// The renderer also tracks the identifiers each rendered type refers to,
/// so method synthesis can keep parameter names from shadowing them.
#[derive(Debug)]
pub struct TypeRenderer<'a> {
    source_package: &'a str,
    target_package: &'a str,
    imports: Imports,
    used_idents: IndexSet<String>,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(source_package: &'a str, target_package: &'a str) -> Self {
        Self {
            source_package,
            target_package,
            imports: Imports::new(),
            used_idents: IndexSet::new(),
        }
    }

    pub fn imports(&self) -> &Imports {
        &self.imports
    }

    pub fn into_imports(self) -> Imports {
        self.imports
    }

    /// Package aliases and unqualified type names referenced since the last
    /// call, in first-use order.
    pub fn take_used_idents(&mut self) -> IndexSet<String> {
        std::mem::take(&mut self.used_idents)
    }

    /// Reference `name` declared in `package`.
    pub fn qualified(&mut self, package: &str, name: &str) -> String {
        if package.is_empty() || package == self.target_package {
            self.used_idents.insert(name.to_string());
            return name.to_string();
        }

        let alias = self.imports.alias(package);
        if package == self.source_package {
            tracing::trace!(name, package, "qualifying type from the source package");
        }
        self.used_idents.insert(alias.clone());
        format!("{}.{}", alias, name)
    }

    /// Render a type expression.
    pub fn render(&mut self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Builtin { name } => {
                self.used_idents.insert(name.clone());
                name.clone()
            }
            TypeDescriptor::Named { package, name } => self.qualified(package, name),
            TypeDescriptor::Pointer { elem } => format!("*{}", self.render(elem)),
            TypeDescriptor::Slice { elem } => format!("[]{}", self.render(elem)),
            TypeDescriptor::Array { len, elem } => format!("[{}]{}", len, self.render(elem)),
            TypeDescriptor::Map { key, value } => {
                let key = self.render(key);
                let value = self.render(value);
                format!("map[{}]{}", key, value)
            }
            TypeDescriptor::Chan { dir, elem } => {
                let inner = self.render(elem);
                match dir {
                    // `chan <-chan T` would parse as `chan<- chan T`
                    ChanDir::Both if is_recv_chan(elem) => format!("chan ({})", inner),
                    ChanDir::Both => format!("chan {}", inner),
                    ChanDir::Send => format!("chan<- {}", inner),
                    ChanDir::Recv => format!("<-chan {}", inner),
                }
            }
            TypeDescriptor::Func { params, results } => {
                let params = self.render_all(params);
                let results = self.render_all(results);
                func_type(&params, &results)
            }
            TypeDescriptor::Interface => "interface{}".to_string(),
            TypeDescriptor::Variadic { elem } => format!("...{}", self.render(elem)),
        }
    }

    /// Render a list of types in order.
    pub fn render_all(&mut self, types: &[TypeDescriptor]) -> Vec<String> {
        types.iter().map(|ty| self.render(ty)).collect()
    }
}

fn is_recv_chan(ty: &TypeDescriptor) -> bool {
    matches!(
        ty,
        TypeDescriptor::Chan {
            dir: ChanDir::Recv,
            ..
        }
    )
}

/// Build a function type literal from rendered parameter and result types.
pub fn func_type(params: &[String], results: &[String]) -> String {
    let params = params.join(", ");
    match results {
        [] => format!("func({})", params),
        [single] => format!("func({}) {}", params, single),
        _ => format!("func({}) ({})", params, results.join(", ")),
    }
}
