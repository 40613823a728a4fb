//! Go type and function declarations.

use mimic_codegen::builder::{CodeFragment, Renderable};

use super::Stmt;

/// A named or unnamed entry in a parameter or result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Empty for an unnamed entry.
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self::new("", ty)
    }

    fn format(&self) -> String {
        if self.name.is_empty() {
            self.ty.clone()
        } else {
            format!("{} {}", self.name, self.ty)
        }
    }
}

fn format_params(params: &[Param]) -> String {
    params
        .iter()
        .map(Param::format)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a result list, including the leading space.
fn format_results(results: &[Param]) -> String {
    match results {
        [] => String::new(),
        [single] if single.name.is_empty() => format!(" {}", single.ty),
        _ => format!(" ({})", format_params(results)),
    }
}

/// A field in a Go struct. An empty name makes it an embedded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn embedded(ty: impl Into<String>) -> Self {
        Self::new("", ty)
    }

    pub fn is_embedded(&self) -> bool {
        self.name.is_empty()
    }
}

/// Builder for a `type Name struct { ... }` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    name: String,
    doc: Option<String>,
    fields: Vec<Field>,
}

impl StructType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl Renderable for StructType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = doc_fragments(self.doc.as_deref());

        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!("type {} struct{{}}", self.name)));
        } else {
            let body = self
                .fields
                .iter()
                .map(|field| {
                    if field.is_embedded() {
                        CodeFragment::line(field.ty.as_str())
                    } else {
                        CodeFragment::line(format!("{} {}", field.name, field.ty))
                    }
                })
                .collect();
            fragments.push(CodeFragment::braced(
                format!("type {} struct {{", self.name),
                body,
            ));
        }

        fragments
    }
}

/// Builder for Go functions and methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    name: String,
    doc: Option<String>,
    receiver: Option<Param>,
    params: Vec<Param>,
    results: Vec<Param>,
    body: Vec<Stmt>,
}

impl FuncDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            receiver: None,
            params: Vec::new(),
            results: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Make this a method on `receiver`.
    pub fn receiver(mut self, receiver: Param) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn result(mut self, result: Param) -> Self {
        self.results.push(result);
        self
    }

    pub fn stmt(mut self, stmt: Stmt) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn receiver_param(&self) -> Option<&Param> {
        self.receiver.as_ref()
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn results(&self) -> &[Param] {
        &self.results
    }

    pub fn body(&self) -> &[Stmt] {
        &self.body
    }

    /// The signature line without the opening brace.
    pub fn signature(&self) -> String {
        let receiver = match &self.receiver {
            Some(recv) => format!("({}) ", recv.format()),
            None => String::new(),
        };
        format!(
            "func {}{}({}){}",
            receiver,
            self.name,
            format_params(&self.params),
            format_results(&self.results)
        )
    }
}

impl Renderable for FuncDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = doc_fragments(self.doc.as_deref());
        fragments.push(CodeFragment::braced(
            format!("{} {{", self.signature()),
            self.body[..].to_fragments(),
        ));
        fragments
    }
}

/// A top-level declaration in a Go file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Struct(StructType),
    Func(FuncDecl),
}

impl From<StructType> for Decl {
    fn from(decl: StructType) -> Self {
        Self::Struct(decl)
    }
}

impl From<FuncDecl> for Decl {
    fn from(decl: FuncDecl) -> Self {
        Self::Func(decl)
    }
}

impl Renderable for Decl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Decl::Struct(decl) => decl.to_fragments(),
            Decl::Func(decl) => decl.to_fragments(),
        }
    }
}

fn doc_fragments(doc: Option<&str>) -> Vec<CodeFragment> {
    doc.map(|doc| vec![CodeFragment::comment(doc)])
        .unwrap_or_default()
}
