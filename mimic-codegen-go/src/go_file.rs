//! GoFile abstraction for structured Go file generation.
//!
//! A [`GoFile`] is the generation unit: a package clause, one import block
//! and an ordered list of declarations. It is plain data until rendered.

use mimic_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::{ast::Decl, imports::ImportSpec};

/// A structured representation of a Go file.
///
/// # Example
///
/// ```
/// use mimic_codegen_go::{GoFile, ast::StructType};
///
/// let code = GoFile::new("svc")
///     .header("Code generated by hand. DO NOT EDIT.")
///     .decl(StructType::new("Empty"))
///     .render();
///
/// assert_eq!(
///     code,
///     "// Code generated by hand. DO NOT EDIT.\n\npackage svc\n\ntype Empty struct{}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoFile {
    package: String,
    header: Option<String>,
    imports: Vec<ImportSpec>,
    decls: Vec<Decl>,
}

impl GoFile {
    /// Create an empty file in `package`.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            header: None,
            imports: Vec::new(),
            decls: Vec::new(),
        }
    }

    /// Set the comment placed above the package clause.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add import lines, kept in the given order.
    pub fn imports(mut self, imports: impl IntoIterator<Item = ImportSpec>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a declaration.
    pub fn decl(mut self, decl: impl Into<Decl>) -> Self {
        self.decls.push(decl.into());
        self
    }

    /// Add multiple declarations.
    pub fn decls(mut self, decls: impl IntoIterator<Item = Decl>) -> Self {
        self.decls.extend(decls);
        self
    }

    pub fn declarations(&self) -> &[Decl] {
        &self.decls
    }

    /// Render the file with tab indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::go();

        if let Some(header) = &self.header {
            builder.push_comment(header).push_blank();
        }

        builder.push_line(&format!("package {}", self.package));

        if !self.imports.is_empty() {
            builder.push_blank();
            builder.apply_fragment(CodeFragment::block(
                "import (",
                self.imports[..].to_fragments(),
                Some(")".to_string()),
            ));
        }

        for decl in &self.decls {
            builder.push_blank();
            builder.emit(decl);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, FuncDecl, StructType};

    #[test]
    fn test_package_only() {
        assert_eq!(GoFile::new("svc").render(), "package svc\n");
    }

    #[test]
    fn test_imports_block() {
        let file = GoFile::new("svc").imports([
            ImportSpec {
                path: "context".into(),
                alias: None,
            },
            ImportSpec {
                path: "github.com/jackc/pgx/v5".into(),
                alias: Some("pgx".into()),
            },
        ]);
        assert_eq!(
            file.render(),
            "package svc\n\nimport (\n\t\"context\"\n\tpgx \"github.com/jackc/pgx/v5\"\n)\n"
        );
    }

    #[test]
    fn test_blank_lines_between_decls() {
        let file = GoFile::new("svc")
            .decl(StructType::new("A").field(Field::embedded("mock.Mock")))
            .decl(FuncDecl::new("f"));
        assert_eq!(
            file.render(),
            "package svc\n\ntype A struct {\n\tmock.Mock\n}\n\nfunc f() {\n}\n"
        );
        assert_eq!(file.declarations().len(), 2);
    }

    #[test]
    fn test_header_lines_are_comments() {
        let file = GoFile::new("svc").header("line one\nline two");
        assert_eq!(file.render(), "// line one\n// line two\n\npackage svc\n");
    }
}
