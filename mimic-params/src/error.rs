use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for parameter operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(mimic::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode generator parameters")]
    #[diagnostic(
        code(mimic::params_decode),
        help(
            "parameters are a JSON object with the keys interface_name, out_path_template, source_package_path, target_package_path and mock_struct_name_template"
        )
    )]
    Decode {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid JSON here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(mimic::config_parse))]
    Config {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(mimic::invalid_params))]
    Validation { message: String },
}

impl Error {
    /// Create a decode error, pointing at the offending byte of the blob.
    pub fn decode(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = byte_offset(src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Decode {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a config parse error from a toml error with source context.
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Validation {
            message: message.into(),
        })
    }
}

/// Convert serde_json's 1-based line/column into a byte offset.
fn byte_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    Some(offset.min(src.len().saturating_sub(1)))
}
