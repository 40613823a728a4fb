//! Generated output and the external formatting seam.

use eyre::Result;

/// One generated file: where it goes and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output path, relative to the host's output directory.
    pub path: String,
    /// File content.
    pub content: Vec<u8>,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Content as text, replacing invalid UTF-8.
    pub fn content_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// Result of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResult {
    pub files: Vec<GeneratedFile>,
}

impl GenerateResult {
    /// Apply a formatter to every file.
    pub fn format_with(self, formatter: &dyn Formatter) -> Result<Self> {
        let files = self
            .files
            .into_iter()
            .map(|file| {
                let content = formatter.format(&file.path, &file.content)?;
                Ok(GeneratedFile {
                    path: file.path,
                    content,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { files })
    }
}

/// Canonical pretty-printer applied to generated files by the host.
pub trait Formatter {
    /// Format `content`; `path` is informational.
    fn format(&self, path: &str, content: &[u8]) -> Result<Vec<u8>>;
}

/// A formatter that returns content unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unformatted;

impl Formatter for Unformatted {
    fn format(&self, _path: &str, content: &[u8]) -> Result<Vec<u8>> {
        Ok(content.to_vec())
    }
}
