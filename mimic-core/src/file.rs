//! Writing generated files to disk.

use std::path::PathBuf;

use eyre::{Context, Result};

/// What [`OutputFile::write`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// New content landed on disk.
    Written,
    /// The file already held identical content and was not touched.
    Unchanged,
    /// The file existed and the policy said to keep it.
    Skipped,
}

/// How to treat a file that already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace it. Generated mocks are owned by the generator.
    #[default]
    Always,
    /// Keep whatever is there.
    IfMissing,
}

/// A generated file on its way to disk.
///
/// Identical content is never rewritten, leaving the modification time of
/// an up-to-date mock untouched.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    content: Vec<u8>,
    overwrite: Overwrite,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Write the file, creating parent directories as needed.
    pub fn write(&self) -> Result<WriteResult> {
        if self.path.exists() {
            if self.overwrite == Overwrite::IfMissing {
                return Ok(WriteResult::Skipped);
            }
            let current = std::fs::read(&self.path)
                .wrap_err_with(|| format!("failed to read {}", self.path.display()))?;
            if current == self.content {
                return Ok(WriteResult::Unchanged);
            }
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write {}", self.path.display()))?;

        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("internal").join("mocks").join("clock_mock.go");

        let result = OutputFile::new(&path, "package mocks\n").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "package mocks\n");
    }

    #[test]
    fn test_replaces_stale_mock() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("clock_mock.go");
        fs::write(&path, "package old\n").unwrap();

        let result = OutputFile::new(&path, "package mocks\n").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "package mocks\n");
    }

    #[test]
    fn test_identical_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("clock_mock.go");
        fs::write(&path, "package mocks\n").unwrap();

        let result = OutputFile::new(&path, "package mocks\n").write().unwrap();
        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_if_missing_keeps_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("clock_mock.go");
        fs::write(&path, "// hand edited\n").unwrap();

        let file = OutputFile::new(&path, "package mocks\n").overwrite(Overwrite::IfMissing);
        assert_eq!(file.write().unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "// hand edited\n");
    }

    #[test]
    fn test_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("clock_mock.go");

        let file = OutputFile::new(&path, "package mocks\n").overwrite(Overwrite::IfMissing);
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "package mocks\n");
    }
}
