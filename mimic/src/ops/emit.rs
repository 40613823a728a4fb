//! Emit operation - format generated files and write them out.

use std::path::PathBuf;

use eyre::{Context, Result};
use mimic_codegen::{Formatter, GenerateResult};
use mimic_core::{OutputFile, Overwrite, WriteResult};

use crate::reports::MockOutcome;

/// Where and how generated files land.
pub struct EmitOptions {
    /// Base directory that output paths are relative to.
    pub output_dir: PathBuf,
    /// Report file contents instead of writing them.
    pub dry_run: bool,
    pub overwrite: Overwrite,
    pub formatter: Box<dyn Formatter>,
}

/// Execute the emit operation for one generation result.
pub fn emit(result: GenerateResult, options: &EmitOptions) -> Result<Vec<MockOutcome>> {
    let result = result.format_with(options.formatter.as_ref())?;

    let mut outcomes = Vec::with_capacity(result.files.len());
    for file in result.files {
        if options.dry_run {
            outcomes.push(MockOutcome::Preview {
                content: file.content_str().into_owned(),
                path: file.path,
            });
            continue;
        }

        let path = options.output_dir.join(&file.path);
        let written = OutputFile::new(path.clone(), file.content)
            .overwrite(options.overwrite)
            .write()
            .wrap_err_with(|| format!("Failed to emit {}", file.path))?;
        tracing::debug!(path = %path.display(), ?written, "emitted mock");

        outcomes.push(match written {
            WriteResult::Written => MockOutcome::Written { path },
            WriteResult::Unchanged => MockOutcome::Unchanged { path },
            WriteResult::Skipped => MockOutcome::Skipped { path },
        });
    }

    Ok(outcomes)
}
