//! External formatting through `gofmt`.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use eyre::{Context, Result, bail, eyre};
use mimic_codegen::{Formatter, Unformatted};

/// Pipes generated files through the `gofmt` binary found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoFmt;

impl Formatter for GoFmt {
    fn format(&self, path: &str, content: &[u8]) -> Result<Vec<u8>> {
        let mut child = Command::new("gofmt")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .wrap_err("failed to run gofmt; is Go installed?")?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| eyre!("gofmt stdin is not available"))?;
            stdin
                .write_all(content)
                .wrap_err("failed to write to gofmt")?;
        }

        let output = child.wait_with_output().wrap_err("gofmt did not finish")?;
        if !output.status.success() {
            bail!(
                "gofmt rejected {}: {}",
                path,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        tracing::debug!(path, "formatted with gofmt");
        Ok(output.stdout)
    }
}

/// Pick the formatter for a run.
pub fn formatter(gofmt: bool) -> Box<dyn Formatter> {
    if gofmt {
        Box::new(GoFmt)
    } else {
        Box::new(Unformatted)
    }
}
