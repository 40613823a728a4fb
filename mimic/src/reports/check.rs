//! Check command report.

use std::path::PathBuf;

use mimic_codegen::Severity;

use super::output::{Output, Report};

/// One problem found in a configured mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    /// `mocks[i]`, optionally followed by a path into the descriptor.
    pub location: String,
}

#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    /// Number of configured mocks.
    pub mocks: usize,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    pub fn new(config_path: impl Into<PathBuf>, mocks: usize) -> Self {
        Self {
            config_path: config_path.into(),
            mocks,
            findings: Vec::new(),
        }
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>, location: String) {
        self.findings.push(Finding {
            severity,
            message: message.into(),
            location,
        });
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// No errors were found. Warnings do not fail a check.
    pub fn is_valid(&self) -> bool {
        self.count(Severity::Error) == 0
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let mut findings: Vec<&Finding> = self.findings.iter().collect();
        findings.sort_by(|a, b| b.severity.cmp(&a.severity));

        for finding in &findings {
            out.problem(
                finding.severity,
                &format!("{}\n  --> {}", finding.message, finding.location),
            );
        }
        if !findings.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            let warnings = self.count(Severity::Warning);
            out.text(&format!(
                "✓ {} is valid ({} mock{}, {} warning{})",
                self.config_path.display(),
                self.mocks,
                if self.mocks == 1 { "" } else { "s" },
                warnings,
                if warnings == 1 { "" } else { "s" },
            ));
        }
    }
}
