//! Generate and bake report data structures.

use std::path::PathBuf;

use mimic_codegen::Severity;

use super::output::{Marker, Output, Report};

/// What happened to one mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOutcome {
    /// The file was written.
    Written { path: PathBuf },
    /// The file on disk already matched.
    Unchanged { path: PathBuf },
    /// The file already existed and was kept.
    Skipped { path: PathBuf },
    /// Dry-run preview.
    Preview { path: String, content: String },
    /// Generation failed; other mocks are unaffected.
    Failed { label: String, message: String },
}

/// Report data from code generation.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub outcomes: Vec<MockOutcome>,
}

impl GenerateReport {
    /// Whether every mock was generated.
    pub fn is_success(&self) -> bool {
        !self
            .outcomes
            .iter()
            .any(|o| matches!(o, MockOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&MockOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

fn plural(n: usize, word: &str) -> String {
    format!("{} {}{}", n, word, if n == 1 { "" } else { "s" })
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for outcome in &self.outcomes {
            if let MockOutcome::Failed { label, message } = outcome {
                out.problem(Severity::Error, &format!("{}: {}", label, message));
            }
        }

        let previews = self.count(|o| matches!(o, MockOutcome::Preview { .. }));
        if previews > 0 {
            for outcome in &self.outcomes {
                if let MockOutcome::Preview { path, content } = outcome {
                    out.divider(path);
                    out.text(content);
                }
            }
            out.divider("Summary");
            out.text(&format!("{} would be generated", plural(previews, "file")));
            return;
        }

        let written = self.count(|o| matches!(o, MockOutcome::Written { .. }));
        if written > 0 {
            out.section(&format!("Generated ({})", written));
            for outcome in &self.outcomes {
                if let MockOutcome::Written { path } = outcome {
                    out.item(Marker::Added, &path.display().to_string());
                }
            }
        }

        let unchanged = self.count(|o| matches!(o, MockOutcome::Unchanged { .. }));
        if unchanged > 0 {
            if written > 0 {
                out.newline();
            }
            out.section(&format!("Up to date ({})", unchanged));
            for outcome in &self.outcomes {
                if let MockOutcome::Unchanged { path } = outcome {
                    out.item(Marker::Bullet, &path.display().to_string());
                }
            }
        }

        let skipped = self.count(|o| matches!(o, MockOutcome::Skipped { .. }));
        if skipped > 0 {
            if written + unchanged > 0 {
                out.newline();
            }
            out.section(&format!("Kept existing ({})", skipped));
            for outcome in &self.outcomes {
                if let MockOutcome::Skipped { path } = outcome {
                    out.item(Marker::Bullet, &path.display().to_string());
                }
            }
        }

        let failed = self.outcomes.len() - written - unchanged - skipped;
        if failed > 0 {
            out.newline();
            out.text(&format!("{} failed", plural(failed, "mock")));
        }
    }
}
