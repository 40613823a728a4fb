//! Rendering targets for reports.

use mimic_codegen::Severity;

/// Leading symbol of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Bullet,
    /// A file that was created.
    Added,
}

impl Marker {
    fn symbol(self) -> char {
        match self {
            Marker::Bullet => '-',
            Marker::Added => '+',
        }
    }
}

/// Where a [`Report`] goes. Reports say what to show; the output decides
/// how it looks.
pub trait Output {
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    fn item(&mut self, marker: Marker, text: &str);

    /// A finding about the input, labelled with its severity.
    fn problem(&mut self, severity: Severity, text: &str);

    /// A `── label ──` rule, used between previewed files.
    fn divider(&mut self, label: &str);

    fn text(&mut self, text: &str);

    fn newline(&mut self);
}

pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain terminal output. Errors and warnings go to stderr; stdout
/// carries only results.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn item(&mut self, marker: Marker, text: &str) {
        println!("  {} {}", marker.symbol(), text);
    }

    fn problem(&mut self, severity: Severity, text: &str) {
        match severity {
            Severity::Info => println!("{}: {}", severity, text),
            _ => eprintln!("{}: {}", severity, text),
        }
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn text(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Captures rendered lines for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn section(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{}: {}", key, value));
    }

    fn item(&mut self, marker: Marker, text: &str) {
        self.lines.push(format!("  {} {}", marker.symbol(), text));
    }

    fn problem(&mut self, severity: Severity, text: &str) {
        self.lines.push(format!("{}: {}", severity, text));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("── {} ──", label));
    }

    fn text(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
