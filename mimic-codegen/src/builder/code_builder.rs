use super::{CodeFragment, Renderable};

/// Accumulates Go source one line at a time.
///
/// Each indentation level is one tab, as `gofmt` writes it. Blank lines
/// never carry indentation and trailing whitespace is dropped.
///
/// ```
/// use mimic_codegen::CodeBuilder;
///
/// let mut b = CodeBuilder::go();
/// b.push_comment("Run does nothing.\nIt never returns an error.")
///     .push_line("func Run() error {")
///     .push_indent()
///     .push_line("return nil")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     b.build(),
///     "// Run does nothing.\n// It never returns an error.\nfunc Run() error {\n\treturn nil\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn go() -> Self {
        Self::default()
    }

    /// Append one line at the current depth. An empty line is blank.
    pub fn push_line(&mut self, line: &str) -> &mut Self {
        let line = line.trim_end();
        if line.is_empty() {
            return self.push_blank();
        }
        self.out.extend(std::iter::repeat_n('\t', self.depth));
        self.out.push_str(line);
        self.out.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Append `text` as `//` comments, one per line. Empty lines inside
    /// the text become a bare `//` so the comment block stays contiguous.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.trim().is_empty() {
                self.push_line("//");
            } else {
                self.push_line(&format!("// {}", line));
            }
        }
        self
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(line) => self.push_line(&line),
            CodeFragment::Blank => self.push_blank(),
            CodeFragment::Comment(text) => self.push_comment(&text),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                for fragment in body {
                    self.apply_fragment(fragment);
                }
                self.push_dedent();
                match close {
                    Some(close) => self.push_line(&close),
                    None => self,
                }
            }
        }
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn build(self) -> String {
        self.out
    }
}
