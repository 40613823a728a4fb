/// A piece of generated source, independent of indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// One line; the builder adds indentation and the newline.
    Line(String),
    /// An empty line.
    Blank,
    /// `header`, then `body` one level deeper, then `close` (if any) back
    /// at the header's level. Leaving `close` out lets the next block
    /// continue the construct, as in `} else {`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A `//` comment; multi-line text becomes several comment lines.
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// A block closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::block(header, body, Some("}".to_string()))
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }
}

/// Anything that can describe itself as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(|node| node.to_fragments()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Call(&'static str);

    impl Renderable for Call {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line(format!("{}()", self.0))]
        }
    }

    #[test]
    fn test_braced_closes_with_brace() {
        assert_eq!(
            CodeFragment::braced("if ok {", vec![CodeFragment::line("a()")]),
            CodeFragment::Block {
                header: "if ok {".into(),
                body: vec![CodeFragment::Line("a()".into())],
                close: Some("}".into()),
            }
        );
    }

    #[test]
    fn test_slice_concatenates_fragments() {
        let calls = [Call("a"), Call("b")];
        assert_eq!(
            calls[..].to_fragments(),
            vec![CodeFragment::line("a()"), CodeFragment::line("b()")]
        );
    }
}
