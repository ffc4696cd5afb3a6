use super::lines::LineRef;

/// Literal line separating the preamble from the body.
pub const INFO_END_SENTINEL: &str = "<!-- INFO END -->";

/// First character of a heading marker token.
pub const HEADING_MARKER: char = '#';

/// Classification of a single line containing only local facts.
///
/// Whether the line is a title, a metadata entry or a clause depends on the
/// parser state and is decided by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// 1-based line number in the content stream.
    pub number: usize,
    /// The full trimmed line.
    pub text: &'a str,
    /// Text before the first space (the whole line if it has none).
    pub head: &'a str,
    /// Text after the first space, if any.
    pub rest: Option<&'a str>,
    /// Whether the line is the preamble sentinel.
    pub is_sentinel: bool,
}

impl LineClass<'_> {
    /// A heading line starts a new section.
    pub fn is_heading(&self) -> bool {
        self.head.starts_with(HEADING_MARKER)
    }
}

/// Classifies individual lines of a law document.
pub struct LawLineClassifier;

impl LawLineClassifier {
    pub fn classify<'a>(&self, line: &LineRef<'a>) -> LineClass<'a> {
        let (head, rest) = match line.text.split_once(' ') {
            Some((head, rest)) => (head, Some(rest)),
            None => (line.text, None),
        };

        LineClass {
            number: line.number,
            text: line.text,
            head,
            rest,
            is_sentinel: line.text == INFO_END_SENTINEL,
        }
    }
}
