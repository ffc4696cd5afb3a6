/// Errors detected while parsing a law document.
///
/// Line numbers are 1-based and count only non-empty lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Document has no content")]
    EmptyDocument,
    #[error("Missing title content on line {line}: {text:?}")]
    MalformedTitle { line: usize, text: String },
    #[error("Marker without text on line {line}: {text:?}")]
    MalformedBodyLine { line: usize, text: String },
    #[error("Clause before any heading on line {line}: {text:?}")]
    OrphanClause { line: usize, text: String },
}

impl ParseError {
    /// The offending line number, if the error is tied to one
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::EmptyDocument => None,
            Self::MalformedTitle { line, .. }
            | Self::MalformedBodyLine { line, .. }
            | Self::OrphanClause { line, .. } => Some(*line),
        }
    }
}
