/// A single non-empty, trimmed line of the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 1-based position within the non-empty line stream.
    pub number: usize,
    /// The line text with surrounding spaces and newlines removed.
    pub text: &'a str,
}

/// Characters stripped from both ends of every line.
const TRIM_CHARS: [char; 2] = [' ', '\n'];

/// Returns an iterator over the content lines of `text`.
///
/// Splits on `\n`, trims spaces and newlines from each line, and drops lines
/// that are empty afterwards. Numbering counts only the surviving lines, so
/// line 1 is always the title line.
pub fn content_lines(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.split('\n')
        .map(|line| line.trim_matches(TRIM_CHARS))
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(idx, text)| LineRef {
            number: idx + 1,
            text,
        })
}
