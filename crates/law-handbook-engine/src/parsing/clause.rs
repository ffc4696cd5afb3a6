use regex::Regex;
use std::sync::OnceLock;

/// Pattern marking the start of a new article, e.g. "第十二条".
const CLAUSE_OPENER_PATTERN: &str = "第.+条";

fn clause_opener_regex() -> &'static Regex {
    static CLAUSE_OPENER: OnceLock<Regex> = OnceLock::new();
    CLAUSE_OPENER
        .get_or_init(|| Regex::new(CLAUSE_OPENER_PATTERN).expect("Invalid clause opener regex"))
}

/// Whether `line` opens a new clause rather than continuing the previous one.
///
/// The pattern is searched anywhere in the line.
pub fn is_clause_opener(line: &str) -> bool {
    clause_opener_regex().is_match(line)
}

/// Separator inserted between a clause and a wrapped continuation line.
pub const CONTINUATION_SEPARATOR: &str = "\n    ";
