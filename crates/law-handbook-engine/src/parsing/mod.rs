//! # Document Parsing
//!
//! Single-pass parsing of a law text file into a [`ParsedDocument`].
//!
//! ## Parsing Phases
//!
//! 1. **Line stream** (`lines`): split on `\n`, trim, drop empty lines
//! 2. **Line Classification** (`classify`): each line is split on its first
//!    space and flagged as sentinel or heading
//! 3. **Document Construction** (`builder`): a `DocumentBuilder` state
//!    machine routes lines into the title, the preamble or the body
//!
//! ## Document Layout
//!
//! ```text
//! # 中华人民共和国消费者权益保护法      <- title (text after the first space)
//! 公布日期 2013-10-25                  <- preamble: header + content
//! <!-- INFO END -->                    <- sentinel, ends the preamble
//! # 第一章 总则                        <- heading, opens a section
//! 第一条 为保护消费者的合法权益……      <- clause
//! 维护社会经济秩序……                  <- continuation of the clause above
//! ```
//!
//! ## Key Invariants
//!
//! - Every error is reported before any document is returned
//! - Sections, clauses and metadata keep source order
//! - Continuation lines merge into the current clause instead of adding one

pub mod builder;
pub mod classify;
pub mod clause;
pub mod error;
pub mod lines;

#[cfg(test)]
mod tests;

pub use builder::DocumentBuilder;
pub use classify::{HEADING_MARKER, INFO_END_SENTINEL, LawLineClassifier, LineClass};
pub use clause::is_clause_opener;
pub use error::ParseError;
pub use lines::{LineRef, content_lines};

use crate::io::LoadError;
use crate::models::{LawRef, ParsedDocument};

/// Parses the raw text of one law document.
pub fn parse_document(text: &str) -> Result<ParsedDocument, ParseError> {
    let classifier = LawLineClassifier;
    let mut builder = DocumentBuilder::new();

    for line in content_lines(text) {
        let class = classifier.classify(&line);
        builder.push(&class)?;
    }

    builder.finish()
}

/// Parses `text` as the content of `law`, tagging any failure with the law's name.
pub fn parse(text: &str, law: &LawRef) -> Result<ParsedDocument, LoadError> {
    match parse_document(text) {
        Ok(doc) => {
            log::debug!(
                "Parsed {}: {} metadata entries, {} sections, {} clauses",
                law.name,
                doc.metadata().len(),
                doc.sections().len(),
                doc.clause_count()
            );
            Ok(doc)
        }
        Err(source) => {
            log::warn!("Failed to parse {}: {source}", law.name);
            Err(LoadError::Parse {
                law: law.name.clone(),
                source,
            })
        }
    }
}
