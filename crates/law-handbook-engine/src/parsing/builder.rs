use crate::models::{MetadataEntry, ParsedDocument, Section};

use super::{
    classify::LineClass,
    clause::{CONTINUATION_SEPARATOR, is_clause_opener},
    error::ParseError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Waiting for the first line
    Title,
    Preamble,
    Body,
}

/// State machine turning classified lines into a [`ParsedDocument`].
///
/// Sections and clauses are only ever reached through the `current_*`
/// cursors, which are moved by heading and clause-opener lines.
pub struct DocumentBuilder {
    state: ParserState,
    name: Option<String>,
    metadata: Vec<MetadataEntry>,
    sections: Vec<Section>,
    current_section: Option<usize>,
    current_clause: Option<usize>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            state: ParserState::Title,
            name: None,
            metadata: vec![],
            sections: vec![],
            current_section: None,
            current_clause: None,
        }
    }

    pub fn push(&mut self, c: &LineClass) -> Result<(), ParseError> {
        match self.state {
            ParserState::Title => self.push_title(c),
            ParserState::Preamble => {
                self.push_preamble(c);
                Ok(())
            }
            ParserState::Body => self.push_body(c),
        }
    }

    pub fn finish(self) -> Result<ParsedDocument, ParseError> {
        let name = self.name.ok_or(ParseError::EmptyDocument)?;
        Ok(ParsedDocument {
            name,
            metadata: self.metadata,
            sections: self.sections,
        })
    }

    fn push_title(&mut self, c: &LineClass) -> Result<(), ParseError> {
        let name = c.rest.ok_or_else(|| ParseError::MalformedTitle {
            line: c.number,
            text: c.text.to_string(),
        })?;
        self.name = Some(name.to_string());
        self.state = ParserState::Preamble;
        Ok(())
    }

    fn push_preamble(&mut self, c: &LineClass) {
        if c.is_sentinel {
            self.state = ParserState::Body;
            return;
        }
        self.metadata
            .push(MetadataEntry::new(c.head, c.rest.unwrap_or_default()));
    }

    fn push_body(&mut self, c: &LineClass) -> Result<(), ParseError> {
        if c.is_sentinel {
            return Ok(());
        }
        if c.is_heading() {
            return self.open_section(c);
        }
        self.push_clause_line(c)
    }

    fn open_section(&mut self, c: &LineClass) -> Result<(), ParseError> {
        let title = c.rest.ok_or_else(|| ParseError::MalformedBodyLine {
            line: c.number,
            text: c.text.to_string(),
        })?;
        self.sections.push(Section::new(title));
        self.current_section = Some(self.sections.len() - 1);
        self.current_clause = None;
        Ok(())
    }

    fn push_clause_line(&mut self, c: &LineClass) -> Result<(), ParseError> {
        let section_idx = self.current_section.ok_or_else(|| ParseError::OrphanClause {
            line: c.number,
            text: c.text.to_string(),
        })?;
        let clauses = &mut self.sections[section_idx].clauses;

        match self.current_clause {
            Some(clause_idx) if !is_clause_opener(c.text) => {
                let clause = &mut clauses[clause_idx];
                clause.push_str(CONTINUATION_SEPARATOR);
                clause.push_str(c.text);
            }
            _ => {
                clauses.push(c.text.to_string());
                self.current_clause = Some(clauses.len() - 1);
            }
        }
        Ok(())
    }
}
