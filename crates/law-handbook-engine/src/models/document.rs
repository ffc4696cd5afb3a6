use serde::Serialize;

/// A fully parsed law document.
///
/// Built once by [`crate::parsing::parse_document`] and never mutated
/// afterwards; front ends only read from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    pub(crate) name: String,
    pub(crate) metadata: Vec<MetadataEntry>,
    pub(crate) sections: Vec<Section>,
}

impl ParsedDocument {
    /// Document title taken from the first line
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Preamble entries in source order
    pub fn metadata(&self) -> &[MetadataEntry] {
        &self.metadata
    }

    /// Body sections in source order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Total number of clauses across all sections
    pub fn clause_count(&self) -> usize {
        self.sections.iter().map(|s| s.clauses.len()).sum()
    }
}

/// One line of the preamble, split into a header and optional content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataEntry {
    pub header: String,
    pub content: String,
}

impl MetadataEntry {
    pub fn new(header: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            content: content.into(),
        }
    }

    /// Header-only entries are shown on their own line rather than as a labeled field.
    pub fn is_standalone(&self) -> bool {
        self.content.is_empty()
    }
}

/// A titled group of clauses, opened by a heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub(crate) title: String,
    pub(crate) clauses: Vec<String>,
}

impl Section {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            clauses: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }
}
