//! Clause filtering for live search.
//!
//! Matching is literal, case-sensitive substring containment with no
//! normalisation, so results line up with what the reader typed.

use serde::Serialize;

use crate::models::{ParsedDocument, Section};

/// A section together with the clauses that matched a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionMatch<'a> {
    pub title: &'a str,
    pub clauses: Vec<&'a str>,
}

/// Whether `clause` should be shown for `query`. An empty query matches everything.
pub fn clause_matches(clause: &str, query: &str) -> bool {
    query.is_empty() || clause.contains(query)
}

impl Section {
    /// Clauses of this section matching `query`, in source order
    pub fn matching_clauses<'a>(&'a self, query: &str) -> Vec<&'a str> {
        self.clauses
            .iter()
            .map(String::as_str)
            .filter(|clause| clause_matches(clause, query))
            .collect()
    }
}

impl ParsedDocument {
    /// Sections with at least one clause matching `query`.
    ///
    /// Sections left without clauses are omitted, including sections that
    /// never had any.
    pub fn filter(&self, query: &str) -> Vec<SectionMatch<'_>> {
        self.sections
            .iter()
            .filter_map(|section| {
                let clauses = section.matching_clauses(query);
                (!clauses.is_empty()).then_some(SectionMatch {
                    title: section.title(),
                    clauses,
                })
            })
            .collect()
    }
}
