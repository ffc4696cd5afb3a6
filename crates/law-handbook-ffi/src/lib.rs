//! UniFFI bindings for law-handbook mobile apps
//!
//! Exposes the parsed law model to Swift/Kotlin as a read-only handle.
//! Views refresh by asking for a new handle; nothing here notifies them.

use law_handbook_engine::{Favorite, MetadataEntry, ParsedDocument, Section, SectionMatch};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Parse error: {reason}")]
    ParseError { reason: String },
}

// ============ Document Handle ============

/// A handle to a parsed law document.
///
/// The document is immutable, so the handle can be shared across threads
/// without locking.
#[derive(uniffi::Object)]
pub struct LawDocumentHandle {
    inner: ParsedDocument,
}

#[uniffi::export]
impl LawDocumentHandle {
    /// Parse a document from its raw text.
    #[uniffi::constructor]
    pub fn from_string(content: String) -> Result<Self, FfiError> {
        let inner =
            law_handbook_engine::parse_document(&content).map_err(|e| FfiError::ParseError {
                reason: e.to_string(),
            })?;
        Ok(Self { inner })
    }

    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    pub fn metadata(&self) -> Vec<MetadataEntryDto> {
        self.inner
            .metadata()
            .iter()
            .map(MetadataEntryDto::from_engine)
            .collect()
    }

    pub fn sections(&self) -> Vec<SectionDto> {
        self.inner
            .sections()
            .iter()
            .map(SectionDto::from_engine)
            .collect()
    }

    /// Sections with clauses containing `query`; an empty query returns every non-empty section.
    pub fn filter(&self, query: String) -> Vec<SectionDto> {
        self.inner
            .filter(&query)
            .into_iter()
            .map(SectionDto::from_match)
            .collect()
    }

    /// Build a favorite record for `clause` of this document.
    pub fn favorite(&self, clause: String) -> FavoriteDto {
        FavoriteDto::from_engine(Favorite::new(&self.inner, clause))
    }
}

// ============ DTOs ============

/// One preamble entry.
#[derive(uniffi::Record)]
pub struct MetadataEntryDto {
    pub header: String,
    pub content: String,
    /// Header-only entry, displayed centered without a label
    pub standalone: bool,
}

impl MetadataEntryDto {
    fn from_engine(entry: &MetadataEntry) -> Self {
        Self {
            header: entry.header.clone(),
            content: entry.content.clone(),
            standalone: entry.is_standalone(),
        }
    }
}

/// A titled group of clauses.
#[derive(uniffi::Record)]
pub struct SectionDto {
    pub title: String,
    pub clauses: Vec<String>,
}

impl SectionDto {
    fn from_engine(section: &Section) -> Self {
        Self {
            title: section.title().to_string(),
            clauses: section.clauses().to_vec(),
        }
    }

    fn from_match(section: SectionMatch) -> Self {
        Self {
            title: section.title.to_string(),
            clauses: section.clauses.into_iter().map(str::to_string).collect(),
        }
    }
}

/// A clause ready for the favorites store.
#[derive(uniffi::Record)]
pub struct FavoriteDto {
    /// UUID in hyphenated form
    pub id: String,
    pub law: String,
    pub content: String,
}

impl FavoriteDto {
    fn from_engine(favorite: Favorite) -> Self {
        Self {
            id: favorite.id.to_string(),
            law: favorite.law,
            content: favorite.content,
        }
    }
}
