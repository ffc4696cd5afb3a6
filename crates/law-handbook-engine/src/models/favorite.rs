use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ParsedDocument;

/// A clause bookmarked by the user, ready to hand to a favorites store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: Uuid,
    /// Name of the document the clause came from
    pub law: String,
    pub content: String,
}

impl Favorite {
    pub fn new(document: &ParsedDocument, clause: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            law: document.name().to_string(),
            content: clause.into(),
        }
    }
}
