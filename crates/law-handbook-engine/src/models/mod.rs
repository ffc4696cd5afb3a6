pub mod document;
pub mod favorite;
pub mod law;

pub use document::{MetadataEntry, ParsedDocument, Section};
pub use favorite::Favorite;
pub use law::{LAW_EXTENSION, LAW_ROOT_DIR, LawRef};
