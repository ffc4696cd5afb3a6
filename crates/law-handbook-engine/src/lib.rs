pub mod io;
pub mod models;
pub mod parsing;
pub mod search;


// Re-export key types for easier usage
pub use io::{IoError, LoadError, load_law, read_law, scan_laws, validate_library_dir};
pub use models::*;
pub use parsing::{ParseError, parse, parse_document};
pub use search::{SectionMatch, clause_matches};
