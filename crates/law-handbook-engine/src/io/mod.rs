use crate::models::{LAW_EXTENSION, LAW_ROOT_DIR, LawRef, ParsedDocument};
use crate::parsing::{self, ParseError};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid library directory: {0}")]
    InvalidLibraryDir(String),
}

/// Failure to produce a document for a law; no partial document is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to parse {law}: {source}")]
    Parse { law: String, source: ParseError },
}

/// Read the raw text of a law from the library
pub fn read_law(law: &LawRef, library_root: &Path) -> Result<String, IoError> {
    let absolute_path = law.relative_path().to_path(library_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Read and parse a law from the library
pub fn load_law(law: &LawRef, library_root: &Path) -> Result<ParsedDocument, LoadError> {
    let content = read_law(law, library_root).inspect_err(|e| {
        log::warn!("Failed to read {}: {e}", law.name);
    })?;
    parsing::parse(&content, law)
}

/// Scan the library for law files, returning one [`LawRef`] per file
pub fn scan_laws(library_root: &Path) -> Result<Vec<LawRef>, IoError> {
    let laws_root = library_root.join(LAW_ROOT_DIR);
    if !laws_root.is_dir() {
        return Err(IoError::InvalidLibraryDir(format!(
            "{LAW_ROOT_DIR} directory not found"
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(&laws_root, &mut files)?;
    files.sort();

    Ok(files
        .iter()
        .filter_map(|path| law_ref_for(&laws_root, path))
        .collect())
}

fn law_ref_for(laws_root: &Path, path: &Path) -> Option<LawRef> {
    let name = path.file_stem()?.to_str()?;
    let mut law = LawRef::new(name);

    let folder = path.parent()?.strip_prefix(laws_root).ok()?;
    if !folder.as_os_str().is_empty() {
        // Folders are stored with forward slashes like the relative paths built from them
        let components: Option<Vec<&str>> = folder.iter().map(|c| c.to_str()).collect();
        law = law.with_folder(components?.join("/"));
    }

    Some(law)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == LAW_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_library_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidLibraryDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
