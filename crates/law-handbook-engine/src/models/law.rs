use relative_path::RelativePathBuf;
use serde::{Deserialize, Serialize};

/// Top-level directory of the law library; every law file lives beneath it.
pub const LAW_ROOT_DIR: &str = "法律法条";

/// File extension for law documents
pub const LAW_EXTENSION: &str = "md";

/// Logical identifier of a law: its name plus where the file lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawRef {
    pub name: String,
    /// Sub-directory under [`LAW_ROOT_DIR`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// File name override (without extension) when it differs from `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl LawRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            folder: None,
            file: None,
        }
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// The file name without extension
    pub fn file_stem(&self) -> &str {
        self.file.as_deref().unwrap_or(&self.name)
    }

    /// Path of the law file relative to the library root
    pub fn relative_path(&self) -> RelativePathBuf {
        let mut path = RelativePathBuf::from(LAW_ROOT_DIR);
        if let Some(folder) = &self.folder {
            path.push(folder);
        }
        path.push(format!("{}.{LAW_EXTENSION}", self.file_stem()));
        path
    }
}
