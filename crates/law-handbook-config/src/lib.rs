use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory under the home directory holding `config.toml`
const CONFIG_DIR: &str = "~/.config/law-handbook";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {config_path}: {source}")]
    Write {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Where the law library lives on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the `法律法条` law tree
    pub library_path: PathBuf,
}

impl Config {
    pub fn new(library_path: impl Into<PathBuf>) -> Self {
        Self {
            library_path: library_path.into(),
        }
    }

    /// Default location of the config file
    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(CONFIG_DIR).as_ref()).join(CONFIG_FILE)
    }

    /// Load the config at the default location; `Ok(None)` when there is none yet.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            config_path: config_path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        Ok(Some(config.expanded()))
    }

    /// Write the config to the default location, returning the path written.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> Result<(), ConfigError> {
        let config_path = config_path.as_ref();
        let write_error = |source: std::io::Error| ConfigError::Write {
            config_path: config_path.to_path_buf(),
            source,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content).map_err(write_error)
    }

    /// `~` and `$VARS` in the library path are expanded; unknown variables leave it untouched.
    fn expanded(self) -> Self {
        let raw = self.library_path.to_string_lossy().into_owned();
        match shellexpand::full(&raw) {
            Ok(expanded) => Self::new(expanded.into_owned()),
            Err(_) => self,
        }
    }
}
