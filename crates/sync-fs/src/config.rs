//! Configuration loading and saving

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// Configuration store for the JSON files config-sync persists.
///
/// The format is checked against the file extension so a misnamed file is
/// rejected instead of being silently parsed as something else.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        Self::check_format(path)?;
        let content = io::read_text(path)?;
        serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            format: "JSON".into(),
            message: e.to_string(),
        })
    }

    /// Load configuration, falling back to `T::default()` when the file does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        if !path.exists() {
            return Ok(T::default());
        }
        self.load(path)
    }

    /// Save configuration as pretty-printed JSON with a trailing newline.
    ///
    /// Uses atomic write to prevent corruption.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        Self::check_format(path)?;
        let mut content = serde_json::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
            path: path.to_path_buf(),
            format: "JSON".into(),
            message: e.to_string(),
        })?;
        content.push('\n');

        io::write_atomic(path, content.as_bytes())
    }

    fn check_format(path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(()),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }
}
