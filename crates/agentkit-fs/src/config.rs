//! JSON configuration loading and saving

use crate::{Error, NormalizedPath, Result, io};
use serde::{Serialize, de::DeserializeOwned};

/// Configuration store for the JSON documents agentkit reads and writes.
///
/// The format is checked against the file extension so a stray
/// `agent.config.toml` fails loudly instead of being parsed as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Load a JSON document from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        Self::check_format(path)?;
        let content = io::read_text(path)?;
        serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_native(),
            format: "JSON".into(),
            message: e.to_string(),
        })
    }

    /// Save a value as pretty-printed JSON (two-space indent).
    ///
    /// Uses atomic write to prevent corruption.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        Self::check_format(path)?;
        let content = serde_json::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
            path: path.to_native(),
            format: "JSON".into(),
            message: e.to_string(),
        })?;
        io::write_atomic(path, content.as_bytes())
    }

    fn check_format(path: &NormalizedPath) -> Result<()> {
        let extension = path.extension().unwrap_or("");
        if extension.eq_ignore_ascii_case("json") {
            Ok(())
        } else {
            Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            })
        }
    }
}
