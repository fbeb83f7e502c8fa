//! Error types for agentkit-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] agentkit_fs::Error),

    #[error("Preset \"{id}\" not found")]
    PresetNotFound { id: String },

    #[error("Invalid preset at {path}: {message}")]
    InvalidPreset { path: PathBuf, message: String },

    #[error("No presets folder found in registry at {root}")]
    PresetsDirNotFound { root: PathBuf },
}
