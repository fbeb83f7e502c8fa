//! Error types for agentkit-core

use std::path::PathBuf;

/// Result type for agentkit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in agentkit-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration record not found at expected path
    #[error("{} not found at {}", agentkit_fs::KitPath::ConfigFile, .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Module path that is not `<category>/<name>`
    #[error("Invalid module path \"{path}\": {reason}")]
    InvalidModulePath { path: String, reason: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from agentkit-fs
    #[error(transparent)]
    Fs(#[from] agentkit_fs::Error),

    /// Preset error from agentkit-meta
    #[error(transparent)]
    Meta(#[from] agentkit_meta::Error),

    /// Retrieval error from agentkit-source
    #[error(transparent)]
    Source(#[from] agentkit_source::Error),
}

impl Error {
    pub(crate) fn invalid_module(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidModulePath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_display() {
        let err = Error::ConfigNotFound {
            path: PathBuf::from("/work/agent.config.json"),
        };
        assert_eq!(
            err.to_string(),
            "agent.config.json not found at /work/agent.config.json"
        );
    }

    #[test]
    fn test_meta_error_is_transparent() {
        let err: Error = agentkit_meta::Error::PresetNotFound {
            id: "presets/ghost".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Preset \"presets/ghost\" not found");
    }
}
