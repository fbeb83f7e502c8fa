//! Error types for agentkit-source

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] agentkit_fs::Error),

    #[error("Local path not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Source is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Invalid source \"{source_id}\": {message}")]
    InvalidSource { source_id: String, message: String },

    #[error("{message}")]
    RetrievalFailed { source_id: String, message: String },

    #[error("Failed to create staging directory in {}: {source}", .dir.display())]
    Staging {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_display() {
        let err = Error::SourceNotFound {
            path: PathBuf::from("/work/kit"),
        };
        assert_eq!(err.to_string(), "Local path not found: /work/kit");
    }

    #[test]
    fn test_retrieval_failed_displays_message_only() {
        let err = Error::RetrievalFailed {
            source_id: "github:me/kit".to_string(),
            message: "Repository not found: github:me/kit".to_string(),
        };
        assert_eq!(err.to_string(), "Repository not found: github:me/kit");
    }
}
