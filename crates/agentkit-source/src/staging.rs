//! Per-invocation scratch directory

use std::path::Path;

use agentkit_fs::NormalizedPath;
use tempfile::TempDir;

use crate::{Error, Result};

/// Prefix of every staging directory name.
pub const STAGING_PREFIX: &str = ".agentkit-staging-";

/// A uniquely named scratch directory holding fetched registry content.
///
/// The directory is removed when the value is dropped, on success and error
/// paths alike. Two concurrent invocations in the same working directory get
/// distinct directories.
#[derive(Debug)]
pub struct Staging {
    dir: TempDir,
}

impl Staging {
    /// Create a staging directory inside `parent`.
    pub fn new_in(parent: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(parent)
            .map_err(|source| Error::Staging {
                dir: parent.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %dir.path().display(), "Created staging directory");
        Ok(Self { dir })
    }

    /// Root of the staging directory.
    pub fn path(&self) -> NormalizedPath {
        NormalizedPath::new(self.dir.path())
    }

    /// Remove the directory now. Failure is logged, never returned.
    pub fn close(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            tracing::warn!("Failed to remove staging directory {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_is_unique_and_removed_on_drop() {
        let parent = tempfile::tempdir().unwrap();

        let first = Staging::new_in(parent.path()).unwrap();
        let second = Staging::new_in(parent.path()).unwrap();
        assert_ne!(first.path(), second.path());
        assert!(first.path().file_name().unwrap().starts_with(STAGING_PREFIX));

        let first_path = first.path().to_native();
        drop(first);
        assert!(!first_path.exists());

        let second_path = second.path().to_native();
        second.close();
        assert!(!second_path.exists());
    }

    #[test]
    fn test_staging_in_missing_parent_fails() {
        let result = Staging::new_in(Path::new("/nonexistent/agentkit/parent"));
        assert!(matches!(result, Err(Error::Staging { .. })));
    }
}
