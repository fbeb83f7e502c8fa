//! Fetchers that materialize a registry into a staging directory

use agentkit_fs::{CopyFilter, NormalizedPath, io};

use crate::git::{CloneOptions, clone_repo};
use crate::spec::{RemoteRef, SourceSpec};
use crate::staging::Staging;
use crate::{Error, Result};

/// Entries never copied out of a local source.
const SKIPPED_ENTRIES: &[&str] = &[".git", "node_modules"];

/// Environment variables consulted for a git access token, in order.
const TOKEN_VARS: &[&str] = &["AGENTKIT_AUTH", "GITHUB_TOKEN"];

/// Retrieves registry content into a staging directory.
///
/// Returns the directory that now holds the registry. The core only relies
/// on that directory existing; how it got there is up to the implementation.
pub trait Fetcher {
    fn fetch(&self, spec: &SourceSpec, staging: &Staging) -> Result<NormalizedPath>;
}

/// Default fetcher: copies local directories, clones remote repositories.
#[derive(Debug, Clone, Default)]
pub struct RegistryFetcher {
    token: Option<String>,
}

impl RegistryFetcher {
    /// Create a fetcher without credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher using the first token found in the environment.
    pub fn from_env() -> Self {
        let token = TOKEN_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty());
        Self { token }
    }

    fn fetch_local(&self, path: &std::path::Path, staging: &Staging) -> Result<NormalizedPath> {
        if !path.exists() {
            return Err(Error::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_dir() {
            return Err(Error::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let source = NormalizedPath::canonicalize(path)?;
        let dest = staging.path();
        // The staging directory may sit inside the source (`source: "./"`)
        let staging_name = dest.file_name().unwrap_or_default().to_string();
        let filter = CopyFilter::skipping(
            SKIPPED_ENTRIES
                .iter()
                .map(|s| s.to_string())
                .chain(std::iter::once(staging_name)),
        );
        let copied = io::copy_tree(&source, &dest, &filter)?;
        tracing::info!(source = %source, files = copied, "Copied local registry");
        Ok(dest)
    }

    fn fetch_remote(&self, remote: &RemoteRef, staging: &Staging) -> Result<NormalizedPath> {
        let checkout = staging.path().join("checkout");
        let options = CloneOptions {
            reference: remote.reference.as_deref(),
            token: self.token.as_deref(),
        };
        clone_repo(&remote.url, &checkout.to_native(), &options)?;

        let Some(subdir) = &remote.subdir else {
            return Ok(checkout);
        };
        let root = checkout.join(subdir);
        if !root.is_dir() {
            return Err(Error::RetrievalFailed {
                source_id: remote.url.clone(),
                message: format!("Subdirectory \"{}\" not found in {}", subdir, remote.url),
            });
        }
        Ok(root)
    }
}

impl Fetcher for RegistryFetcher {
    fn fetch(&self, spec: &SourceSpec, staging: &Staging) -> Result<NormalizedPath> {
        match spec {
            SourceSpec::Local { path, .. } => self.fetch_local(path, staging),
            SourceSpec::Remote(remote) => self.fetch_remote(remote, staging),
        }
    }
}
