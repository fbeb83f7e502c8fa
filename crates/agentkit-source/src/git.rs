//! Git operations for remote registries

use std::path::Path;

use git2::build::RepoBuilder;
use git2::{Cred, ErrorClass, ErrorCode, FetchOptions, RemoteCallbacks};

use crate::error::{Error, Result};

/// Options for [`clone_repo`].
#[derive(Debug, Clone, Default)]
pub struct CloneOptions<'a> {
    /// Branch, tag or commit to check out after cloning
    pub reference: Option<&'a str>,
    /// Access token for private repositories
    pub token: Option<&'a str>,
}

/// Clone a git repository to a destination directory.
///
/// Network clones without a reference are shallow. Failures whose cause is
/// a missing or inaccessible repository are rewrapped with hints.
pub fn clone_repo(url: &str, dest: &Path, options: &CloneOptions<'_>) -> Result<()> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::Fs(agentkit_fs::Error::io(parent, e)))?;
    }

    let mut fetch = FetchOptions::new();
    if let Some(token) = options.token {
        fetch.remote_callbacks(token_callbacks(token));
    }
    if options.reference.is_none() && is_network_url(url) {
        fetch.depth(1);
    }

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch);

    tracing::info!(url, dest = %dest.display(), "Cloning registry");
    let repo = builder.clone(url, dest).map_err(|e| clone_error(url, &e))?;

    if let Some(reference) = options.reference {
        // Tags and commits need an explicit checkout after the clone
        let (object, git_ref) = repo
            .revparse_ext(reference)
            .or_else(|_| repo.revparse_ext(&format!("origin/{reference}")))
            .map_err(|e| Error::RetrievalFailed {
                source_id: url.to_string(),
                message: format!("Reference {} not found in {}: {}", reference, url, e.message()),
            })?;

        repo.checkout_tree(&object, Some(git2::build::CheckoutBuilder::new().force()))
            .map_err(|e| Error::RetrievalFailed {
                source_id: url.to_string(),
                message: format!("Failed to checkout {}: {}", reference, e.message()),
            })?;

        let head = match git_ref.as_ref().and_then(|r| r.name()) {
            Some(name) if name.starts_with("refs/heads/") => repo.set_head(name),
            _ => repo.set_head_detached(object.id()),
        };
        head.map_err(|e| Error::RetrievalFailed {
            source_id: url.to_string(),
            message: format!("Failed to set HEAD: {}", e.message()),
        })?;
    }

    Ok(())
}

fn token_callbacks(token: &str) -> RemoteCallbacks<'_> {
    let mut callbacks = RemoteCallbacks::new();
    let mut attempted = false;
    callbacks.credentials(move |_url, _username, _allowed| {
        // libgit2 retries forever on rejected credentials
        if attempted {
            return Err(git2::Error::from_str("access token rejected"));
        }
        attempted = true;
        Cred::userpass_plaintext("x-access-token", token)
    });
    callbacks
}

fn is_network_url(url: &str) -> bool {
    url.starts_with("https://")
        || url.starts_with("http://")
        || url.starts_with("ssh://")
        || url.starts_with("git@")
}

fn clone_error(url: &str, err: &git2::Error) -> Error {
    let message = err.message();
    let not_found = err.code() == ErrorCode::NotFound
        || err.code() == ErrorCode::Auth
        || (err.class() == ErrorClass::Http
            && (message.contains("404") || message.contains("401")))
        || message.contains("not found");

    if not_found {
        Error::RetrievalFailed {
            source_id: url.to_string(),
            message: format!(
                "Repository not found: {url}\n    \
                 Tip: If this is a private repo, set AGENTKIT_AUTH or GITHUB_TOKEN.\n    \
                 Tip: For local paths, use ./path or ../path (explicit local)"
            ),
        }
    } else {
        Error::RetrievalFailed {
            source_id: url.to_string(),
            message: format!("Failed to clone {url}: {message}"),
        }
    }
}
