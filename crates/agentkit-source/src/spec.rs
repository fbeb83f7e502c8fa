//! Source identifier classification
//!
//! Precedence: explicit local path, then remote reference, then a bare name
//! that happens to exist locally.
//!
//! | Input                         | Classification              |
//! |-------------------------------|-----------------------------|
//! | `./kit`, `../kit`, `/k`, `~/k` | local (explicit)           |
//! | `github:owner/repo#v2`        | remote                      |
//! | `owner/repo/subdir`           | remote (GitHub)             |
//! | `https://host/repo.git`       | remote (URL)                |
//! | `kit` (exists locally)        | local (ambiguous)           |
//! | `kit` (missing)               | remote                      |

use std::fmt;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Where a registry should be fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// A directory on this machine.
    Local {
        path: PathBuf,
        /// `false` when a bare name was taken as a local directory because
        /// it exists; callers should suggest the `./` form.
        explicit: bool,
    },
    /// A git repository.
    Remote(RemoteRef),
}

/// Hosting provider of a shorthand remote reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    GitHub,
    GitLab,
    Bitbucket,
}

impl Provider {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "github" | "gh" => Some(Self::GitHub),
            "gitlab" => Some(Self::GitLab),
            "bitbucket" => Some(Self::Bitbucket),
            _ => None,
        }
    }

    fn host(&self) -> &'static str {
        match self {
            Self::GitHub => "github.com",
            Self::GitLab => "gitlab.com",
            Self::Bitbucket => "bitbucket.org",
        }
    }
}

/// A remote repository reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRef {
    /// Clone URL
    pub url: String,
    /// Subdirectory of the repository holding the registry
    pub subdir: Option<String>,
    /// Branch, tag or commit to check out
    pub reference: Option<String>,
}

impl RemoteRef {
    /// Parse `provider:owner/repo[/subdir][#ref]` or a plain git URL.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |message: &str| Error::InvalidSource {
            source_id: raw.to_string(),
            message: message.to_string(),
        };

        let (body, reference) = match raw.rsplit_once('#') {
            Some((body, r)) if !r.is_empty() => (body, Some(r.to_string())),
            Some((body, _)) => (body, None),
            None => (raw, None),
        };

        if is_url(body) {
            return Ok(Self {
                url: body.to_string(),
                subdir: None,
                reference,
            });
        }

        let (provider, path) = match body.split_once(':') {
            Some((prefix, rest)) => {
                let provider = Provider::from_prefix(prefix)
                    .ok_or_else(|| invalid(&format!("unknown provider \"{prefix}\"")))?;
                (provider, rest)
            }
            None => (Provider::GitHub, body),
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() < 2 {
            return Err(invalid("expected owner/repo"));
        }
        if segments.iter().any(|s| *s == "..") {
            return Err(invalid("\"..\" is not allowed in a repository path"));
        }

        let repo = segments[1].trim_end_matches(".git");
        let subdir = (segments.len() > 2).then(|| segments[2..].join("/"));

        Ok(Self {
            url: format!("https://{}/{}/{}.git", provider.host(), segments[0], repo),
            subdir,
            reference,
        })
    }
}

impl fmt::Display for RemoteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)?;
        if let Some(subdir) = &self.subdir {
            write!(f, " ({subdir})")?;
        }
        if let Some(reference) = &self.reference {
            write!(f, " @ {reference}")?;
        }
        Ok(())
    }
}

impl SourceSpec {
    /// Classify `raw`, resolving relative local paths against `cwd`.
    pub fn parse(raw: &str, cwd: &Path) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::InvalidSource {
                source_id: raw.to_string(),
                message: "source is empty".to_string(),
            });
        }

        if is_explicit_local(raw) {
            return Ok(Self::Local {
                path: resolve_local(raw, cwd),
                explicit: true,
            });
        }

        let local = cwd.join(raw);
        if looks_remote(raw) || !local.exists() {
            return Ok(Self::Remote(RemoteRef::parse(raw)?));
        }

        Ok(Self::Local {
            path: local,
            explicit: false,
        })
    }

    /// Whether this is a bare name that was taken as a local directory.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Local { explicit: false, .. })
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { path, .. } => write!(f, "{}", path.display()),
            Self::Remote(remote) => write!(f, "{remote}"),
        }
    }
}

fn is_explicit_local(raw: &str) -> bool {
    raw.starts_with("./")
        || raw.starts_with("../")
        || raw.starts_with('/')
        || raw.starts_with('~')
        || raw.starts_with(".\\")
        || raw.starts_with("..\\")
}

fn looks_remote(raw: &str) -> bool {
    let has_provider = raw
        .split_once(':')
        .is_some_and(|(prefix, _)| Provider::from_prefix(prefix).is_some());
    has_provider || is_url(raw) || (raw.contains('/') && !raw.contains('\\'))
}

fn is_url(raw: &str) -> bool {
    raw.contains("://") || raw.starts_with("git@")
}

fn resolve_local(raw: &str, cwd: &Path) -> PathBuf {
    if let Some(rest) = raw.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches(['/', '\\']));
        }
    }
    cwd.join(raw)
}
