//! Registry retrieval for agentkit.
//!
//! Turns a source identifier from `agent.config.json` into a local directory
//! tree holding registry content. Local directories are copied and remote
//! repositories are cloned, always into a [`Staging`] directory owned by the
//! calling command and removed when it is dropped.

pub mod error;
pub mod fetch;
pub mod git;
pub mod spec;
pub mod staging;

pub use error::{Error, Result};
pub use fetch::{Fetcher, RegistryFetcher};
pub use spec::{Provider, RemoteRef, SourceSpec};
pub use staging::Staging;

/// Source used by `init` and `list` when none is given.
pub const DEFAULT_SOURCE: &str = "github:nguyen-phan123/antigravity-kit";
