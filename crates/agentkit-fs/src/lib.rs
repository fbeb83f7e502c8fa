//! Filesystem primitives for agentkit
//!
//! Provides normalized path handling, atomic writes, recursive copies and
//! JSON configuration storage used by the higher layers.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::KitPath;
pub use error::{Error, Result};
pub use io::CopyFilter;
pub use path::NormalizedPath;
