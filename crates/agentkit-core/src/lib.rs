//! Module resolution and `.agent` assembly for agentkit
//!
//! `agentkit-core` sits above the Layer 0 crates and below the CLI:
//!
//! ```text
//!                 agentkit-cli
//!                      |
//!                agentkit-core
//!                      |
//!     +----------------+----------------+
//!     |                |                |
//! agentkit-fs    agentkit-meta    agentkit-source
//! ```
//!
//! - [`KitConfig`]: the `agent.config.json` record and its mutations
//! - [`resolve`]: preset modules plus include, minus exclude
//! - [`SourceLocator`]: finds module sources across registry layouts
//! - [`Materializer`]: copies modules and overrides into `.agent`
//! - [`Assembler`]: the full install pipeline and preset catalog

pub mod assembler;
pub mod config;
pub mod core_components;
pub mod error;
pub mod locator;
pub mod materializer;
pub mod module;
pub mod resolve;

pub use assembler::{Assembler, InstallReport};
pub use config::{DEFAULT_PRESET, KitConfig, Membership};
pub use core_components::{CoreComponents, install_core_components, is_core_module};
pub use error::{Error, Result};
pub use locator::SourceLocator;
pub use materializer::{Materializer, OverrideOutcome};
pub use module::{Category, ModulePath};
pub use resolve::resolve;
