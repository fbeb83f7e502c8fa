//! The `agent.config.json` configuration record
//!
//! The record is the only durable state agentkit keeps: one file per working
//! directory, read at the start of every module-affecting command and
//! rewritten wholesale after each mutation.
//!
//! ```json
//! {
//!   "source": "github:nguyen-phan123/antigravity-kit",
//!   "base": "presets/minimal",
//!   "include": ["skills/docker-expert"],
//!   "exclude": ["rules/clean-code"],
//!   "overrides": { "rules/custom.md": "./my-rules.md" }
//! }
//! ```

mod record;

pub use record::{DEFAULT_PRESET, KitConfig, Membership};
pub(crate) use record::validate_override_target;
