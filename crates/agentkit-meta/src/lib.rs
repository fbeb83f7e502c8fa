//! Preset metadata for agentkit.
//!
//! This crate provides the [`Preset`] schema published by registries and the
//! [`PresetStore`] that finds presets across the registry layouts agentkit
//! understands.

pub mod error;
pub mod preset;
pub mod store;

pub use error::{Error, Result};
pub use preset::{Preset, PresetSummary};
pub use store::PresetStore;
