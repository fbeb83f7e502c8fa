//! Shared test utilities for the agentkit workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each hand-roll registry trees. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`git`]: turn a fixture directory into a committed git repository
//! - [`registry`]: [`TestRegistry`] builder for registry layouts
//! - [`project`]: [`TestProject`] working directory with `agent.config.json`

pub mod git;
pub mod project;
pub mod registry;

pub use project::TestProject;
pub use registry::TestRegistry;
