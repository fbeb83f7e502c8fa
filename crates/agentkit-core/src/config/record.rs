//! Configuration record type and its mutations

use std::collections::BTreeMap;
use std::path::Path;

use agentkit_fs::{ConfigStore, KitPath, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::module::ModulePath;
use crate::{Error, Result};

/// Preset used by `init` when none is given.
pub const DEFAULT_PRESET: &str = "minimal";

/// Where a module path sits in the include/exclude deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Included,
    Excluded,
    Neither,
}

/// Configuration record persisted as `agent.config.json`.
///
/// `include` and `exclude` are kept duplicate-free and disjoint: every
/// mutation that adds a path to one list removes it from the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitConfig {
    /// Registry location (local path or remote reference)
    pub source: String,
    /// Preset identifier, e.g. `presets/minimal`
    pub base: String,
    /// Modules added on top of the preset, in insertion order
    #[serde(default)]
    pub include: Vec<String>,
    /// Modules removed from the preset, in insertion order
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Destination path -> local file copied over it after assembly
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl KitConfig {
    /// A fresh record for `kit` (a preset name such as `minimal`).
    pub fn new(source: impl Into<String>, kit: &str) -> Self {
        let kit = kit.trim_start_matches("presets/");
        Self {
            source: source.into(),
            base: format!("presets/{kit}"),
            include: Vec::new(),
            exclude: Vec::new(),
            overrides: BTreeMap::new(),
        }
    }

    /// Path of the record inside `dir`.
    pub fn path(dir: &Path) -> NormalizedPath {
        NormalizedPath::new(dir).join(KitPath::ConfigFile.as_str())
    }

    /// Whether a record exists in `dir`.
    pub fn exists(dir: &Path) -> bool {
        Self::path(dir).is_file()
    }

    /// Load the record from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::path(dir);
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_native(),
            });
        }
        let mut config: Self = ConfigStore::new().load(&path)?;
        config.normalize();
        Ok(config)
    }

    /// Write the record to `dir` atomically.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = Self::path(dir);
        ConfigStore::new().save(&path, self)?;
        tracing::debug!(path = %path, "Saved configuration record");
        Ok(())
    }

    /// Add `module` to the include list, dropping it from exclude.
    ///
    /// Returns `false` when the record was already in that state.
    pub fn include_module(&mut self, module: &ModulePath) -> bool {
        let key = module.to_string();
        let removed = remove_all(&mut self.exclude, &key);
        let added = push_unique(&mut self.include, key);
        removed || added
    }

    /// Add `module` to the exclude list, dropping it from include.
    ///
    /// Returns `false` when the record was already in that state.
    pub fn exclude_module(&mut self, module: &ModulePath) -> bool {
        let key = module.to_string();
        let removed = remove_all(&mut self.include, &key);
        let added = push_unique(&mut self.exclude, key);
        removed || added
    }

    /// Current delta membership of `module`.
    pub fn membership(&self, module: &ModulePath) -> Membership {
        let key = module.to_string();
        if self.exclude.contains(&key) {
            Membership::Excluded
        } else if self.include.contains(&key) {
            Membership::Included
        } else {
            Membership::Neither
        }
    }

    /// Register a local replacement for a destination path.
    ///
    /// Returns the previous local path, if any.
    pub fn set_override(&mut self, target: &str, local_path: &str) -> Result<Option<String>> {
        let target = validate_override_target(target)?;
        Ok(self.overrides.insert(target, local_path.to_string()))
    }

    /// Drop the override for a destination path.
    pub fn remove_override(&mut self, target: &str) -> Option<String> {
        self.overrides.remove(&override_key(target))
    }

    /// Restore the list invariants on a record edited by hand.
    fn normalize(&mut self) {
        dedup_in_order(&mut self.include);
        dedup_in_order(&mut self.exclude);
        // A path in both lists is excluded, matching resolution precedence
        let exclude = self.exclude.clone();
        self.include.retain(|m| !exclude.contains(m));
    }
}

fn push_unique(list: &mut Vec<String>, item: String) -> bool {
    if list.contains(&item) {
        false
    } else {
        list.push(item);
        true
    }
}

fn remove_all(list: &mut Vec<String>, item: &str) -> bool {
    let before = list.len();
    list.retain(|m| m != item);
    list.len() != before
}

fn dedup_in_order(list: &mut Vec<String>) {
    let mut seen = Vec::with_capacity(list.len());
    list.retain(|m| {
        if seen.contains(m) {
            false
        } else {
            seen.push(m.clone());
            true
        }
    });
}

/// Override targets are written verbatim under `.agent`, so they must stay inside it.
pub(crate) fn validate_override_target(target: &str) -> Result<String> {
    let trimmed = override_key(target);
    if trimmed.is_empty() || trimmed.starts_with('/') {
        return Err(Error::invalid_module(target, "override target must be a relative path"));
    }
    if trimmed.split('/').any(|s| s.is_empty() || s == "." || s == "..") {
        return Err(Error::invalid_module(target, "override target must stay inside .agent"));
    }
    Ok(trimmed)
}

/// Stored form of an override target: forward slashes, no trailing `/`.
fn override_key(target: &str) -> String {
    target.replace('\\', "/").trim_end_matches('/').to_string()
}
