//! Preset lookup across registry layouts
//!
//! A fetched registry can be a bare kit, a monorepo with the kit in a
//! subdirectory, or be addressed by shorthand (`minimal` instead of
//! `presets/minimal`). The store tries each layout in a fixed order:
//!
//! ```text
//! <root>/<id>.json
//! <root>/nguyencoder-kit/<id>.json
//! <root>/nguyencoder-kit/presets/<id>.json   (only if id lacks "presets/")
//! ```

use agentkit_fs::{KitPath, NormalizedPath, io};
use std::fs;

use crate::preset::{Preset, PresetSummary, preset_stem};
use crate::{Error, Result};

/// A candidate generator: returns the path to probe, or `None` when the
/// layout does not apply to this identifier.
type Candidate = fn(&NormalizedPath, &str) -> Option<NormalizedPath>;

/// Preset candidates in priority order.
const CANDIDATES: &[Candidate] = &[at_root, in_kit_subdir, in_kit_presets_dir];

fn at_root(root: &NormalizedPath, id: &str) -> Option<NormalizedPath> {
    Some(root.join(&with_json_suffix(id)))
}

fn in_kit_subdir(root: &NormalizedPath, id: &str) -> Option<NormalizedPath> {
    Some(root.join(KitPath::KitSubdir.as_str()).join(&with_json_suffix(id)))
}

fn in_kit_presets_dir(root: &NormalizedPath, id: &str) -> Option<NormalizedPath> {
    if id.starts_with("presets/") {
        return None;
    }
    Some(
        root.join(KitPath::KitSubdir.as_str())
            .join(KitPath::PresetsDir.as_str())
            .join(&with_json_suffix(id)),
    )
}

fn with_json_suffix(id: &str) -> String {
    if id.ends_with(".json") {
        id.to_string()
    } else {
        format!("{id}.json")
    }
}

/// Finds and loads presets from a registry root.
#[derive(Debug, Clone)]
pub struct PresetStore {
    root: NormalizedPath,
}

impl PresetStore {
    /// Create a store over a registry root directory.
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    /// The registry root this store searches.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Every path probed for `id`, in priority order.
    pub fn candidates(&self, id: &str) -> Vec<NormalizedPath> {
        CANDIDATES
            .iter()
            .filter_map(|candidate| candidate(&self.root, id))
            .collect()
    }

    /// Path of the preset file for `id`, if any candidate exists.
    pub fn find(&self, id: &str) -> Option<NormalizedPath> {
        CANDIDATES
            .iter()
            .filter_map(|candidate| candidate(&self.root, id))
            .inspect(|path| tracing::debug!(preset = id, candidate = %path, "Probing preset"))
            .find(|path| path.is_file())
    }

    /// Locate and parse the preset `id`.
    pub fn locate(&self, id: &str) -> Result<Preset> {
        let path = self.find(id).ok_or_else(|| Error::PresetNotFound { id: id.to_string() })?;
        let content = io::read_text(&path)?;
        let preset = Preset::parse(&content, id).map_err(|e| Error::InvalidPreset {
            path: path.to_native(),
            message: e.to_string(),
        })?;
        tracing::debug!(preset = %preset.name, path = %path, modules = preset.modules.len(), "Loaded preset");
        Ok(preset)
    }

    /// The directory holding the registry's presets, if present.
    pub fn presets_dir(&self) -> Option<NormalizedPath> {
        let presets = KitPath::PresetsDir.as_str();
        [
            self.root.join(presets),
            self.root.join(KitPath::KitSubdir.as_str()).join(presets),
        ]
        .into_iter()
        .find(|dir| dir.is_dir())
    }

    /// Summaries of every preset in the registry, sorted by identifier.
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn list(&self) -> Result<Vec<PresetSummary>> {
        let dir = self.presets_dir().ok_or_else(|| Error::PresetsDirNotFound {
            root: self.root.to_native(),
        })?;

        let entries = fs::read_dir(dir.to_native())
            .map_err(|e| Error::Fs(agentkit_fs::Error::io(dir.to_native(), e)))?;

        let mut files: Vec<String> = entries
            .flatten()
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".json"))
            .collect();
        files.sort();

        let mut summaries = Vec::with_capacity(files.len());
        for file in files {
            let path = dir.join(&file);
            let parsed = io::read_text(&path)
                .map_err(|e| e.to_string())
                .and_then(|content| Preset::parse(&content, &file).map_err(|e| e.to_string()));
            match parsed {
                Ok(preset) => summaries.push(preset.summary(preset_stem(&file))),
                // Log warning but keep listing the other presets
                Err(e) => tracing::warn!("Failed to load preset {}: {}", path, e),
            }
        }

        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_json_suffix() {
        assert_eq!(with_json_suffix("minimal"), "minimal.json");
        assert_eq!(with_json_suffix("presets/minimal.json"), "presets/minimal.json");
    }

    #[test]
    fn test_kit_presets_candidate_skipped_for_prefixed_id() {
        let root = NormalizedPath::new("/kit");
        assert!(in_kit_presets_dir(&root, "presets/minimal").is_none());
        assert!(in_kit_presets_dir(&root, "minimal").is_some());
    }
}
