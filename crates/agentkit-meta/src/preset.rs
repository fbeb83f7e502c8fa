//! Preset definition schema - loaded from `presets/*.json` in a registry
//!
//! A preset is a curated base list of module paths.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "name": "web-full",
//!   "description": "Frontend and backend web development",
//!   "modules": ["skills/react-patterns", "workflows/deploy", "root/GEMINI.md"]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Complete preset definition loaded from JSON
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preset {
    /// Display name; filled from the preset identifier when missing
    #[serde(default)]
    pub name: String,
    /// Optional description of what this preset provides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Module paths in installation order (e.g., "skills/docker-expert")
    #[serde(default)]
    pub modules: Vec<String>,
}

impl Preset {
    /// Parse a preset from JSON, naming it after `id` if the document has no name.
    pub fn parse(content: &str, id: &str) -> serde_json::Result<Self> {
        let mut preset: Preset = serde_json::from_str(content)?;
        if preset.name.trim().is_empty() {
            preset.name = preset_stem(id).to_string();
        }
        Ok(preset)
    }

    /// Summarize this preset for catalog listings.
    pub fn summary(&self, id: impl Into<String>) -> PresetSummary {
        PresetSummary {
            id: id.into(),
            description: self.description.clone(),
            module_count: self.modules.len(),
        }
    }
}

/// One line of a preset catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetSummary {
    /// File stem of the preset (e.g., "minimal")
    pub id: String,
    pub description: Option<String>,
    pub module_count: usize,
}

impl PresetSummary {
    /// Description or the placeholder shown when a preset has none.
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No description")
    }
}

/// `presets/web-full.json` -> `web-full`
pub(crate) fn preset_stem(id: &str) -> &str {
    let last = id.rsplit('/').next().unwrap_or(id);
    last.strip_suffix(".json").unwrap_or(last)
}
