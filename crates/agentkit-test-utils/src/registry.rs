//! [`TestRegistry`] builder for registry layouts.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary registry tree.
///
/// # Example
///
/// ```rust,no_run
/// use agentkit_test_utils::TestRegistry;
///
/// let registry = TestRegistry::new()
///     .file("registry/skills/docker-expert.md", "# Docker")
///     .preset("presets/minimal.json", "minimal", &["skills/docker-expert"]);
/// assert!(registry.root().join("presets/minimal.json").exists());
/// ```
pub struct TestRegistry {
    temp_dir: TempDir,
}

impl Default for TestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRegistry {
    /// Create an empty registry directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A standalone kit with core components, a few modules and two presets:
    ///
    /// ```text
    /// registry/agents/{planner,reviewer}.md
    /// registry/root/ARCHITECTURE.md
    /// registry/root/GEMINI.md
    /// registry/.shared/templates/base.md
    /// registry/skills/docker-expert.md
    /// registry/skills/react-patterns/SKILL.md
    /// registry/workflows/deploy.md
    /// registry/rules/clean-code.md
    /// presets/minimal.json
    /// presets/web-full.json
    /// ```
    pub fn standard_kit() -> Self {
        Self::new()
            .file("registry/agents/planner.md", "# Planner agent")
            .file("registry/agents/reviewer.md", "# Reviewer agent")
            .file("registry/root/ARCHITECTURE.md", "# Architecture")
            .file("registry/root/GEMINI.md", "# Gemini rules")
            .file("registry/.shared/templates/base.md", "# Shared template")
            .file("registry/skills/docker-expert.md", "# Docker expert")
            .file("registry/skills/react-patterns/SKILL.md", "# React patterns")
            .file("registry/skills/react-patterns/examples/hooks.md", "# Hooks")
            .file("registry/workflows/deploy.md", "# Deploy workflow")
            .file("registry/rules/clean-code.md", "# Clean code")
            .preset_with_description(
                "presets/minimal.json",
                "minimal",
                "Smallest useful kit",
                &["skills/docker-expert", "rules/clean-code"],
            )
            .preset_with_description(
                "presets/web-full.json",
                "web-full",
                "Full web development kit",
                &[
                    "skills/docker-expert",
                    "skills/react-patterns",
                    "workflows/deploy",
                    "rules/clean-code",
                    "root/GEMINI.md",
                    "agents/planner",
                    "root/ARCHITECTURE.md",
                ],
            )
    }

    /// Return the root path of the registry.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the root path as an owned `PathBuf`.
    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Write `content` at `rel` (relative to the root), creating parents.
    pub fn file(self, rel: &str, content: &str) -> Self {
        let full = self.root().join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
        self
    }

    /// Create an empty directory at `rel`.
    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.root().join(rel)).unwrap();
        self
    }

    /// Write a preset JSON file at `rel`.
    pub fn preset(self, rel: &str, name: &str, modules: &[&str]) -> Self {
        let json = serde_json::json!({ "name": name, "modules": modules });
        self.file(rel, &serde_json::to_string_pretty(&json).unwrap())
    }

    /// Write a preset JSON file with a description at `rel`.
    pub fn preset_with_description(
        self,
        rel: &str,
        name: &str,
        description: &str,
        modules: &[&str],
    ) -> Self {
        let json = serde_json::json!({
            "name": name,
            "description": description,
            "modules": modules,
        });
        self.file(rel, &serde_json::to_string_pretty(&json).unwrap())
    }

    /// Commit the whole tree into a git repository rooted at the registry.
    pub fn commit(self) -> Self {
        crate::git::commit_all(self.root(), "Initial registry");
        self
    }
}
