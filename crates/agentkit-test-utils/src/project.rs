//! [`TestProject`] working directory for install scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with helpers for `agent.config.json`
/// and assertions against the assembled `.agent` tree.
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the `.agent` destination directory.
    pub fn agent_dir(&self) -> PathBuf {
        self.root().join(".agent")
    }

    /// Write `agent.config.json` from raw parts.
    pub fn write_config(
        &self,
        source: &str,
        base: &str,
        include: &[&str],
        exclude: &[&str],
        overrides: &[(&str, &str)],
    ) {
        let overrides: serde_json::Map<String, serde_json::Value> = overrides
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        let json = serde_json::json!({
            "source": source,
            "base": base,
            "include": include,
            "exclude": exclude,
            "overrides": overrides,
        });
        fs::write(
            self.root().join("agent.config.json"),
            serde_json::to_string_pretty(&json).unwrap(),
        )
        .unwrap();
    }

    /// Write a local file (e.g. an override source) relative to the root.
    pub fn file(&self, rel: &str, content: &str) {
        let full = self.root().join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }

    /// Read `agent.config.json` as untyped JSON.
    pub fn read_config(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.root().join("agent.config.json"))
            .expect("agent.config.json should exist");
        serde_json::from_str(&content).unwrap()
    }

    /// Sorted relative paths and contents of every file under `.agent`.
///
/// Symlinks appear with `-> <target>` as their content.
    pub fn agent_tree(&self) -> Vec<(String, Vec<u8>)> {
        let mut out = Vec::new();
        collect(&self.agent_dir(), &self.agent_dir(), &mut out);
        out.sort();
        out
    }

    /// Assert that `path` (relative to `.agent`) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_agent_file(&self, path: &str, content: &str) {
        let full_path = self.agent_dir().join(path);
        let actual = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Expected file to exist: {}", full_path.display()));
        assert_eq!(actual, content, "Unexpected content in {}", full_path.display());
    }

    /// Assert that `path` (relative to `.agent`) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_agent_missing(&self, path: &str) {
        let full_path = self.agent_dir().join(path);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }
}

fn collect(base: &Path, dir: &Path, out: &mut Vec<(String, Vec<u8>)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let file_type = entry.file_type().unwrap();
        if file_type.is_dir() {
            collect(base, &path, out);
            continue;
        }
        let rel = path
            .strip_prefix(base)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        // Links are recorded by target so cycles are never walked
        let content = if file_type.is_symlink() {
            format!("-> {}", fs::read_link(&path).unwrap().display()).into_bytes()
        } else {
            fs::read(&path).unwrap()
        };
        out.push((rel, content));
    }
}
