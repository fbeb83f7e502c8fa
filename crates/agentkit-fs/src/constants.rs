//! Well-known names in registries and assembled projects.

use std::path::Path;

/// Standard file and directory names agentkit reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KitPath {
    /// The `agent.config.json` configuration record
    ConfigFile,
    /// The `.agent` destination directory (also a registry layout)
    AgentDir,
    /// The `registry` directory inside a kit
    RegistryDir,
    /// The kit subdirectory found in full monorepo checkouts
    KitSubdir,
    /// The `presets` directory inside a kit
    PresetsDir,
    /// The `agents` category directory
    AgentsDir,
    /// The `.shared` resource directory
    SharedDir,
    /// The `ARCHITECTURE.md` document
    Architecture,
}

impl KitPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigFile => "agent.config.json",
            Self::AgentDir => ".agent",
            Self::RegistryDir => "registry",
            Self::KitSubdir => "nguyencoder-kit",
            Self::PresetsDir => "presets",
            Self::AgentsDir => "agents",
            Self::SharedDir => ".shared",
            Self::Architecture => "ARCHITECTURE.md",
        }
    }
}

impl AsRef<Path> for KitPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for KitPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for KitPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
