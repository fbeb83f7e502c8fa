//! Module source lookup across registry layouts
//!
//! ```text
//! <root>/registry/<module>[.md]
//! <root>/nguyencoder-kit/registry/<module>[.md]
//! <root>/.agent/<module>[.md]
//! <root>/<module>[.md]                          (legacy flat layout)
//! ```

use agentkit_fs::{KitPath, NormalizedPath};

/// A layout root: the directory modules are resolved against.
type LayoutRoot = fn(&NormalizedPath) -> NormalizedPath;

/// Layout roots in priority order.
const LAYOUTS: &[LayoutRoot] = &[registry, kit_registry, agent_dir, bare];

/// Layouts that can host core components. The bare root is the fallback.
const REGISTRY_LAYOUTS: &[LayoutRoot] = &[registry, kit_registry, agent_dir];

fn registry(root: &NormalizedPath) -> NormalizedPath {
    root.join(KitPath::RegistryDir.as_str())
}

fn kit_registry(root: &NormalizedPath) -> NormalizedPath {
    root.join(KitPath::KitSubdir.as_str())
        .join(KitPath::RegistryDir.as_str())
}

fn agent_dir(root: &NormalizedPath) -> NormalizedPath {
    root.join(KitPath::AgentDir.as_str())
}

fn bare(root: &NormalizedPath) -> NormalizedPath {
    root.clone()
}

/// Finds module sources inside a fetched registry.
#[derive(Debug, Clone)]
pub struct SourceLocator {
    root: NormalizedPath,
}

impl SourceLocator {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Every path probed for `module`, in priority order.
    pub fn candidates(&self, module: &str) -> Vec<NormalizedPath> {
        LAYOUTS
            .iter()
            .map(|layout| layout(&self.root))
            .flat_map(|base| {
                let exact = base.join(module);
                let markdown = exact.with_suffix(".md");
                [exact, markdown]
            })
            .collect()
    }

    /// First existing source for `module`, file or directory.
    pub fn locate(&self, module: &str) -> Option<NormalizedPath> {
        self.candidates(module)
            .into_iter()
            .inspect(|path| tracing::debug!(module, candidate = %path, "Probing module source"))
            .find(|path| path.exists())
    }

    /// Directory core components are copied from.
    pub fn registry_dir(&self) -> NormalizedPath {
        REGISTRY_LAYOUTS
            .iter()
            .map(|layout| layout(&self.root))
            .find(|dir| dir.is_dir())
            .unwrap_or_else(|| self.root.clone())
    }
}
