//! Components every assembled `.agent` directory receives

use agentkit_fs::{CopyFilter, KitPath, NormalizedPath, io};

use crate::Result;

/// Which core components were found and installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoreComponents {
    pub agents: bool,
    pub architecture: bool,
    pub shared: bool,
}

/// Copy `agents/`, `ARCHITECTURE.md` and `.shared/` from `registry_dir`.
///
/// Each component is skipped silently when the registry lacks it.
pub fn install_core_components(
    registry_dir: &NormalizedPath,
    dest: &NormalizedPath,
) -> Result<CoreComponents> {
    let mut installed = CoreComponents::default();

    let agents = registry_dir.join(KitPath::AgentsDir.as_str());
    if agents.is_dir() {
        io::copy_tree(&agents, &dest.join(KitPath::AgentsDir.as_str()), &CopyFilter::all())?;
        installed.agents = true;
    }

    let architecture = [
        registry_dir.join("root").join(KitPath::Architecture.as_str()),
        registry_dir.join(KitPath::Architecture.as_str()),
    ]
    .into_iter()
    .find(|path| path.is_file());
    if let Some(architecture) = architecture {
        io::copy_file(&architecture, &dest.join(KitPath::Architecture.as_str()))?;
        installed.architecture = true;
    }

    let shared = registry_dir.join(KitPath::SharedDir.as_str());
    if shared.is_dir() {
        io::copy_tree(&shared, &dest.join(KitPath::SharedDir.as_str()), &CopyFilter::all())?;
        installed.shared = true;
    }

    tracing::info!(
        agents = installed.agents,
        architecture = installed.architecture,
        shared = installed.shared,
        "Installed core components"
    );
    Ok(installed)
}

/// Whether a resolved module path is already covered by the core components.
///
/// Matches the `agents` category and `root/ARCHITECTURE.md` (with or
/// without the extension), ignoring case.
pub fn is_core_module(module: &str) -> bool {
    let lower = module.to_ascii_lowercase();
    let (category, name) = lower.split_once('/').unwrap_or((lower.as_str(), ""));
    category == "agents" || (category == "root" && (name == "architecture.md" || name == "architecture"))
}
