//! The install pipeline
//!
//! ```text
//! source -> Staging -> preset lookup -> core components -> resolve
//!        -> per module: locate + copy -> overrides -> staging cleanup
//! ```
//!
//! The preset is looked up before anything is written so that a bad `base`
//! leaves an existing `.agent` untouched.

use std::path::PathBuf;

use agentkit_fs::{KitPath, NormalizedPath};
use agentkit_meta::{PresetStore, PresetSummary};
use agentkit_source::{Fetcher, SourceSpec, Staging};

use crate::config::KitConfig;
use crate::core_components::{CoreComponents, install_core_components, is_core_module};
use crate::locator::SourceLocator;
use crate::materializer::Materializer;
use crate::module::ModulePath;
use crate::resolve::resolve;
use crate::Result;

/// What an install did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Display name of the base preset
    pub preset: String,
    /// Resolved module paths, in copy order
    pub resolved: Vec<String>,
    /// Modules copied into the destination
    pub copied: Vec<String>,
    /// Resolved modules already provided by the core components
    pub skipped_core: Vec<String>,
    /// Modules with no source in the registry
    pub missing: Vec<String>,
    /// Preset entries that are not valid module paths
    pub invalid: Vec<String>,
    /// Override targets that were replaced
    pub overrides_applied: Vec<String>,
    /// `(target, local path)` overrides whose local file is missing
    pub overrides_missing: Vec<(String, String)>,
    /// Core components that were installed
    pub core: CoreComponents,
}

impl InstallReport {
    /// Number of resolved modules that were expected to be copied.
    pub fn expected(&self) -> usize {
        self.resolved.len() - self.skipped_core.len()
    }

    /// Whether every expected module and override was written.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty() && self.overrides_missing.is_empty()
    }
}

/// Assembles `.agent` inside a project directory.
#[derive(Debug, Clone)]
pub struct Assembler {
    project_dir: PathBuf,
}

impl Assembler {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }

    /// The destination directory, `<project>/.agent`.
    pub fn destination(&self) -> NormalizedPath {
        NormalizedPath::new(&self.project_dir).join(KitPath::AgentDir.as_str())
    }

    /// Fetch the configured registry and assemble the destination from it.
    pub fn install(&self, config: &KitConfig, fetcher: &dyn Fetcher) -> Result<InstallReport> {
        let staging = Staging::new_in(&self.project_dir)?;
        let registry_root = self.fetch(&config.source, fetcher, &staging)?;
        let report = self.assemble(config, &registry_root)?;
        staging.close();
        Ok(report)
    }

    /// Assemble the destination from an already available registry root.
    pub fn assemble(&self, config: &KitConfig, registry_root: &NormalizedPath) -> Result<InstallReport> {
        let preset = PresetStore::new(registry_root.clone()).locate(&config.base)?;
        let locator = SourceLocator::new(registry_root.clone());
        let materializer = Materializer::new(self.destination());

        let mut report = InstallReport {
            preset: preset.name.clone(),
            ..InstallReport::default()
        };

        report.core = install_core_components(&locator.registry_dir(), materializer.dest())?;

        report.resolved = resolve(&preset.modules, &config.include, &config.exclude);
        tracing::info!(
            preset = %preset.name,
            modules = report.resolved.len(),
            "Resolved module set"
        );

        for raw in &report.resolved {
            if is_core_module(raw) {
                tracing::debug!(module = %raw, "Skipping core module");
                report.skipped_core.push(raw.clone());
                continue;
            }
            let module = match ModulePath::parse(raw) {
                Ok(module) => module,
                Err(e) => {
                    tracing::warn!("{}", e);
                    report.invalid.push(raw.clone());
                    continue;
                }
            };
            match locator.locate(raw) {
                Some(source) => {
                    materializer.copy_module(&source, &module)?;
                    report.copied.push(raw.clone());
                }
                None => {
                    tracing::warn!("Module not found: {}", raw);
                    report.missing.push(raw.clone());
                }
            }
        }

        let overrides = materializer.apply_overrides(&config.overrides, &self.project_dir)?;
        report.overrides_applied = overrides.applied;
        report.overrides_missing = overrides.missing;

        tracing::info!(
            copied = report.copied.len(),
            expected = report.expected(),
            "Assembled {}",
            materializer.dest()
        );
        Ok(report)
    }

    /// List the presets published by `source` without touching local state
    /// beyond the staging directory.
    pub fn catalog(&self, source: &str, fetcher: &dyn Fetcher) -> Result<Vec<PresetSummary>> {
        let staging = Staging::new_in(&self.project_dir)?;
        let registry_root = self.fetch(source, fetcher, &staging)?;
        let presets = PresetStore::new(registry_root).list()?;
        staging.close();
        Ok(presets)
    }

    fn fetch(&self, source: &str, fetcher: &dyn Fetcher, staging: &Staging) -> Result<NormalizedPath> {
        let spec = SourceSpec::parse(source, &self.project_dir)?;
        if spec.is_ambiguous() {
            tracing::warn!(
                "Treating \"{}\" as a local path. Use ./{} to make this explicit.",
                source,
                source
            );
        }
        tracing::info!(source = %spec, "Fetching registry");
        Ok(fetcher.fetch(&spec, staging)?)
    }
}
