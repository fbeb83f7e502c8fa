//! Copies located modules and overrides into the destination tree

use std::collections::BTreeMap;
use std::path::Path;

use agentkit_fs::{CopyFilter, NormalizedPath, io};

use crate::config::validate_override_target;
use crate::module::ModulePath;
use crate::Result;

/// Outcome of applying the overrides map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideOutcome {
    /// Destination paths that were replaced
    pub applied: Vec<String>,
    /// `(target, local path)` pairs whose local file does not exist
    pub missing: Vec<(String, String)>,
}

/// Writes modules into a destination root (normally `.agent`).
#[derive(Debug, Clone)]
pub struct Materializer {
    dest: NormalizedPath,
}

impl Materializer {
    pub fn new(dest: impl Into<NormalizedPath>) -> Self {
        Self { dest: dest.into() }
    }

    pub fn dest(&self) -> &NormalizedPath {
        &self.dest
    }

    /// Destination of `module` before extension inheritance.
    pub fn destination_for(&self, module: &ModulePath) -> NormalizedPath {
        self.dest.join(&module.destination())
    }

    /// Copy `source` into place for `module`, overwriting what is there.
    ///
    /// A directory source is copied recursively. A file source keeps its
    /// extension when the module path has none (`skills/x` -> `skills/x.md`).
    pub fn copy_module(&self, source: &NormalizedPath, module: &ModulePath) -> Result<NormalizedPath> {
        let mut target = self.destination_for(module);

        if source.is_dir() {
            io::copy_tree(source, &target, &CopyFilter::all())?;
        } else {
            if target.extension().is_none() {
                if let Some(ext) = source.extension() {
                    target = target.with_suffix(&format!(".{ext}"));
                }
            }
            io::copy_file(source, &target)?;
        }

        tracing::debug!(module = %module, from = %source, to = %target, "Copied module");
        Ok(target)
    }

    /// Copy each override's local path verbatim onto `dest/<target>`.
    ///
    /// Relative local paths resolve against `base_dir`. Targets are not
    /// remapped by category and get no extension inheritance.
    pub fn apply_overrides(
        &self,
        overrides: &BTreeMap<String, String>,
        base_dir: &Path,
    ) -> Result<OverrideOutcome> {
        let mut outcome = OverrideOutcome::default();

        for (target, local) in overrides {
            let target = validate_override_target(target)?;
            let local_path = Path::new(local);
            let source = if local_path.is_absolute() {
                NormalizedPath::new(local_path)
            } else {
                NormalizedPath::new(base_dir.join(local_path))
            };

            if !source.exists() {
                tracing::warn!("Override file not found: {} (for {})", local, target);
                outcome.missing.push((target, local.clone()));
                continue;
            }

            io::copy_path(&source, &self.dest.join(&target), &CopyFilter::all())?;
            tracing::debug!(target = %target, from = %source, "Applied override");
            outcome.applied.push(target);
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_root_category_is_flattened() {
        let materializer = Materializer::new("/work/.agent");
        let module = ModulePath::parse("root/GEMINI.md").unwrap();
        assert_eq!(materializer.destination_for(&module).as_str(), "/work/.agent/GEMINI.md");

        let module = ModulePath::parse("skills/web/react").unwrap();
        assert_eq!(
            materializer.destination_for(&module).as_str(),
            "/work/.agent/skills/web/react"
        );
    }

    #[test]
    fn test_file_source_inherits_extension() {
        let temp = tempfile::tempdir().unwrap();
        let source = temp.path().join("docker-expert.md");
        fs::write(&source, "# Docker").unwrap();

        let materializer = Materializer::new(temp.path().join(".agent"));
        let module = ModulePath::parse("skills/docker-expert").unwrap();
        let written = materializer
            .copy_module(&NormalizedPath::new(&source), &module)
            .unwrap();

        assert!(written.as_str().ends_with(".agent/skills/docker-expert.md"));
        assert_eq!(fs::read_to_string(written.to_native()).unwrap(), "# Docker");
    }
}
