//! Tests for the agent.config.json record

use agentkit_core::{Error, KitConfig, Membership, ModulePath};
use agentkit_test_utils::TestProject;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::fs;

fn module(raw: &str) -> ModulePath {
    ModulePath::parse(raw).unwrap()
}

mod persistence_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_then_load_preserves_record() {
        let project = TestProject::new();
        let mut config = KitConfig::new("./kit", "web-full");
        config.include_module(&module("skills/docker-expert"));
        config.exclude_module(&module("rules/clean-code"));
        config.set_override("rules/custom.md", "./my-rules.md").unwrap();

        config.save(project.root()).unwrap();
        let loaded = KitConfig::load(project.root()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_saved_json_uses_two_space_indent() {
        let project = TestProject::new();
        KitConfig::new("github:owner/kit", "minimal")
            .save(project.root())
            .unwrap();

        let content = fs::read_to_string(project.root().join("agent.config.json")).unwrap();
        assert!(content.starts_with("{\n  \"source\": \"github:owner/kit\""));
        assert_eq!(project.read_config()["base"], "presets/minimal");
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let project = TestProject::new();
        project.file(
            "agent.config.json",
            r#"{ "source": "./kit", "base": "presets/minimal" }"#,
        );

        let config = KitConfig::load(project.root()).unwrap();
        assert!(config.include.is_empty());
        assert!(config.exclude.is_empty());
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_load_without_record_is_config_not_found() {
        let project = TestProject::new();
        let result = KitConfig::load(project.root());
        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
        assert!(!KitConfig::exists(project.root()));
    }

    #[test]
    fn test_hand_edited_overlap_loads_as_excluded() {
        let project = TestProject::new();
        project.write_config("./kit", "presets/minimal", &["skills/a"], &["skills/a"], &[]);

        let config = KitConfig::load(project.root()).unwrap();
        assert!(config.include.is_empty());
        assert_eq!(config.membership(&module("skills/a")), Membership::Excluded);
    }
}

mod mutation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_then_remove_outside_preset_resolves_to_nothing() {
        let mut config = KitConfig::new("./kit", "minimal");
        let added = module("skills/tailwind");

        config.include_module(&added);
        config.exclude_module(&added);

        assert!(config.include.is_empty());
        let resolved = agentkit_core::resolve(&["rules/clean-code"], &config.include, &config.exclude);
        assert_eq!(resolved, vec!["rules/clean-code"]);
    }

    #[test]
    fn test_remove_then_add_restores_preset_module() {
        let mut config = KitConfig::new("./kit", "minimal");
        let target = module("rules/clean-code");

        config.exclude_module(&target);
        config.include_module(&target);

        assert!(config.exclude.is_empty());
        let resolved = agentkit_core::resolve(&["rules/clean-code"], &config.include, &config.exclude);
        assert_eq!(resolved, vec!["rules/clean-code"]);
    }
}

fn arb_op() -> impl Strategy<Value = (bool, String)> {
    (
        any::<bool>(),
        prop::sample::select(vec!["skills/a", "skills/b", "rules/c", "root/D.md"]),
    )
        .prop_map(|(add, m)| (add, m.to_string()))
}

proptest! {
    #[test]
    fn prop_lists_stay_disjoint_and_unique(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut config = KitConfig::new("./kit", "minimal");
        for (add, raw) in &ops {
            let m = module(raw);
            if *add {
                config.include_module(&m);
            } else {
                config.exclude_module(&m);
            }
        }

        for item in &config.include {
            prop_assert!(!config.exclude.contains(item));
            prop_assert_eq!(config.include.iter().filter(|m| *m == item).count(), 1);
        }
        for item in &config.exclude {
            prop_assert_eq!(config.exclude.iter().filter(|m| *m == item).count(), 1);
        }
    }
}
