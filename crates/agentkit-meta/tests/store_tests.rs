//! Tests for preset lookup and catalog listing

use agentkit_fs::NormalizedPath;
use agentkit_meta::{Error, PresetStore};
use agentkit_test_utils::TestRegistry;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod locate_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_locate_at_root_with_prefixed_id() {
        let registry = TestRegistry::new().preset("presets/minimal.json", "minimal", &["skills/a"]);

        let preset = PresetStore::new(registry.root()).locate("presets/minimal").unwrap();

        assert_eq!(preset.name, "minimal");
        assert_eq!(preset.modules, vec!["skills/a"]);
    }

    #[test]
    fn test_locate_accepts_explicit_json_suffix() {
        let registry = TestRegistry::new().preset("presets/minimal.json", "minimal", &[]);

        let preset = PresetStore::new(registry.root())
            .locate("presets/minimal.json")
            .unwrap();

        assert_eq!(preset.name, "minimal");
    }

    #[test]
    fn test_locate_in_kit_subdirectory() {
        let registry = TestRegistry::new().preset(
            "nguyencoder-kit/presets/backend-full.json",
            "backend-full",
            &["skills/api"],
        );

        let preset = PresetStore::new(registry.root())
            .locate("presets/backend-full")
            .unwrap();

        assert_eq!(preset.modules, vec!["skills/api"]);
    }

    #[test]
    fn test_locate_shorthand_in_kit_presets_dir() {
        let registry =
            TestRegistry::new().preset("nguyencoder-kit/presets/minimal.json", "minimal", &[]);

        let preset = PresetStore::new(registry.root()).locate("minimal").unwrap();

        assert_eq!(preset.name, "minimal");
    }

    #[test]
    fn test_root_layout_wins_over_kit_subdirectory() {
        let registry = TestRegistry::new()
            .preset("presets/minimal.json", "from-root", &[])
            .preset("nguyencoder-kit/presets/minimal.json", "from-kit", &[]);

        let preset = PresetStore::new(registry.root()).locate("presets/minimal").unwrap();

        assert_eq!(preset.name, "from-root");
    }

    #[test]
    fn test_missing_preset_is_not_found() {
        let registry = TestRegistry::new().dir("presets");

        let err = PresetStore::new(registry.root()).locate("ghost").unwrap_err();

        assert!(matches!(err, Error::PresetNotFound { ref id } if id == "ghost"));
        assert_eq!(err.to_string(), "Preset \"ghost\" not found");
    }

    #[test]
    fn test_invalid_preset_reports_path() {
        let registry = TestRegistry::new().file("presets/broken.json", "{ nope");

        let err = PresetStore::new(registry.root())
            .locate("presets/broken")
            .unwrap_err();

        assert!(matches!(err, Error::InvalidPreset { .. }));
    }

    #[test]
    fn test_directory_named_like_preset_is_skipped() {
        let registry = TestRegistry::new()
            .dir("minimal.json")
            .preset("nguyencoder-kit/minimal.json", "real", &[]);

        let preset = PresetStore::new(registry.root()).locate("minimal").unwrap();

        assert_eq!(preset.name, "real");
    }
}

mod candidate_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case(
        "minimal",
        &["/kit/minimal.json", "/kit/nguyencoder-kit/minimal.json", "/kit/nguyencoder-kit/presets/minimal.json"]
    )]
    #[case(
        "presets/minimal",
        &["/kit/presets/minimal.json", "/kit/nguyencoder-kit/presets/minimal.json"]
    )]
    #[case(
        "web-full.json",
        &["/kit/web-full.json", "/kit/nguyencoder-kit/web-full.json", "/kit/nguyencoder-kit/presets/web-full.json"]
    )]
    fn test_candidate_order(#[case] id: &str, #[case] expected: &[&str]) {
        let store = PresetStore::new(NormalizedPath::new("/kit"));
        let candidates: Vec<String> = store
            .candidates(id)
            .into_iter()
            .map(|p| p.as_str().to_string())
            .collect();

        assert_eq!(candidates, expected);
    }
}

mod list_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_sorted_with_counts() {
        let registry = TestRegistry::standard_kit();

        let summaries = PresetStore::new(registry.root()).list().unwrap();

        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["minimal", "web-full"]);
        assert_eq!(summaries[0].module_count, 2);
        assert_eq!(summaries[0].description_or_default(), "Smallest useful kit");
        assert_eq!(summaries[1].module_count, 7);
    }

    #[test]
    fn test_list_from_kit_subdirectory() {
        let registry = TestRegistry::new()
            .preset("nguyencoder-kit/presets/solo.json", "solo", &["skills/a"]);

        let summaries = PresetStore::new(registry.root()).list().unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "solo");
        assert_eq!(summaries[0].description_or_default(), "No description");
    }

    #[test]
    fn test_list_skips_unparseable_and_non_json_files() {
        let registry = TestRegistry::new()
            .preset("presets/good.json", "good", &[])
            .file("presets/bad.json", "not json")
            .file("presets/README.md", "# Presets");

        let summaries = PresetStore::new(registry.root()).list().unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "good");
    }

    #[test]
    fn test_list_without_presets_dir_fails() {
        let registry = TestRegistry::new().dir("registry");

        let err = PresetStore::new(registry.root()).list().unwrap_err();

        assert!(matches!(err, Error::PresetsDirNotFound { .. }));
        assert!(err.to_string().contains("No presets folder found"));
    }
}
