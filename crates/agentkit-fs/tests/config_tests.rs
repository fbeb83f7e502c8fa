use agentkit_fs::{ConfigStore, NormalizedPath};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct TestConfig {
    name: String,
    count: i32,
}

#[test]
fn test_load_json() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.json");
    fs::write(&file_path, r#"{"name": "test", "count": 42}"#).unwrap();

    let store = ConfigStore::new();
    let config: TestConfig = store.load(&NormalizedPath::new(&file_path)).unwrap();

    assert_eq!(config, TestConfig { name: "test".into(), count: 42 });
}

#[test]
fn test_save_json_uses_two_space_indent() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.json");

    let config = TestConfig { name: "test".into(), count: 42 };
    ConfigStore::new()
        .save(&NormalizedPath::new(&file_path), &config)
        .unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "{\n  \"name\": \"test\",\n  \"count\": 42\n}");
}

#[test]
fn test_load_invalid_json_reports_path() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("broken.json");
    fs::write(&file_path, "{ not json").unwrap();

    let result: agentkit_fs::Result<TestConfig> =
        ConfigStore::new().load(&NormalizedPath::new(&file_path));

    match result {
        Err(agentkit_fs::Error::ConfigParse { path, format, .. }) => {
            assert_eq!(path, NormalizedPath::new(&file_path).to_native());
            assert_eq!(format, "JSON");
        }
        other => panic!("expected ConfigParse, got {:?}", other),
    }
}

#[test]
fn test_unsupported_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.toml");
    fs::write(&file_path, "name = \"x\"").unwrap();

    let result: agentkit_fs::Result<TestConfig> =
        ConfigStore::new().load(&NormalizedPath::new(&file_path));

    assert!(matches!(
        result,
        Err(agentkit_fs::Error::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_roundtrip_json() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("config.json"));

    let original = TestConfig { name: "roundtrip".into(), count: 123 };
    let store = ConfigStore::new();

    store.save(&path, &original).unwrap();
    let loaded: TestConfig = store.load(&path).unwrap();

    assert_eq!(original, loaded);
}
