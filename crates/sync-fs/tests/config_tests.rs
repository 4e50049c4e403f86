use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::fs;
use sync_fs::{ConfigStore, Error};
use tempfile::TempDir;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
struct TestConfig {
    name: String,
    count: i32,
}

#[test]
fn test_load_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.json");
    fs::write(&path, r#"{"name": "test", "count": 42}"#).unwrap();

    let config: TestConfig = ConfigStore::new().load(&path).unwrap();

    assert_eq!(
        config,
        TestConfig {
            name: "test".into(),
            count: 42
        }
    );
}

#[test]
fn test_save_is_pretty_with_trailing_newline() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.json");
    let config = TestConfig {
        name: "test".into(),
        count: 1,
    };

    ConfigStore::new().save(&path, &config).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "{\n  \"name\": \"test\",\n  \"count\": 1\n}\n");
}

#[test]
fn test_load_malformed_json_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let result: Result<TestConfig, _> = ConfigStore::new().load(&path);

    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}

#[test]
fn test_load_or_default_missing_file() {
    let temp = TempDir::new().unwrap();
    let config: TestConfig = ConfigStore::new()
        .load_or_default(&temp.path().join("absent.json"))
        .unwrap();
    assert_eq!(config, TestConfig::default());
}

#[test]
fn test_load_or_default_still_rejects_malformed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.json");
    fs::write(&path, "[").unwrap();

    let result: Result<TestConfig, _> = ConfigStore::new().load_or_default(&path);
    assert!(result.is_err());
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    let result = ConfigStore::new().save(&path, &TestConfig::default());

    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
    assert!(!path.exists());
}
