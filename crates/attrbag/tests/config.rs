use std::fs;

use attrbag::{AttributeStore, BagConfig, KeyMode, OptionSet};

#[test]
fn test_load_defaults_without_file() {
    let config = BagConfig::load(None).unwrap();
    assert_eq!(config, BagConfig::default());
}

#[test]
fn test_load_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attrbag.toml");
    fs::write(&path, "normalize = true\nstrict = false\n").unwrap();

    let config = BagConfig::load(Some(path.as_path())).unwrap();
    assert!(config.normalize);
    assert!(!config.strict);
    assert_eq!(config.key_mode(), KeyMode::Normalized);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attrbag.toml");
    fs::write(&path, "normalize = true\n").unwrap();

    let config = BagConfig::load(Some(path.as_path())).unwrap();
    assert!(config.normalize);
    assert!(config.strict);
}

#[test]
fn test_invalid_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attrbag.toml");
    fs::write(&path, "normalize = \"sometimes\"\n").unwrap();

    let err = BagConfig::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, attrbag::Error::Config(_)));
}

#[test]
fn test_config_serializes_to_toml() {
    let rendered = toml::to_string(&BagConfig::normalized()).unwrap();
    let parsed: BagConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, BagConfig::normalized());
}

#[test]
fn test_containers_follow_config() {
    let config = BagConfig {
        normalize: true,
        strict: false,
    };
    let store: AttributeStore<u8> = AttributeStore::with_config(&config);
    assert_eq!(store.key_mode(), KeyMode::Normalized);
    assert!(!store.is_strict());

    let options = OptionSet::with_config(&config);
    assert_eq!(options.key_mode(), KeyMode::Normalized);
}
