use std::fs;
use std::path::PathBuf;

use lung_triage::config::Config;
use lung_triage::model::{DEFAULT_MODEL_PATH, ModelVariant};
use tempfile::TempDir;

#[test]
fn defaults_without_file() {
    let config = Config::load(None).unwrap();
    assert_eq!(config.risk.moderate, 1);
    assert_eq!(config.risk.high, 3);
    assert_eq!(config.model.path, PathBuf::from(DEFAULT_MODEL_PATH));
    assert!(config.model.url.is_none());
    assert_eq!(config.model.variant, ModelVariant::Xception5);
}

#[test]
fn partial_file_keeps_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("triage.json");
    fs::write(
        &path,
        r#"{ "model": { "variant": "staging4", "url": "https://example.org/m.onnx" } }"#,
    )
    .unwrap();
    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.model.variant, ModelVariant::Staging4);
    assert_eq!(config.model.url.as_deref(), Some("https://example.org/m.onnx"));
    assert_eq!(config.model.path, PathBuf::from(DEFAULT_MODEL_PATH));
    assert_eq!(config.risk.high, 3);
}

#[test]
fn invalid_thresholds_fail_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("triage.json");
    fs::write(&path, r#"{ "risk": { "moderate": 4, "high": 2 } }"#).unwrap();
    let err = Config::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("risk.high"));
}

#[test]
fn malformed_file_fails_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("triage.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(Config::load(Some(&path)).is_err());
}
