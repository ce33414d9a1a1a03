//! Configuration loading tests: embedding the shared tables in an
//! application config, defaults, and error mapping.

use fails_common::config::{ConfigError, ConfigLoader, LogLevel, SharedConfig, StoreConfig};
use fails_common::consts::DEFAULT_MESSAGE_CAPACITY;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize)]
struct AppConfig {
    shared: SharedConfig,
    #[serde(default)]
    store: StoreConfig,
    port: u16,
}

/// Test: shared and store tables are picked up next to application keys.
#[test]
fn load_embedded_tables() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("run.toml");
    fs::write(
        &path,
        r#"
port = 8080

[shared]
log_level = "warn"
service_name = "final-round"

[store]
initial_capacity = 4096
"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).expect("should load");
    assert_eq!(config.port, 8080);
    assert_eq!(config.shared.log_level, LogLevel::Warn);
    assert_eq!(config.store.initial_capacity, 4096);
    assert!(config.shared.validate().is_ok());
}

/// Test: omitted optional tables fall back to defaults.
#[test]
fn defaults_apply() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("run.toml");
    fs::write(&path, "port = 1\n[shared]\nservice_name = \"x\"\n").unwrap();

    let config = AppConfig::load(&path).unwrap();
    assert_eq!(config.shared.log_level, LogLevel::Info);
    assert_eq!(config.store, StoreConfig::default());
    assert_eq!(config.store.initial_capacity, DEFAULT_MESSAGE_CAPACITY);
}

/// Test: missing required key maps to a parse error.
#[test]
fn missing_service_name_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("run.toml");
    fs::write(&path, "port = 1\n[shared]\nlog_level = \"info\"\n").unwrap();

    assert!(matches!(
        AppConfig::load(&path),
        Err(ConfigError::ParseError(_))
    ));
}

/// Test: the not-found error names the path.
#[test]
fn not_found_names_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.toml");

    match AppConfig::load(&path) {
        Err(ConfigError::FileNotFound(p)) => assert!(p.ends_with("absent.toml")),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

/// Test: empty service name passes parsing but fails validation.
#[test]
fn empty_service_name_fails_validation() {
    let config = AppConfig::parse("port = 1\n[shared]\nservice_name = \"\"\n").unwrap();
    let err = config.shared.validate().unwrap_err();
    assert!(err.to_string().contains("service_name"));
}
