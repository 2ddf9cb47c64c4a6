use std::collections::HashMap;
use std::io::Write;

use webservice::config::{AppConfig, LogFormat, RunMode};
use webservice::storage::StorageBackendKind;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn defaults_are_production_like() {
    let config = AppConfig::load_from(None, HashMap::new()).expect("defaults should load");

    assert_eq!(config.mode, RunMode::Release);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9876);
    assert_eq!(config.bind_addr(), "0.0.0.0:9876");
    assert_eq!(config.storage.backend, StorageBackendKind::None);
    assert!(!config.health.check_store);
    assert!(!config.server.cors_permissive);
    assert_eq!(config.log_level(), "info");
    assert_eq!(config.log_format(), LogFormat::Json);
}

#[test]
fn prefixed_environment_overrides_nested_keys() {
    let config = AppConfig::load_from(
        None,
        vars(&[
            ("WEBSERVICE_MODE", "debug"),
            ("WEBSERVICE_SERVER__PORT", "8080"),
            ("WEBSERVICE_STORAGE__BACKEND", "memory"),
            ("WEBSERVICE_HEALTH__CHECK_STORE", "true"),
            ("UNRELATED", "value"),
        ]),
    )
    .expect("environment overrides should load");

    assert_eq!(config.mode, RunMode::Debug);
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.storage.backend, StorageBackendKind::Memory);
    assert!(config.health.check_store);
    assert_eq!(config.log_level(), "webservice=debug,tower_http=debug");
    assert_eq!(config.log_format(), LogFormat::Text);
}

#[test]
fn bare_port_wins_over_prefixed_port() {
    let config = AppConfig::load_from(
        None,
        vars(&[("WEBSERVICE_SERVER__PORT", "8080"), ("PORT", "7000")]),
    )
    .expect("PORT should load");

    assert_eq!(config.server.port, 7000);
}

#[test]
fn invalid_values_are_rejected() {
    for pairs in [
        vec![("PORT", "not-a-port")],
        vec![("WEBSERVICE_MODE", "staging")],
        vec![("WEBSERVICE_STORAGE__BACKEND", "mongodb")],
    ] {
        let result = AppConfig::load_from(None, vars(&pairs));
        assert!(result.is_err(), "expected {pairs:?} to be rejected");
    }
}

#[test]
fn file_values_are_overridden_by_environment() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        r#"
mode = "test"

[server]
host = "127.0.0.1"
port = 9000
cors_permissive = true

[logging]
level = "webservice=trace"
format = "json"
"#
    )
    .unwrap();

    let config = AppConfig::load_from(
        Some(file.path()),
        vars(&[("WEBSERVICE_SERVER__PORT", "9100")]),
    )
    .expect("file configuration should load");

    assert_eq!(config.mode, RunMode::Test);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9100);
    assert!(config.server.cors_permissive);
    assert_eq!(config.log_level(), "webservice=trace");
    assert_eq!(config.log_format(), LogFormat::Json);
}

#[test]
fn missing_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let config = AppConfig::load_from(Some(path.as_path()), HashMap::new())
        .expect("absent file should be skipped");

    assert_eq!(config.server.port, 9876);
}
