//! Settings layering: YAML file, environment, explicit overrides.

use std::io::Write;

use hostloc_core::{CoreError, SettingsLoader};

fn yaml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn reads_yaml_file() {
    let file = yaml(
        "server:\n  address: 10.1.2.3\n  port: 9000\napplication:\n  name: orders\nzipkin:\n  locator:\n    discovery:\n      enabled: true\n",
    );
    let settings = SettingsLoader::new().without_env().file(file.path()).load().unwrap();
    assert!(settings.discovery_enabled());
    assert_eq!(settings.server.address.as_deref(), Some("10.1.2.3"));
    assert_eq!(settings.server.port, Some(9000));
    assert_eq!(settings.application.name.as_deref(), Some("orders"));
}

#[test]
fn overrides_win_over_file() {
    let file = yaml("zipkin:\n  locator:\n    discovery:\n      enabled: true\n");
    let settings = SettingsLoader::new()
        .without_env()
        .file(file.path())
        .set_arg("zipkin.locator.discovery.enabled=false")
        .unwrap()
        .load()
        .unwrap();
    assert!(!settings.discovery_enabled());
}

#[test]
fn environment_wins_over_file() {
    let file = yaml("server:\n  port: 9000\n");
    std::env::set_var("HOSTLOC_SETTINGS_FILE_TEST_SERVER__PORT", "9500");
    std::env::set_var("HOSTLOC_SETTINGS_FILE_TEST_ZIPKIN__SERVICE__NAME", "orders-api");
    let settings = SettingsLoader::new()
        .env_prefix("HOSTLOC_SETTINGS_FILE_TEST_")
        .file(file.path())
        .load()
        .unwrap();
    assert_eq!(settings.server.port, Some(9500));
    assert_eq!(settings.service_name_override(), Some("orders-api"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hostloc.yaml");
    let err = SettingsLoader::new().without_env().file(&path).load().unwrap_err();
    match err {
        CoreError::MissingConfigFile(p) => assert_eq!(p, path),
        other => panic!("expected MissingConfigFile, got {:?}", other),
    }
}

#[test]
fn numeric_yaml_values_fit_string_keys() {
    let file = yaml("application:\n  name: 1234\nserver:\n  address: 10\n");
    let settings = SettingsLoader::new().without_env().file(file.path()).load().unwrap();
    assert_eq!(settings.application.name.as_deref(), Some("1234"));
    assert_eq!(settings.server.address.as_deref(), Some("10"));
}
