//! `hostloc locate`: settings, registration argument and endpoint JSON.

use std::io::Write;

use hostloc_rs::cli::{run_locate, LocateArgs};
use hostloc_rs::{CoreError, SettingsLoader};

fn loader() -> SettingsLoader {
    SettingsLoader::new().without_env()
}

fn json(out: &str) -> serde_json::Value {
    serde_json::from_str(out).unwrap()
}

#[test]
fn prints_server_properties_endpoint() {
    let args = LocateArgs {
        overrides: vec!["application.name=orders".into(), "server.port=9411".into()],
        ..Default::default()
    };
    let out = run_locate(loader(), &args).unwrap();
    assert_eq!(
        json(&out),
        serde_json::json!({"serviceName": "orders", "ipv4": "127.0.0.1", "port": 9411})
    );
}

#[test]
fn prints_discovery_endpoint_when_enabled() {
    let args = LocateArgs {
        overrides: vec!["zipkin.locator.discovery.enabled=true".into()],
        registration: Some("billing@10.0.0.7:9100".into()),
        ..Default::default()
    };
    let out = run_locate(loader(), &args).unwrap();
    assert_eq!(
        json(&out),
        serde_json::json!({"serviceName": "billing", "ipv4": "10.0.0.7", "port": 9100})
    );
}

#[test]
fn registration_without_flag_keeps_server_properties() {
    let args = LocateArgs {
        registration: Some("billing@10.0.0.7:9100".into()),
        ..Default::default()
    };
    let out = run_locate(loader(), &args).unwrap();
    assert_eq!(json(&out)["serviceName"], "unknown");
}

#[test]
fn malformed_registration_is_an_error() {
    let args = LocateArgs {
        overrides: vec!["zipkin.locator.discovery.enabled=true".into()],
        registration: Some("billing-10.0.0.7".into()),
        ..Default::default()
    };
    let err = run_locate(loader(), &args).unwrap_err();
    assert!(matches!(err, CoreError::InvalidRegistration(ref raw) if raw == "billing-10.0.0.7"));
}

#[test]
fn reads_config_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(b"application:\n  name: 1234\nzipkin:\n  locator:\n    discovery:\n      enabled: true\n")
        .unwrap();
    let args = LocateArgs {
        config: Some(file.path().to_path_buf()),
        registration: Some("billing@10.0.0.7:9100".into()),
        ..Default::default()
    };
    let out = run_locate(loader(), &args).unwrap();
    assert_eq!(json(&out)["serviceName"], "billing");
}

#[test]
fn missing_config_file_is_an_error() {
    let args = LocateArgs {
        config: Some("/nonexistent/hostloc.yaml".into()),
        ..Default::default()
    };
    let err = run_locate(loader(), &args).unwrap_err();
    assert!(matches!(err, CoreError::MissingConfigFile(_)));
}
