//! Tests for configuration module

use super::*;
use crate::error::{Error, Result};
use std::io::Write;
use tempfile::NamedTempFile;

fn create_temp_config_file(content: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .map_err(|e| Error::config(format!("Failed to create temp file: {e}")))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::config(format!("Failed to write temp file: {e}")))?;
    file.flush()
        .map_err(|e| Error::config(format!("Failed to flush temp file: {e}")))?;
    Ok(file)
}

fn with_env_var<F, T>(key: &str, value: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    std::env::set_var(key, value);
    let result = f();
    std::env::remove_var(key);
    result
}

#[test]
fn test_from_toml_str_valid() {
    let toml = r#"
        [graph_store]
        endpoint = "http://graphdb:7200/repositories/education"
        timeout_secs = 5
        retry_attempts = 0

        [server]
        port = 8080
        allowed_origins = ["http://localhost:3000"]
    "#;

    let config = Config::from_toml_str(toml).expect("Failed to parse valid TOML");
    assert_eq!(
        config.graph_store.endpoint,
        "http://graphdb:7200/repositories/education"
    );
    assert_eq!(config.graph_store.timeout_secs, 5);
    assert_eq!(config.graph_store.retry_attempts, 0);
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.allowed_origins, vec!["http://localhost:3000"]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_toml_str_minimal() {
    let config = Config::from_toml_str("").expect("Failed to parse minimal TOML");

    // Check defaults are applied
    assert_eq!(
        config.graph_store.endpoint,
        "http://localhost:7200/repositories/education"
    );
    assert_eq!(config.graph_store.timeout_secs, 10);
    assert_eq!(config.graph_store.retry_attempts, 2);
    assert_eq!(config.graph_store.retry_backoff_ms, 200);
    assert_eq!(config.server.bind_address(), "127.0.0.1:3001");
    assert_eq!(config.server.allowed_origins, vec!["*"]);
}

#[test]
fn test_from_toml_str_invalid_syntax() {
    let toml = r#"
        [graph_store
        endpoint = "http://localhost"
    "#;

    let result = Config::from_toml_str(toml);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to parse TOML"));
}

#[test]
fn test_validate_rejects_non_http_endpoint() {
    for endpoint in ["localhost:7200", "ftp://graphdb/sparql", "http://", "https:///x"] {
        let mut config = Config::default();
        config.graph_store.endpoint = endpoint.to_string();
        assert!(config.validate().is_err(), "endpoint {endpoint:?} accepted");
    }
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.graph_store.timeout_secs = 0;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("timeout_secs"));
}

#[test]
fn test_validate_rejects_excessive_retries() {
    let mut config = Config::default();
    config.graph_store.retry_attempts = 11;
    assert!(config.validate().is_err());

    config.graph_store.retry_attempts = 10;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.port = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_from_file_reads_values() -> Result<()> {
    let file = create_temp_config_file(
        r#"
        [graph_store]
        timeout_secs = 3
        retry_backoff_ms = 50

        [server]
        host = "0.0.0.0"
    "#,
    )?;

    let config = Config::from_file(file.path())?;
    assert_eq!(config.graph_store.timeout_secs, 3);
    assert_eq!(config.graph_store.retry_backoff_ms, 50);
    assert_eq!(config.graph_store.retry_attempts, 2);
    assert_eq!(config.server.host, "0.0.0.0");
    Ok(())
}

#[test]
fn test_from_file_missing_file_uses_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = Config::from_file(&dir.path().join("absent.toml"))?;

    assert_eq!(config.graph_store.timeout_secs, 10);
    assert_eq!(config.server.allowed_origins, vec!["*"]);
    Ok(())
}

#[test]
fn test_graphdb_endpoint_env_overrides_file() -> Result<()> {
    let file = create_temp_config_file(
        r#"
        [graph_store]
        endpoint = "http://from-file:7200/repositories/education"
    "#,
    )?;

    let config = with_env_var(
        "GRAPHDB_ENDPOINT",
        "http://from-env:7200/repositories/education",
        || Config::from_file(file.path()),
    )?;
    assert_eq!(
        config.graph_store.endpoint,
        "http://from-env:7200/repositories/education"
    );
    Ok(())
}

#[test]
fn test_duration_helpers() {
    let config = GraphStoreConfig {
        timeout_secs: 7,
        retry_backoff_ms: 250,
        ..GraphStoreConfig::default()
    };
    assert_eq!(config.timeout(), Duration::from_secs(7));
    assert_eq!(config.retry_backoff(), Duration::from_millis(250));
}
