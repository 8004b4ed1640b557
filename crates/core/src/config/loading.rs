//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{
    Config as ConfigLib, ConfigBuilder as LibConfigBuilder, Environment, File, FileFormat,
};
use std::path::Path;
use tracing::debug;

use super::defaults::*;
use super::{global_config_path, Config};

/// Helper to set a config default with consistent error mapping
fn set_config_default<T: Into<config::Value>>(
    builder: LibConfigBuilder<config::builder::DefaultState>,
    key: &str,
    value: T,
) -> Result<LibConfigBuilder<config::builder::DefaultState>> {
    builder
        .set_default(key, value)
        .map_err(|e| Error::config(format!("Failed to set {key} default: {e}")))
}

impl Config {
    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// Environment variables are prefixed with `UNISEARCH_` and use double underscores
    /// for nested values. For example:
    /// - `UNISEARCH_GRAPH_STORE__ENDPOINT=http://graphdb:7200/repositories/education`
    ///
    /// The deployment variables `GRAPHDB_ENDPOINT` and `PORT` are honoured last.
    pub fn from_file(path: &Path) -> Result<Self> {
        let builder = ConfigLib::builder();

        let builder = set_config_default(builder, "graph_store.endpoint", default_endpoint())?;
        let builder = set_config_default(
            builder,
            "graph_store.timeout_secs",
            default_timeout_secs() as i64,
        )?;
        let builder = set_config_default(
            builder,
            "graph_store.retry_attempts",
            default_retry_attempts() as i64,
        )?;
        let builder = set_config_default(
            builder,
            "graph_store.retry_backoff_ms",
            default_retry_backoff_ms() as i64,
        )?;
        let builder = set_config_default(builder, "server.host", default_server_host())?;
        let mut builder =
            set_config_default(builder, "server.port", default_server_port() as i64)?;

        // Add the config file if it exists
        if path.exists() {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        } else {
            debug!("No config file at {}, using defaults", path.display());
        }

        // Add environment variables with UNISEARCH_ prefix
        builder = builder.add_source(
            Environment::with_prefix("UNISEARCH")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(endpoint) = std::env::var("GRAPHDB_ENDPOINT") {
            builder = builder
                .set_override("graph_store.endpoint", endpoint)
                .map_err(|e| Error::config(format!("Failed to set GRAPHDB_ENDPOINT: {e}")))?;
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder
                    .set_override("server.port", port_num)
                    .map_err(|e| Error::config(format!("Failed to set PORT: {e}")))?;
            }
        }

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))
    }

    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration
    ///
    /// Precedence (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file (~/.unisearch/config.toml or custom --config path)
    /// 3. Environment variables (UNISEARCH_*, then GRAPHDB_ENDPOINT and PORT)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => global_config_path()?,
        };
        Self::from_file(&path)
    }
}
