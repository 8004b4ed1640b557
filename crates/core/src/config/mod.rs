//! Configuration module for the unisearch system
//!
//! This module provides configuration structures and loading mechanisms for the
//! unisearch system. Configuration can be loaded from TOML files and/or environment
//! variables.

mod defaults;
mod loading;

#[cfg(test)]
mod tests;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use defaults::*;

/// Returns the path to the global configuration file
///
/// The global config is stored at `~/.unisearch/config.toml`.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".unisearch").join("config.toml"))
}

/// Main configuration structure for the unisearch system
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Graph store (SPARQL endpoint) configuration
    #[serde(default)]
    pub graph_store: GraphStoreConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Configuration for the remote graph store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStoreConfig {
    /// SPARQL query endpoint, e.g. a GraphDB repository URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-attempt request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra attempts after a transient transport failure (0 disables retry)
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: usize,

    /// Initial backoff between attempts; doubles each attempt
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl Default for GraphStoreConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            retry_attempts: default_retry_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl GraphStoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

/// Configuration for REST API server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_server_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = disabled, ["*"] = all origins)
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.graph_store.endpoint.trim();
        let rest = endpoint
            .strip_prefix("http://")
            .or_else(|| endpoint.strip_prefix("https://"))
            .ok_or_else(|| {
                Error::config(format!(
                    "graph_store.endpoint must be an http(s) URL, got '{endpoint}'"
                ))
            })?;
        if rest.is_empty() || rest.starts_with('/') {
            return Err(Error::config(format!(
                "graph_store.endpoint has no host: '{endpoint}'"
            )));
        }

        if self.graph_store.timeout_secs == 0 {
            return Err(Error::config(
                "graph_store.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.graph_store.retry_attempts > MAX_RETRY_ATTEMPTS {
            return Err(Error::config(format!(
                "graph_store.retry_attempts too large (max {MAX_RETRY_ATTEMPTS}, got {})",
                self.graph_store.retry_attempts
            )));
        }

        if self.server.port == 0 {
            return Err(Error::config(
                "server.port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
