//! SPARQL protocol client for a remote graph store

use crate::error::ExecutorError;
use crate::results::{parse_sparql_results, BindingRowSet, SPARQL_RESULTS_JSON};
use crate::GraphStore;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use unisearch_core::config::GraphStoreConfig;
use unisearch_core::error::{Error, Result};
use unisearch_query::CompiledQuery;

const HEALTH_QUERY: &str = "ASK { ?s ?p ?o }";
const MAX_BACKOFF: Duration = Duration::from_secs(5);
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Graph store reached over HTTP GET with the query as a `query` parameter
pub struct HttpGraphStore {
    client: Client,
    endpoint: String,
    retry_attempts: usize,
    retry_backoff: Duration,
}

impl HttpGraphStore {
    /// Create a new client for the configured endpoint
    pub fn new(config: &GraphStoreConfig) -> Result<Self> {
        info!("Initializing graph store client");
        info!("  Endpoint: {}", config.endpoint);
        info!("  Timeout: {}s", config.timeout_secs);
        info!("  Retry attempts: {}", config.retry_attempts);

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::graph_store(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            retry_attempts: config.retry_attempts,
            retry_backoff: config.retry_backoff(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send_once(&self, query: &str) -> std::result::Result<BindingRowSet, ExecutorError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", query)])
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .send()
            .await
            .map_err(|e| ExecutorError::transport(format!("request failed: {e}"), None))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            let error_text: String = error_text.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(ExecutorError::transport(
                format!("graph store returned {status}: {error_text}"),
                Some(status.as_u16()),
            ));
        }

        let body = response.bytes().await.map_err(|e| {
            ExecutorError::transport(format!("failed to read response body: {e}"), None)
        })?;

        parse_sparql_results(&body)
    }
}

/// Exponential backoff for the given 1-based attempt, capped at [`MAX_BACKOFF`]
fn backoff_for(base: Duration, attempt: usize) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16) as u32;
    base.saturating_mul(1u32 << exponent).min(MAX_BACKOFF)
}

#[async_trait]
impl GraphStore for HttpGraphStore {
    async fn select(
        &self,
        query: &CompiledQuery,
    ) -> std::result::Result<BindingRowSet, ExecutorError> {
        debug!("Sending {} query to {}", query.mode(), self.endpoint);

        let mut attempt = 0;
        loop {
            match self.send_once(query.text()).await {
                Ok(rows) => {
                    debug!("Graph store returned {} rows", rows.len());
                    return Ok(rows);
                }
                Err(e) if e.is_transient() && attempt < self.retry_attempts => {
                    attempt += 1;
                    let backoff = backoff_for(self.retry_backoff, attempt);
                    warn!(
                        "Graph store request failed: {e}. Retrying in {backoff:?} \
                         (attempt {attempt}/{})",
                        self.retry_attempts
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn check_health(&self) -> bool {
        debug!("Checking graph store health");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", HEALTH_QUERY)])
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                info!("Graph store health check passed");
                true
            }
            Ok(response) => {
                warn!(
                    "Graph store health check failed with status: {}",
                    response.status()
                );
                warn!("  The graph store may not be running or the repository may not exist.");
                false
            }
            Err(e) => {
                warn!("Graph store health check failed: {e}");
                warn!("  Searches will fail until {} is reachable.", self.endpoint);
                false
            }
        }
    }
}
