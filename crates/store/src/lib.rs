//! Graph store access for compiled queries
//!
//! This crate executes compiled SPARQL queries against the remote graph store
//! over the SPARQL protocol and returns the raw binding rows. It holds no state
//! between queries.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use async_trait::async_trait;
use std::sync::Arc;
use unisearch_core::config::GraphStoreConfig;
use unisearch_core::error::Result;
use unisearch_query::CompiledQuery;

pub mod error;
mod http;
mod mock;
pub mod results;

pub use error::{ExecutorError, ExecutorErrorKind};
pub use http::HttpGraphStore;
pub use mock::MockGraphStore;
pub use results::{parse_sparql_results, BindingRow, BindingRowSet, BindingValue};

/// Trait for graph stores that can answer SELECT queries
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Execute a compiled query and return its binding rows
    ///
    /// One outbound request per attempt; only transient transport failures
    /// are retried.
    async fn select(
        &self,
        query: &CompiledQuery,
    ) -> std::result::Result<BindingRowSet, ExecutorError>;

    /// Whether the store currently answers queries (non-fatal probe)
    async fn check_health(&self) -> bool;
}

/// Create the graph store client for the configured endpoint
pub fn create_graph_store(config: &GraphStoreConfig) -> Result<Arc<dyn GraphStore>> {
    let store = HttpGraphStore::new(config)?;
    Ok(Arc::new(store))
}
