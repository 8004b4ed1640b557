//! REST server for admissions knowledge base search
//!
//! This crate wires the search service to an HTTP listener. The router is
//! public so integration tests can drive it without binding a port.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod rest_server;

use std::sync::Arc;
use tracing::{info, warn};
use unisearch_api_service::SearchService;
use unisearch_core::config::Config;
use unisearch_core::Error;

pub use rest_server::{build_router, ApiError, AppState};
// Re-export error types from core
pub use unisearch_core::error::Result;

/// Run the REST server with the given configuration.
///
/// Creates the graph store client, probes it once (a failed probe is logged,
/// not fatal), then serves until Ctrl+C.
pub async fn run_server(config: Config) -> Result<()> {
    config.validate()?;

    let store = unisearch_store::create_graph_store(&config.graph_store)?;
    if !store.check_health().await {
        warn!(
            "Graph store at {} did not answer the health probe; searches will fail until it does",
            config.graph_store.endpoint
        );
    }

    let service = Arc::new(SearchService::new(store));
    let app = build_router(service, &config.server);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    info!("REST server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    info!("unisearch server shut down successfully");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
        Err(e) => tracing::error!("Error setting up signal handler: {e}"),
    }
}
