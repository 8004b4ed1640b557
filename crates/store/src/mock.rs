//! Mock graph store for testing

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use crate::error::ExecutorError;
use crate::results::{BindingRow, BindingRowSet};
use crate::GraphStore;
use async_trait::async_trait;
use std::sync::Mutex;
use unisearch_query::CompiledQuery;

#[derive(Debug, Clone)]
enum MockResponse {
    Rows(BindingRowSet),
    Error(ExecutorError),
}

/// In-memory graph store answering every query with a canned response
///
/// Every received query text is recorded, so tests can assert both what was
/// sent and that nothing was sent at all.
pub struct MockGraphStore {
    response: Mutex<MockResponse>,
    queries: Mutex<Vec<String>>,
    healthy: bool,
}

impl MockGraphStore {
    /// A store that returns no rows
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// A store that returns `rows` for every query
    pub fn with_rows(rows: Vec<BindingRow>) -> Self {
        Self {
            response: Mutex::new(MockResponse::Rows(rows)),
            queries: Mutex::new(Vec::new()),
            healthy: true,
        }
    }

    /// A store that fails every query with `error`
    pub fn with_error(error: ExecutorError) -> Self {
        Self {
            response: Mutex::new(MockResponse::Error(error)),
            queries: Mutex::new(Vec::new()),
            healthy: false,
        }
    }

    /// Replace the canned rows
    pub fn set_rows(&self, rows: Vec<BindingRow>) {
        *self.response.lock().unwrap() = MockResponse::Rows(rows);
    }

    /// Query texts received so far, oldest first
    pub fn received_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

impl Default for MockGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphStore for MockGraphStore {
    async fn select(&self, query: &CompiledQuery) -> Result<BindingRowSet, ExecutorError> {
        self.queries.lock().unwrap().push(query.text().to_string());

        match &*self.response.lock().unwrap() {
            MockResponse::Rows(rows) => Ok(rows.clone()),
            MockResponse::Error(err) => Err(err.clone()),
        }
    }

    async fn check_health(&self) -> bool {
        self.healthy
    }
}
