//! Search failures and how they are presented to callers

use crate::mapper::MappingError;
use thiserror::Error;
use unisearch_core::{SearchMode, ValidationError};
use unisearch_store::ExecutorError;

/// Who is at fault for a failed search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Bad criteria; the caller can fix the request
    Client,
    /// Store or data problem; nothing the caller can do
    Server,
}

/// A search that terminated before producing records
#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Query execution failed: {0}")]
    Executor(#[from] ExecutorError),

    #[error("Result mapping failed: {0}")]
    Mapping(#[from] MappingError),
}

impl SearchError {
    pub fn fault(&self) -> Fault {
        match self {
            Self::Validation(_) => Fault::Client,
            Self::Executor(_) | Self::Mapping(_) => Fault::Server,
        }
    }

    /// Message safe to return across the service boundary
    ///
    /// Validation messages are returned verbatim; server faults collapse to a
    /// generic per-mode message so query text and store details stay in logs.
    pub fn public_message(&self, mode: SearchMode) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Executor(_) | Self::Mapping(_) => failure_message(mode).to_string(),
        }
    }
}

/// Generic server-fault message for a search mode
pub fn failure_message(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::University => "Failed to search for universities.",
        SearchMode::Course => "Failed to search for courses.",
    }
}
