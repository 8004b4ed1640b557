//! Error types for graph store execution

use thiserror::Error;

/// Which layer a query execution failed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorErrorKind {
    /// Network failure or non-success HTTP status
    Transport,
    /// The store answered, but not with a usable result document
    Protocol,
}

/// Errors that can occur while executing a query against the graph store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutorError {
    #[error("Graph store transport error: {message}")]
    Transport {
        message: String,
        /// HTTP status, when the store answered at all
        status: Option<u16>,
    },

    #[error("Graph store protocol error: {message}")]
    Protocol { message: String },
}

impl ExecutorError {
    pub fn transport(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Transport {
            message: message.into(),
            status,
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ExecutorErrorKind {
        match self {
            Self::Transport { .. } => ExecutorErrorKind::Transport,
            Self::Protocol { .. } => ExecutorErrorKind::Protocol,
        }
    }

    /// Whether another attempt could plausibly succeed
    ///
    /// Connection failures, timeouts, 5xx and 429 are transient. Protocol
    /// errors and other 4xx responses are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { status: None, .. } => true,
            Self::Transport {
                status: Some(status),
                ..
            } => *status >= 500 || *status == 429,
            Self::Protocol { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(ExecutorError::transport("connection refused", None).is_transient());
        assert!(ExecutorError::transport("bad gateway", Some(502)).is_transient());
        assert!(ExecutorError::transport("slow down", Some(429)).is_transient());
        assert!(!ExecutorError::transport("bad query", Some(400)).is_transient());
        assert!(!ExecutorError::transport("not found", Some(404)).is_transient());
        assert!(!ExecutorError::protocol("no bindings").is_transient());
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            ExecutorError::transport("x", Some(500)).kind(),
            ExecutorErrorKind::Transport
        );
        assert_eq!(ExecutorError::protocol("x").kind(), ExecutorErrorKind::Protocol);
    }
}
