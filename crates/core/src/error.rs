use thiserror::Error;

/// Result type for unisearch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for unisearch operations
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failures, e.g. reading the config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph store client could not be set up
    #[error("Graph store error: {0}")]
    GraphStore(String),

    /// An underlying error wrapped with what was being attempted
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn graph_store(msg: impl Into<String>) -> Self {
        Self::GraphStore(msg.into())
    }

    /// Wrap `source` with a description of the failed operation
    pub fn with_context<E>(context: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

/// `context` for any `Result` whose error is a std error
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::with_context(context, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wraps_source_error() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "config.toml",
        ));

        let err = io.context("Failed to read config").unwrap_err();
        assert_eq!(err.to_string(), "Failed to read config: config.toml");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_helper_constructors() {
        assert_eq!(
            Error::config("bad port").to_string(),
            "Configuration error: bad port"
        );
        assert_eq!(
            Error::graph_store("unreachable").to_string(),
            "Graph store error: unreachable"
        );
    }
}
