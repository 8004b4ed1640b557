//! Default values and functions for configuration

// Default constants
pub(crate) const DEFAULT_ENDPOINT: &str = "http://localhost:7200/repositories/education";
pub(crate) const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub(crate) const MAX_RETRY_ATTEMPTS: usize = 10;

pub(crate) fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

pub(crate) fn default_timeout_secs() -> u64 {
    10
}

pub(crate) fn default_retry_attempts() -> usize {
    2
}

pub(crate) fn default_retry_backoff_ms() -> u64 {
    200
}

pub(crate) fn default_server_host() -> String {
    DEFAULT_SERVER_HOST.to_string()
}

pub(crate) fn default_server_port() -> u16 {
    3001
}

pub(crate) fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}
