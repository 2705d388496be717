//! Unified error types for the API scaffold.
//!
//! Request-level failures never reach this type: malformed query strings,
//! paths and bodies are rejected by axum's extractors. Everything here is a
//! process-level failure raised while starting or running the server.

use thiserror::Error;

/// Unified error type for the API scaffold.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bind address could not be parsed.
    #[error("invalid bind address: {0}")]
    Addr(#[from] std::net::AddrParseError),

    /// Prometheus recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_is_prefixed() {
        let err = ScaffoldError::InvalidConfig("PORT must be non-zero".to_string());
        assert_eq!(err.to_string(), "invalid configuration: PORT must be non-zero");
    }

    #[test]
    fn addr_parse_error_converts() {
        let parse: std::result::Result<std::net::IpAddr, _> = "not-an-ip".parse();
        let err: ScaffoldError = parse.unwrap_err().into();
        assert!(matches!(err, ScaffoldError::Addr(_)));
    }
}
