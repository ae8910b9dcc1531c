//! Error types for toolroute
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while routing a query
#[derive(Debug, Error)]
pub enum RouterError {
    /// Completion endpoint unreachable, rejected the request, or sent a malformed payload
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The model answered without selecting any tool
    #[error("No tool selected: {0}")]
    NoDecision(String),

    /// Invalid configuration (missing token, bad catalog, unreadable config)
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RouterError {
    /// True when the failure originated on the completion endpoint side
    pub fn is_upstream(&self) -> bool {
        matches!(self, RouterError::Upstream(_) | RouterError::NoDecision(_))
    }
}

/// Result type alias for toolroute operations
pub type Result<T> = std::result::Result<T, RouterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error() {
        let err = RouterError::Upstream("connection refused".to_string());
        assert_eq!(err.to_string(), "Upstream error: connection refused");
        assert!(err.is_upstream());
    }

    #[test]
    fn test_no_decision_error() {
        let err = RouterError::NoDecision("first choice has no tool calls".to_string());
        assert_eq!(err.to_string(), "No tool selected: first choice has no tool calls");
        assert!(err.is_upstream());
    }

    #[test]
    fn test_config_error() {
        let err = RouterError::Config("AIPIPE_TOKEN not set".to_string());
        assert_eq!(err.to_string(), "Config error: AIPIPE_TOKEN not set");
        assert!(!err.is_upstream());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RouterError = io_err.into();
        assert!(matches!(err, RouterError::Io(_)));
        assert!(err.to_string().contains("file not found"));
        assert!(!err.is_upstream());
    }
}
