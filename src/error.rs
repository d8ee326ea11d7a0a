//! Error types for client configuration.
//!
//! This module contains the error type used when building configuration
//! values and the default HTTP transport.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use helix_client::{ConfigError, Endpoint};
//!
//! let result = Endpoint::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyEndpoint)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://localhost:6969').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Endpoint name cannot be empty.
    #[error("Endpoint name cannot be empty. Please provide the name of a deployed query.")]
    EmptyEndpoint,

    /// Endpoint name contains characters that cannot appear in a query name.
    #[error("Invalid endpoint '{endpoint}'. Endpoint names cannot contain whitespace.")]
    InvalidEndpoint {
        /// The invalid endpoint that was provided.
        endpoint: String,
    },

    /// Request timeout must be non-zero.
    #[error("Invalid timeout: a request timeout must be greater than zero.")]
    InvalidTimeout,

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClientBuild {
        /// Why the client could not be created.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_host_url_error_message() {
        let error = ConfigError::InvalidHostUrl {
            url: "localhost".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("'localhost'"));
        assert!(message.contains("with scheme"));
    }

    #[test]
    fn test_empty_endpoint_error_message() {
        let message = ConfigError::EmptyEndpoint.to_string();
        assert!(message.contains("Endpoint name cannot be empty"));
    }

    #[test]
    fn test_invalid_endpoint_error_message() {
        let error = ConfigError::InvalidEndpoint {
            endpoint: "get users".to_string(),
        };
        assert!(error.to_string().contains("'get users'"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::InvalidTimeout;
        let _: &dyn std::error::Error = &error;
    }
}
