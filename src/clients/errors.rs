//! Error types for issuing queries.
//!
//! # Error Handling
//!
//! - [`InvalidQueryRequestError`]: The request could not be built
//! - [`TransportError`]: The transport failed to deliver the request or read the reply
//! - [`HttpStatusError`]: The server answered with a non-2xx status
//! - [`QueryError`]: Unified error stored in a [`QueryResponse`](crate::QueryResponse)
//!
//! `QueryError` is `Clone` so that a response can hand the same error to
//! every decode call.
//!
//! # Example
//!
//! ```rust,ignore
//! use helix_client::QueryError;
//!
//! match response.raw() {
//!     Ok(bytes) => println!("{} bytes", bytes.len()),
//!     Err(QueryError::Status(e)) => println!("server said {}: {}", e.code, e.body),
//!     Err(QueryError::Transport(e)) => println!("network error: {e}"),
//!     Err(e) => println!("query failed: {e}"),
//! }
//! ```

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

use crate::error::ConfigError;
use crate::query::EncodeError;

/// Error returned when the server responds with a status outside `200..300`.
///
/// The display text is exactly `"<status>: <body>"`.
///
/// # Example
///
/// ```rust
/// use helix_client::HttpStatusError;
///
/// let error = HttpStatusError {
///     code: 404,
///     body: "not found".to_string(),
/// };
/// assert_eq!(error.to_string(), "404: not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {body}")]
pub struct HttpStatusError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

/// Error returned when a query request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidQueryRequestError {
    /// The endpoint name is empty or malformed.
    #[error(transparent)]
    Endpoint(#[from] ConfigError),

    /// The joined host and endpoint do not form a valid URL.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Why it failed to parse.
        reason: String,
    },
}

/// Error produced by a [`Transport`](crate::Transport).
///
/// Sources are reference counted so the error stays cheap to clone.
#[derive(Debug, Error, Clone)]
pub enum TransportError {
    /// The request could not be delivered, or no response arrived.
    #[error("Network error: {0}")]
    Network(#[source] Arc<dyn StdError + Send + Sync>),

    /// A response arrived but its body could not be read.
    #[error("Body read error: {0}")]
    BodyRead(#[source] Arc<dyn StdError + Send + Sync>),
}

impl TransportError {
    /// Wraps a delivery failure.
    pub fn network(error: impl StdError + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(error))
    }

    /// Wraps a body read failure.
    pub fn body_read(error: impl StdError + Send + Sync + 'static) -> Self {
        Self::BodyRead(Arc::new(error))
    }
}

/// Unified error for a failed query call.
///
/// # Example
///
/// ```rust
/// use helix_client::{HttpStatusError, QueryError};
///
/// let error: QueryError = HttpStatusError {
///     code: 500,
///     body: "boom".to_string(),
/// }
/// .into();
/// assert_eq!(error.to_string(), "500: boom");
/// ```
#[derive(Debug, Error, Clone)]
pub enum QueryError {
    /// The query data could not be encoded.
    #[error("failed to marshal input data: {0}")]
    Encode(#[from] EncodeError),

    /// The request could not be built.
    #[error("failed to create request: {0}")]
    RequestBuild(#[from] InvalidQueryRequestError),

    /// The request could not be sent.
    #[error("failed to send request: {0}")]
    Transport(#[source] TransportError),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] TransportError),

    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Status(#[from] HttpStatusError),
}

impl From<TransportError> for QueryError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Network(_) => Self::Transport(error),
            TransportError::BodyRead(_) => Self::BodyRead(error),
        }
    }
}
