//! The transport seam between the query engine and HTTP.

use std::future::Future;

use crate::clients::errors::TransportError;
use crate::clients::http_request::QueryRequest;

/// Status and body of a delivered request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The complete response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }
}

/// Sends a [`QueryRequest`] and returns the status and full body.
///
/// Header injection, timeouts and connection reuse are the transport's
/// concern. [`HttpTransport`](crate::HttpTransport) is the default
/// implementation.
///
/// # Example
///
/// ```rust
/// use helix_client::{QueryRequest, Transport, TransportError, TransportResponse};
///
/// struct Canned;
///
/// impl Transport for Canned {
///     async fn send(&self, _request: &QueryRequest) -> Result<TransportResponse, TransportError> {
///         Ok(TransportResponse {
///             status: 200,
///             body: br#"{"ok":true}"#.to_vec(),
///         })
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Delivers `request` and reads the whole response body.
    fn send(
        &self,
        request: &QueryRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}
