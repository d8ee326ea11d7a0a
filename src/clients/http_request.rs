//! Query request types.
//!
//! This module provides the [`QueryRequest`] type and its builder for
//! constructing the POST sent for one query.

use crate::clients::errors::InvalidQueryRequestError;
use crate::config::{Endpoint, HostUrl};

/// A query request ready to hand to a [`Transport`](crate::Transport).
///
/// Every query is a `POST` with a JSON body; the method and content type are
/// fixed.
///
/// # Example
///
/// ```rust
/// use helix_client::{HostUrl, QueryRequest};
///
/// let host = HostUrl::new("http://localhost:6969").unwrap();
/// let request = QueryRequest::builder(&host, "get_users")
///     .body(b"{}".to_vec())
///     .build()
///     .unwrap();
///
/// assert_eq!(request.url, "http://localhost:6969/get_users");
/// assert_eq!(request.endpoint.as_ref(), "get_users");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryRequest {
    /// The query endpoint.
    pub endpoint: Endpoint,
    /// The full URL the request is sent to.
    pub url: String,
    /// The JSON request body.
    pub body: Vec<u8>,
}

impl QueryRequest {
    /// HTTP method used for every query.
    pub const METHOD: &'static str = "POST";

    /// Content type of every query body.
    pub const CONTENT_TYPE: &'static str = "application/json";

    /// Creates a new builder for a query against `endpoint` on `host`.
    #[must_use]
    pub fn builder(host: &HostUrl, endpoint: impl Into<String>) -> QueryRequestBuilder {
        QueryRequestBuilder::new(host.clone(), endpoint)
    }

    /// Validates the request URL.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQueryRequestError::InvalidUrl`] if `url` does not parse.
    pub fn verify(&self) -> Result<(), InvalidQueryRequestError> {
        reqwest::Url::parse(&self.url)
            .map(|_| ())
            .map_err(|e| InvalidQueryRequestError::InvalidUrl {
                url: self.url.clone(),
                reason: e.to_string(),
            })
    }
}

/// Builder for constructing [`QueryRequest`] instances.
#[derive(Debug)]
pub struct QueryRequestBuilder {
    host: HostUrl,
    endpoint: String,
    body: Vec<u8>,
}

impl QueryRequestBuilder {
    fn new(host: HostUrl, endpoint: impl Into<String>) -> Self {
        Self {
            host,
            endpoint: endpoint.into(),
            body: Vec::new(),
        }
    }

    /// Sets the encoded JSON body.
    #[must_use]
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the [`QueryRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQueryRequestError`] if the endpoint is empty or
    /// malformed, or the resulting URL is invalid.
    pub fn build(self) -> Result<QueryRequest, InvalidQueryRequestError> {
        let endpoint = Endpoint::new(self.endpoint)?;
        let request = QueryRequest {
            url: self.host.join(&endpoint),
            endpoint,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
