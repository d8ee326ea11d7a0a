//! The Helix query client.
//!
//! This module provides the [`HelixClient`] type for running deployed
//! queries against a Helix instance.

use crate::clients::errors::{HttpStatusError, QueryError};
use crate::clients::http_client::HttpTransport;
use crate::clients::http_request::QueryRequest;
use crate::clients::transport::Transport;
use crate::config::{HelixConfig, HostUrl};
use crate::error::ConfigError;
use crate::query::{encode_input, QueryOptions, QueryResponse};

/// Client for running queries against a Helix instance.
///
/// The client is a plain value: construct as many as needed, or keep one in
/// a `static` if a process-wide handle is wanted. Each [`query`](Self::query)
/// call performs exactly one request and never retries.
///
/// # Thread Safety
///
/// `HelixClient` is `Send + Sync` whenever its transport is, so one client
/// can serve concurrent tasks.
///
/// # Example
///
/// ```rust,ignore
/// use helix_client::{with_dest, HelixClient, HelixConfig, QueryOptions};
/// use serde_json::json;
///
/// let client = HelixClient::new(&HelixConfig::builder().build()?)?;
///
/// let mut count = 0u64;
/// client
///     .query("followerCount", QueryOptions::new().data(json!({"id": user_id})))
///     .await
///     .scan([with_dest("count", &mut count)])?;
/// ```
#[derive(Clone, Debug)]
pub struct HelixClient<T = HttpTransport> {
    /// Host every endpoint is joined onto.
    host: HostUrl,
    /// The transport requests are sent through.
    transport: T,
}

// Verify HelixClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HelixClient>();
};

impl HelixClient<HttpTransport> {
    /// Creates a client using the default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be
    /// created.
    pub fn new(config: &HelixConfig) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> HelixClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: &HelixConfig, transport: T) -> Self {
        Self {
            host: config.host().clone(),
            transport,
        }
    }

    /// Returns the host queries are sent to.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs the query deployed at `endpoint`.
    ///
    /// This method never fails directly: every failure (bad input, invalid
    /// endpoint, network error, non-2xx status) is stored in the returned
    /// [`QueryResponse`] and surfaces from whichever decode strategy is
    /// called on it.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = client
    ///     .query("create_user", QueryOptions::new().data_from(&new_user))
    ///     .await;
    ///
    /// let mut created = CreateUserResponse::default();
    /// response.scan([dest(&mut created)])?;
    /// ```
    pub async fn query(&self, endpoint: &str, options: QueryOptions) -> QueryResponse {
        self.execute(endpoint, options).await.into()
    }

    async fn execute(&self, endpoint: &str, options: QueryOptions) -> Result<Vec<u8>, QueryError> {
        if let Some(target) = options.target {
            tracing::debug!(
                "Query {} carries target type {}, which does not affect decoding",
                endpoint,
                target
            );
        }

        let payload = encode_input(options.data)?;
        let request = QueryRequest::builder(&self.host, endpoint)
            .body(payload)
            .build()?;

        tracing::debug!(
            "Sending query {} to {} ({} bytes)",
            request.endpoint,
            request.url,
            request.body.len()
        );

        let response = self.transport.send(&request).await.map_err(|e| {
            tracing::warn!("Query {} failed in transport: {}", request.endpoint, e);
            QueryError::from(e)
        })?;

        if !response.is_success() {
            tracing::warn!(
                "Query {} returned status {}",
                request.endpoint,
                response.status
            );
            return Err(HttpStatusError {
                code: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }
            .into());
        }

        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::{InvalidQueryRequestError, TransportError};
    use crate::clients::transport::TransportResponse;
    use crate::query::{dest, with_dest, EncodeError, ResponseError};
    use serde_json::json;
    use std::io;
    use std::sync::Mutex;

    /// Transport returning a canned result and recording what it was sent.
    struct FakeTransport {
        result: Result<TransportResponse, TransportError>,
        sent: Mutex<Vec<QueryRequest>>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                result: Ok(TransportResponse {
                    status,
                    body: body.as_bytes().to_vec(),
                }),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: TransportError) -> Self {
            Self {
                result: Err(error),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<QueryRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Transport for FakeTransport {
        async fn send(&self, request: &QueryRequest) -> Result<TransportResponse, TransportError> {
            self.sent.lock().unwrap().push(request.clone());
            self.result.clone()
        }
    }

    fn client(transport: FakeTransport) -> HelixClient<FakeTransport> {
        let config = HelixConfig::builder().build().unwrap();
        HelixClient::with_transport(&config, transport)
    }

    #[tokio::test]
    async fn test_query_posts_encoded_payload_to_endpoint() {
        let client = client(FakeTransport::replying(200, r#"{"count":2}"#));

        let response = client
            .query(
                "followerCount",
                QueryOptions::new().data(json!({"id": "user-1"})),
            )
            .await;

        let mut count = 0u32;
        response.scan([with_dest("count", &mut count)]).unwrap();
        assert_eq!(count, 2);

        let sent = client.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://localhost:6969/followerCount");
        assert_eq!(sent[0].body, br#"{"id":"user-1"}"#);
    }

    #[tokio::test]
    async fn test_query_without_data_sends_empty_object() {
        let client = client(FakeTransport::replying(200, "{}"));

        client.query("get_users", QueryOptions::new()).await;

        assert_eq!(client.transport().sent()[0].body, b"{}");
    }

    #[tokio::test]
    async fn test_query_sends_json_text_verbatim() {
        let client = client(FakeTransport::replying(200, "{}"));
        let text = "{ \"id\" : \"abc\" }";

        client.query("user", QueryOptions::new().data(text)).await;

        assert_eq!(client.transport().sent()[0].body, text.as_bytes());
    }

    #[tokio::test]
    async fn test_serialized_json_text_is_sent_byte_for_byte() {
        let client = client(FakeTransport::replying(200, "{}"));
        let text = String::from("{\"id\":  \"abc\"}");

        client
            .query("user", QueryOptions::new().data_from(&text))
            .await;

        assert_eq!(client.transport().sent()[0].body, text.as_bytes());
    }

    #[tokio::test]
    async fn test_encode_failure_skips_transport() {
        let client = client(FakeTransport::replying(200, "{}"));

        let response = client
            .query("create_users", QueryOptions::new().data(json!([1, 2])))
            .await;

        assert!(matches!(
            response.raw(),
            Err(QueryError::Encode(EncodeError::SequenceNotAllowed))
        ));
        assert!(client.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_empty_endpoint_is_a_request_build_error() {
        let client = client(FakeTransport::replying(200, "{}"));

        let response = client.query("", QueryOptions::new()).await;

        assert!(matches!(
            response.raw(),
            Err(QueryError::RequestBuild(InvalidQueryRequestError::Endpoint(
                ConfigError::EmptyEndpoint
            )))
        ));
        assert!(client.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_stored() {
        let client = client(FakeTransport::failing(TransportError::network(
            io::Error::other("connection refused"),
        )));

        let response = client.query("get_users", QueryOptions::new()).await;

        let error = response.raw().unwrap_err();
        assert!(matches!(error, QueryError::Transport(_)));
        assert!(error.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_body_read_failure_is_surfaced() {
        let client = client(FakeTransport::failing(TransportError::body_read(
            io::Error::other("connection reset"),
        )));

        let response = client.query("get_users", QueryOptions::new()).await;

        assert!(matches!(response.raw(), Err(QueryError::BodyRead(_))));
    }

    #[tokio::test]
    async fn test_non_2xx_status_formats_code_and_body() {
        let client = client(FakeTransport::replying(404, "not found"));

        let response = client.query("missing_query", QueryOptions::new()).await;

        assert_eq!(response.raw().unwrap_err().to_string(), "404: not found");

        let map_error = response.as_map().unwrap_err();
        assert_eq!(map_error.to_string(), "404: not found");

        let mut body = json!(null);
        let scan_error = response.scan([dest(&mut body)]).unwrap_err();
        assert!(matches!(
            scan_error,
            ResponseError::Query(QueryError::Status(HttpStatusError { code: 404, .. }))
        ));
        assert_eq!(body, json!(null));
    }

    #[tokio::test]
    async fn test_target_type_does_not_change_decoding() {
        let client = client(FakeTransport::replying(200, r#"{"count":1}"#));

        let plain = client.query("count", QueryOptions::new()).await;
        let targeted = client
            .query("count", QueryOptions::new().target::<Vec<String>>())
            .await;

        assert_eq!(plain.raw().unwrap(), targeted.raw().unwrap());
        assert_eq!(plain.as_map().unwrap(), targeted.as_map().unwrap());
    }

    #[test]
    fn test_client_exposes_configured_host() {
        let config = HelixConfig::builder()
            .host(HostUrl::new("https://helix.example.com/").unwrap())
            .build()
            .unwrap();
        let client = HelixClient::new(&config).unwrap();

        assert_eq!(client.host().as_ref(), "https://helix.example.com");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HelixClient>();
        assert_send_sync::<HelixClient<FakeTransport>>();
    }
}
