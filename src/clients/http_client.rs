//! Default HTTP transport built on `reqwest`.
//!
//! This module provides the [`HttpTransport`] type, which sends query
//! requests to a Helix instance over HTTP.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

use crate::clients::errors::TransportError;
use crate::clients::http_request::QueryRequest;
use crate::clients::transport::{Transport, TransportResponse};
use crate::config::HelixConfig;
use crate::error::ConfigError;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for sending queries to a Helix instance.
///
/// The transport handles:
/// - Default headers including User-Agent and `Accept: application/json`
/// - The client-wide timeout from [`HelixConfig`]
/// - Reading the complete response body
///
/// # Thread Safety
///
/// `HttpTransport` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use helix_client::{HelixConfig, HttpTransport};
///
/// let config = HelixConfig::builder().build().unwrap();
/// let transport = HttpTransport::new(&config).unwrap();
/// assert!(transport.user_agent().starts_with("Helix Rust Client v"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpTransport {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The User-Agent sent with every request.
    user_agent: String,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a new transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying reqwest
    /// client cannot be created (for example an invalid user agent prefix).
    pub fn new(config: &HelixConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Helix Rust Client v{CLIENT_VERSION}");

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent.as_str())
            .default_headers(default_headers);

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self { client, user_agent })
    }

    /// Returns the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &QueryRequest) -> Result<TransportResponse, TransportError> {
        let res = self
            .client
            .post(request.url.as_str())
            .header(CONTENT_TYPE, QueryRequest::CONTENT_TYPE)
            .body(request.body.clone())
            .send()
            .await
            .map_err(TransportError::network)?;

        let status = res.status().as_u16();
        let body = res.bytes().await.map_err(TransportError::body_read)?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_user_agent_header_format() {
        let config = HelixConfig::builder().build().unwrap();
        let transport = HttpTransport::new(&config).unwrap();

        assert_eq!(
            transport.user_agent(),
            format!("Helix Rust Client v{CLIENT_VERSION}")
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = HelixConfig::builder()
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let transport = HttpTransport::new(&config).unwrap();

        assert!(transport.user_agent().starts_with("MyApp/1.0 | "));
        assert!(transport.user_agent().contains("Helix Rust Client"));
    }

    #[test]
    fn test_invalid_user_agent_prefix_fails_to_build() {
        let config = HelixConfig::builder()
            .user_agent_prefix("bad\nprefix")
            .build()
            .unwrap();

        assert!(matches!(
            HttpTransport::new(&config),
            Err(ConfigError::HttpClientBuild { .. })
        ));
    }

    #[test]
    fn test_transport_with_timeout_builds() {
        let config = HelixConfig::builder()
            .timeout(Duration::from_millis(250))
            .build()
            .unwrap();
        assert!(HttpTransport::new(&config).is_ok());
    }

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpTransport>();
    }
}
