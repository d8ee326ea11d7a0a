//! Configuration types for the Helix client.
//!
//! This module provides the configuration used to construct a
//! [`HelixClient`](crate::HelixClient) and its default HTTP transport.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HelixConfig`]: The configuration struct holding all client settings
//! - [`HelixConfigBuilder`]: A builder for constructing [`HelixConfig`] instances
//! - [`HostUrl`]: A validated Helix host URL
//! - [`Endpoint`]: A validated query endpoint name
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use helix_client::{HelixConfig, HostUrl};
//!
//! let config = HelixConfig::builder()
//!     .host(HostUrl::new("http://localhost:6969").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{Endpoint, HostUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "http://localhost:6969";

/// Configuration for the Helix client.
///
/// Connection concerns (host, timeout, user agent) live here and are applied
/// once when the transport is created.
///
/// # Thread Safety
///
/// `HelixConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use helix_client::HelixConfig;
///
/// let config = HelixConfig::builder().build().unwrap();
/// assert_eq!(config.host().as_ref(), "http://localhost:6969");
/// assert!(config.timeout().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct HelixConfig {
    host: HostUrl,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl HelixConfig {
    /// Creates a new builder for constructing a `HelixConfig`.
    #[must_use]
    pub fn builder() -> HelixConfigBuilder {
        HelixConfigBuilder::new()
    }

    /// Returns the host URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the client-wide request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify HelixConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HelixConfig>();
};

/// Builder for constructing [`HelixConfig`] instances.
///
/// # Defaults
///
/// - `host`: [`DEFAULT_HOST`]
/// - `timeout`: `None` (no client-wide timeout)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct HelixConfigBuilder {
    host: Option<HostUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl HelixConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host URL of the Helix instance.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets a client-wide timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`HelixConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<HelixConfig, ConfigError> {
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidTimeout);
        }

        let host = match self.host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_HOST)?,
        };

        Ok(HelixConfig {
            host,
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = HelixConfig::builder().build().unwrap();

        assert_eq!(config.host().as_ref(), DEFAULT_HOST);
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = HelixConfig::builder().timeout(Duration::ZERO).build();
        assert!(matches!(result, Err(ConfigError::InvalidTimeout)));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let host = HostUrl::new("https://helix.example.com").unwrap();

        let config = HelixConfig::builder()
            .host(host.clone())
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.host(), &host);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_later_setter_wins() {
        let config = HelixConfig::builder()
            .timeout(Duration::from_secs(1))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HelixConfig>();
    }
}
