//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated host URL for the Helix instance.
///
/// This newtype validates that the URL has a proper format with a scheme
/// and a non-empty host. A trailing `/` is stripped so endpoint URLs can be
/// joined without doubling separators.
///
/// # Example
///
/// ```rust
/// use helix_client::HostUrl;
///
/// let url = HostUrl::new("http://localhost:6969/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("localhost"));
/// assert_eq!(url.as_ref(), "http://localhost:6969");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "http").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// Joins an endpoint onto this host with a single `/`.
    #[must_use]
    pub fn join(&self, endpoint: &Endpoint) -> String {
        format!("{}/{}", self.url, endpoint.as_ref())
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated query endpoint name.
///
/// Endpoints are the names of queries deployed on the Helix instance
/// (e.g. `create_user`). A single leading `/` is tolerated and stripped.
///
/// # Example
///
/// ```rust
/// use helix_client::Endpoint;
///
/// let endpoint = Endpoint::new("/get_users").unwrap();
/// assert_eq!(endpoint.as_ref(), "get_users");
/// assert!(Endpoint::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// Creates a new validated endpoint name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEndpoint`] if the name is empty and
    /// [`ConfigError::InvalidEndpoint`] if it contains whitespace.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        let name = endpoint.strip_prefix('/').unwrap_or(&endpoint);

        if name.is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: endpoint.clone(),
            });
        }

        Ok(Self(name.to_string()))
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("http://localhost:6969").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("localhost"));

        let url = HostUrl::new("https://helix.example.com/api").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("helix.example.com"));
    }

    #[test]
    fn test_host_url_strips_trailing_slash() {
        let url = HostUrl::new("  http://localhost:6969/  ").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:6969");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        // No scheme
        assert!(HostUrl::new("localhost:6969").is_err());

        // Empty host
        assert!(HostUrl::new("http://").is_err());
        assert!(HostUrl::new("http://:6969").is_err());

        // Invalid scheme
        assert!(HostUrl::new("://localhost").is_err());
        assert!(HostUrl::new("h1tp://localhost").is_err());
    }

    #[test]
    fn test_endpoint_strips_leading_slash() {
        let endpoint = Endpoint::new("/create_user").unwrap();
        assert_eq!(endpoint.as_ref(), "create_user");
    }

    #[test]
    fn test_endpoint_rejects_empty_and_whitespace() {
        assert!(matches!(Endpoint::new(""), Err(ConfigError::EmptyEndpoint)));
        assert!(matches!(Endpoint::new("/"), Err(ConfigError::EmptyEndpoint)));
        assert!(matches!(
            Endpoint::new("get users"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_host_join_uses_single_separator() {
        let host = HostUrl::new("http://localhost:6969/").unwrap();
        let endpoint = Endpoint::new("/followers").unwrap();
        assert_eq!(host.join(&endpoint), "http://localhost:6969/followers");
    }
}
