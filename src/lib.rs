//! # Helix Rust Client
//!
//! A Rust client for running deployed queries against a HelixDB instance,
//! providing input encoding, a single-round-trip query call and typed
//! decoding of the JSON response.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`HelixConfig`] and [`HelixConfigBuilder`]
//! - Validated newtypes for the host URL and query endpoint
//! - Input classification and encoding via [`QueryInput`]
//! - A query call that always returns a [`QueryResponse`]
//! - Three decode strategies on the response: raw bytes, a generic JSON map,
//!   and scanning into caller-owned destinations
//! - A [`Transport`] seam with a `reqwest`-backed default, [`HttpTransport`]
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use helix_client::{HelixClient, HelixConfig, HostUrl};
//!
//! let config = HelixConfig::builder()
//!     .host(HostUrl::new("http://localhost:6969").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! let client = HelixClient::new(&config).unwrap();
//! assert_eq!(client.host().as_ref(), "http://localhost:6969");
//! ```
//!
//! ## Running Queries
//!
//! ```rust,ignore
//! use helix_client::{dest, with_dest, HelixClient, QueryOptions};
//! use serde_json::json;
//!
//! // Whole-object decode
//! let mut created = CreateUserResponse::default();
//! client
//!     .query("create_user", QueryOptions::new().data_from(&new_user))
//!     .await
//!     .scan([dest(&mut created)])?;
//!
//! // Field-by-field decode
//! let mut followers: Vec<User> = Vec::new();
//! let mut count = 0u64;
//! client
//!     .query("followers", QueryOptions::new().data(json!({"id": user_id})))
//!     .await
//!     .scan([
//!         with_dest("followers", &mut followers),
//!         with_dest("count", &mut count),
//!     ])?;
//!
//! // Untyped access
//! let map = client.query("stats", QueryOptions::new()).await.as_map()?;
//! ```
//!
//! ## Input Rules
//!
//! Query data must describe a JSON object:
//! - No data encodes as `{}`
//! - JSON text and JSON bytes are validated and sent unchanged
//! - Serializable values must serialize to an object
//! - Sequences and scalars are rejected before any request is made
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients and responses are `Send + Sync`
//! - **Deferred errors**: A query never fails directly; its error surfaces
//!   from whichever decode strategy is called

pub mod clients;
pub mod config;
pub mod error;
pub mod query;

// Re-export public types at crate root for convenience
pub use config::{Endpoint, HelixConfig, HelixConfigBuilder, HostUrl, DEFAULT_HOST};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    HelixClient, HttpStatusError, HttpTransport, InvalidQueryRequestError, QueryError,
    QueryRequest, Transport, TransportError, TransportResponse,
};

// Re-export query types
pub use query::{
    dest, with_dest, EncodeError, QueryInput, QueryOptions, QueryResponse, ResponseError,
};
