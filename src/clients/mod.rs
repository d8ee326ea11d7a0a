//! Client types for running Helix queries.
//!
//! This module provides the request layer between the query engine and a
//! Helix instance: building the request for a deployed query, sending it
//! through a [`Transport`], and classifying what came back.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HelixClient`]: Runs a query and returns a [`QueryResponse`](crate::QueryResponse)
//! - [`Transport`]: The seam that delivers a request and reads the reply
//! - [`HttpTransport`]: The default `reqwest`-backed transport
//! - [`QueryRequest`]: The `POST` sent for one query
//! - [`QueryError`]: Everything that can go wrong before decoding
//!
//! # Example
//!
//! ```rust,ignore
//! use helix_client::{dest, HelixClient, HelixConfig, QueryOptions};
//!
//! let client = HelixClient::new(&HelixConfig::builder().build()?)?;
//!
//! let mut users: Vec<User> = Vec::new();
//! client
//!     .query("get_users", QueryOptions::new())
//!     .await
//!     .scan([dest(&mut users)])?;
//! ```
//!
//! # Failure Handling
//!
//! A query never retries and never returns an error directly. Failures in
//! any stage are stored in the response:
//!
//! - **Encoding**: invalid input is rejected before any request is built
//! - **Request building**: an empty or malformed endpoint
//! - **Transport**: connection failures and body read failures
//! - **Status**: any status outside `200..300`, carrying the raw body

mod client;
mod errors;
mod http_client;
mod http_request;
mod transport;

pub use client::HelixClient;
pub use errors::{HttpStatusError, InvalidQueryRequestError, QueryError, TransportError};
pub use http_client::{HttpTransport, CLIENT_VERSION};
pub use http_request::{QueryRequest, QueryRequestBuilder};
pub use transport::{Transport, TransportResponse};
