//! Error types for encoding query input and decoding query responses.
//!
//! - [`EncodeError`]: The query input cannot become a JSON object payload
//! - [`ResponseError`]: A decode strategy on a [`QueryResponse`](super::QueryResponse) failed
//!
//! # Example
//!
//! ```rust
//! use helix_client::query::{QueryResponse, ResponseError};
//!
//! let response = QueryResponse::from_bytes(br#"{"count":3}"#.to_vec());
//!
//! let mut name = String::new();
//! match response.scan([helix_client::with_dest("name", &mut name)]) {
//!     Err(ResponseError::FieldNotFound { name }) => assert_eq!(name, "name"),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::QueryError;

/// Error returned when query input cannot be encoded as a request payload.
///
/// A payload must be a single JSON object (or caller-supplied JSON text or
/// bytes that are well-formed).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A string input is not syntactically valid JSON.
    #[error("provided string is not valid JSON")]
    InvalidJsonString,

    /// A byte input is not syntactically valid JSON.
    #[error("provided byte slice is not valid JSON")]
    InvalidJsonBytes,

    /// The input is an array; a top-level array cannot become a keyed payload.
    #[error("input data cannot be a sequence; it must be a struct or map to produce a key-value object")]
    SequenceNotAllowed,

    /// The input is a scalar (boolean, number or string value).
    #[error("unsupported input data type: {kind}. Input must be a struct or a map")]
    UnsupportedShape {
        /// The JSON kind of the rejected value.
        kind: &'static str,
    },

    /// The input's `Serialize` implementation failed.
    #[error("failed to serialize input data: {reason}")]
    Serialize {
        /// The serializer's error message.
        reason: String,
    },
}

/// Error returned by the decode strategies of a query response.
///
/// When the response itself carries an error, every strategy returns it
/// unchanged as [`ResponseError::Query`], whose display is identical to the
/// stored error.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The query failed before a body was available.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// `scan` was called without any destination.
    #[error("scan destination is expected")]
    NoDestination,

    /// A scan destination is nil.
    #[error("scan destination cannot be nil")]
    NilDestination,

    /// A scan destination was passed by value instead of by reference.
    #[error("scan destination must be a mutable reference, got {type_name}")]
    NotAPointer {
        /// The type of the value that was passed.
        type_name: &'static str,
    },

    /// A bare destination was mixed with named field destinations.
    #[error("invalid scan argument type {type_name} (expected a single destination or with_dest(...) arguments)")]
    InvalidArgumentType {
        /// The type of the offending argument.
        type_name: &'static str,
    },

    /// The response body is not a JSON object, so its fields cannot be read.
    #[error("invalid json response: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    /// The response body does not match the destination's shape.
    #[error(transparent)]
    Decode(serde_json::Error),

    /// A named field is not a top-level key of the response body.
    #[error("field \"{name}\" not found")]
    FieldNotFound {
        /// The missing field name.
        name: String,
    },

    /// A named field does not match its destination's shape.
    #[error("failed to scan field \"{name}\": {source}")]
    FieldDecode {
        /// The field being decoded.
        name: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
