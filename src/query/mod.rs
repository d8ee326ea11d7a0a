//! Query request encoding and response decoding.
//!
//! This module is the marshaling engine behind
//! [`HelixClient::query`](crate::HelixClient::query):
//!
//! - [`QueryInput`] / [`encode_input`]: classify caller data and turn it into
//!   a JSON object payload
//! - [`QueryOptions`]: the per-call option record
//! - [`QueryResponse`]: the immutable outcome of one call, with the `raw`,
//!   `as_map` and `scan` decode strategies
//! - [`ScanArg`], [`Destination`], [`FieldDest`]: scan targets, built with
//!   [`dest`] and [`with_dest`]
//!
//! # Example
//!
//! ```rust
//! use helix_client::query::{QueryResponse, ResponseError};
//! use helix_client::with_dest;
//!
//! #[derive(serde::Deserialize)]
//! struct User {
//!     name: String,
//! }
//!
//! let response = QueryResponse::from_bytes(
//!     br#"{"followers":[{"name":"Jane"}],"count":1}"#.to_vec(),
//! );
//!
//! let mut followers: Vec<User> = Vec::new();
//! let mut count = 0usize;
//! response.scan([
//!     with_dest("followers", &mut followers),
//!     with_dest("count", &mut count),
//! ])?;
//!
//! assert_eq!(followers[0].name, "Jane");
//! assert_eq!(count, 1);
//! # Ok::<(), ResponseError>(())
//! ```

mod byte_string;
mod errors;
mod input;
mod options;
mod response;
mod scan;

pub use errors::{EncodeError, ResponseError};
pub use input::{encode_input, InputKind, QueryInput, EMPTY_OBJECT};
pub use options::QueryOptions;
pub use response::QueryResponse;
pub use scan::{dest, with_dest, DecodeSlot, Destination, FieldDest, ScanArg};
