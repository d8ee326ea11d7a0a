//! The outcome of one query call and its decode strategies.
//!
//! This module provides [`QueryResponse`], which holds the buffered body (or
//! the error) of a query, and three ways to read it:
//!
//! - [`QueryResponse::raw`]: the bytes as received
//! - [`QueryResponse::as_map`]: an untyped JSON object
//! - [`QueryResponse::scan`]: typed decoding of the whole body or of named fields

use serde_json::{Map, Value};

use crate::clients::QueryError;
use crate::query::scan::{Destination, RawFields, ScanArg};
use crate::query::ResponseError;

/// The result of a single query call.
///
/// A response is either ok (it holds the body bytes) or errored (it holds the
/// error and no bytes). It is never modified after construction, so each
/// decode strategy can be called any number of times. On an errored response
/// every strategy returns the stored error without decoding anything.
///
/// # Example
///
/// ```rust
/// use helix_client::{with_dest, QueryResponse};
///
/// let response = QueryResponse::from_bytes(
///     br#"{"users":[{"name":"A"}],"total_count":3}"#.to_vec(),
/// );
///
/// let mut users: Vec<serde_json::Value> = Vec::new();
/// response.scan([with_dest("users", &mut users)]).unwrap();
/// assert_eq!(users.len(), 1);
///
/// let map = response.as_map().unwrap();
/// assert_eq!(map["total_count"], 3);
/// ```
#[derive(Clone, Debug)]
pub struct QueryResponse {
    bytes: Vec<u8>,
    error: Option<QueryError>,
}

// Verify QueryResponse is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryResponse>();
};

impl QueryResponse {
    /// Creates an ok response holding `bytes`.
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes, error: None }
    }

    /// Creates an errored response.
    #[must_use]
    pub const fn from_error(error: QueryError) -> Self {
        Self {
            bytes: Vec::new(),
            error: Some(error),
        }
    }

    /// Returns `true` if the query succeeded.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the stored error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&QueryError> {
        self.error.as_ref()
    }

    /// Returns the body bytes unchanged.
    ///
    /// # Errors
    ///
    /// Returns the stored [`QueryError`] if the query failed.
    pub fn raw(&self) -> Result<&[u8], QueryError> {
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(&self.bytes),
        }
    }

    /// Decodes the body as an untyped JSON object.
    ///
    /// Numbers, arrays and nested objects keep their JSON shape as
    /// [`serde_json::Value`]s. A `null` body gives an empty map.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::Query`] if the query failed, and
    /// [`ResponseError::Decode`] if the body is not a JSON object.
    pub fn as_map(&self) -> Result<Map<String, Value>, ResponseError> {
        self.ensure_ok()?;
        serde_json::from_slice::<Option<Map<String, Value>>>(&self.bytes)
            .map(Option::unwrap_or_default)
            .map_err(ResponseError::Decode)
    }

    /// Decodes the body into caller-owned destinations.
    ///
    /// - A single [`dest`](crate::dest) argument receives the whole body.
    /// - One or more [`with_dest`](crate::with_dest) arguments each receive
    ///   the top-level field they name, in argument order.
    ///
    /// Decoding stops at the first failing field; fields decoded before it
    /// keep their new values.
    ///
    /// # Errors
    ///
    /// - [`ResponseError::NoDestination`] if `args` is empty
    /// - [`ResponseError::Query`] if the query failed
    /// - [`ResponseError::NilDestination`] / [`ResponseError::NotAPointer`]
    ///   for an unusable destination
    /// - [`ResponseError::InvalidArgumentType`] if a bare destination is
    ///   combined with other arguments
    /// - [`ResponseError::Decode`] if the body does not match a bare destination
    /// - [`ResponseError::InvalidResponse`] if the body is neither a JSON
    ///   object nor `null` when fields are requested
    /// - [`ResponseError::FieldNotFound`] / [`ResponseError::FieldDecode`]
    ///   for a missing or mismatched field
    pub fn scan<'a, I>(&self, args: I) -> Result<(), ResponseError>
    where
        I: IntoIterator<Item = ScanArg<'a>>,
    {
        let mut args: Vec<ScanArg<'a>> = args.into_iter().collect();

        match args.as_mut_slice() {
            [] => Err(ResponseError::NoDestination),
            [ScanArg::Dest(dest)] => self.scan_whole(dest),
            fields => self.scan_fields(fields),
        }
    }

    fn ensure_ok(&self) -> Result<(), ResponseError> {
        match &self.error {
            Some(error) => Err(ResponseError::Query(error.clone())),
            None => Ok(()),
        }
    }

    fn scan_whole(&self, dest: &mut Destination<'_>) -> Result<(), ResponseError> {
        self.ensure_ok()?;
        let slot = dest.validate()?;
        slot.decode_json(&self.bytes).map_err(ResponseError::Decode)
    }

    fn scan_fields(&self, args: &mut [ScanArg<'_>]) -> Result<(), ResponseError> {
        self.ensure_ok()?;

        if let Some(arg) = args.iter().find(|arg| matches!(arg, ScanArg::Dest(_))) {
            return Err(ResponseError::InvalidArgumentType {
                type_name: arg.type_name(),
            });
        }

        let fields = serde_json::from_slice::<Option<RawFields>>(&self.bytes)
            .map_err(ResponseError::InvalidResponse)?
            .unwrap_or_default();

        for arg in args {
            if let ScanArg::Field(field) = arg {
                field.resolve(&fields)?;
            }
        }

        Ok(())
    }
}

impl From<Result<Vec<u8>, QueryError>> for QueryResponse {
    fn from(result: Result<Vec<u8>, QueryError>) -> Self {
        match result {
            Ok(bytes) => Self::from_bytes(bytes),
            Err(error) => Self::from_error(error),
        }
    }
}
