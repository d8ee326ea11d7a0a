//! Per-call query options.

use serde::Serialize;

use crate::query::QueryInput;

/// Options for a single query call.
///
/// Each field is one option slot; setting a slot again replaces the earlier
/// value.
///
/// # Example
///
/// ```rust
/// use helix_client::query::{QueryInput, QueryOptions};
/// use serde_json::json;
///
/// let options = QueryOptions::new()
///     .data(json!({"id": "first"}))
///     .data(json!({"id": "second"}));
///
/// assert_eq!(options.data, QueryInput::Value(json!({"id": "second"})));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryOptions {
    /// Data sent as the request body.
    pub data: QueryInput,
    /// Name of the type the caller expects back.
    ///
    /// Reserved for typed dispatch; it is carried with the query but does not
    /// change how the response is decoded.
    pub target: Option<&'static str>,
}

impl QueryOptions {
    /// Creates options with no data and no target type.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data slot from JSON text, JSON bytes or a `serde_json::Value`.
    #[must_use]
    pub fn data(mut self, data: impl Into<QueryInput>) -> Self {
        self.data = data.into();
        self
    }

    /// Sets the data slot from any serializable value.
    ///
    /// Strings and byte sequences are still treated as JSON text and JSON
    /// bytes.
    #[must_use]
    pub fn data_from<T: Serialize + ?Sized>(mut self, data: &T) -> Self {
        self.data = QueryInput::from_serialize(data);
        self
    }

    /// Records the type the caller expects back.
    #[must_use]
    pub fn target<T: ?Sized>(mut self) -> Self {
        self.target = Some(std::any::type_name::<T>());
        self
    }
}
