//! Query input classification and request payload encoding.
//!
//! Every input is classified once into an [`InputKind`]; [`encode_input`]
//! then handles each kind explicitly.

use serde::de::IgnoredAny;
use serde::Serialize;
use serde_json::Value;

use crate::query::byte_string::byte_string;
use crate::query::EncodeError;

/// Payload sent when a query carries no data.
pub const EMPTY_OBJECT: &[u8] = b"{}";

/// Data sent with a query.
///
/// # Example
///
/// ```rust
/// use helix_client::query::{InputKind, QueryInput};
/// use serde_json::json;
///
/// assert_eq!(QueryInput::from(r#"{"id":"1"}"#).kind(), InputKind::JsonText);
/// assert_eq!(QueryInput::from(json!({"id": "1"})).kind(), InputKind::Encodable);
/// assert_eq!(QueryInput::from(json!([1, 2])).kind(), InputKind::Sequence);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QueryInput {
    /// No data; encodes to `{}`.
    #[default]
    Nil,
    /// JSON text, sent verbatim once checked for well-formedness.
    Text(String),
    /// JSON bytes, sent verbatim once checked for well-formedness.
    Bytes(Vec<u8>),
    /// A value encoded according to its JSON shape.
    Value(Value),
    /// A value whose `Serialize` implementation failed.
    Unserializable {
        /// The serializer's error message.
        reason: String,
    },
}

/// The classification of a [`QueryInput`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// No data, or a JSON `null`.
    Nil,
    /// Caller-supplied JSON text.
    JsonText,
    /// Caller-supplied JSON bytes.
    JsonBytes,
    /// A record or map, encoded as a JSON object.
    Encodable,
    /// An array; always rejected.
    Sequence,
    /// A bool or number; always rejected.
    Unsupported(&'static str),
    /// A value that failed to serialize.
    Unserializable,
}

enum Shape {
    Null,
    Object,
    Array,
    Text,
    Scalar(&'static str),
}

const fn shape(value: &Value) -> Shape {
    match value {
        Value::Null => Shape::Null,
        Value::Object(_) => Shape::Object,
        Value::Array(_) => Shape::Array,
        Value::Bool(_) => Shape::Scalar("bool"),
        Value::Number(_) => Shape::Scalar("number"),
        Value::String(_) => Shape::Text,
    }
}

impl QueryInput {
    /// Captures any serializable value (structs, maps, `Option`s, ...).
    ///
    /// Strings are taken as JSON text and non-empty byte sequences
    /// (`Vec<u8>`, `[u8]`, `[u8; N]`) as JSON bytes, exactly as if they had
    /// been passed to `QueryInput::from`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use helix_client::query::{InputKind, QueryInput};
    ///
    /// #[derive(serde::Serialize)]
    /// struct FollowInput {
    ///     follower_id: String,
    ///     followed_id: String,
    /// }
    ///
    /// let input = QueryInput::from_serialize(&FollowInput {
    ///     follower_id: "a".into(),
    ///     followed_id: "b".into(),
    /// });
    /// assert_eq!(input.kind(), InputKind::Encodable);
    /// ```
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        if let Some(bytes) = byte_string(value) {
            return Self::Bytes(bytes);
        }

        match serde_json::to_value(value) {
            Ok(Value::String(text)) => Self::Text(text),
            Ok(value) => Self::Value(value),
            Err(e) => Self::Unserializable {
                reason: e.to_string(),
            },
        }
    }

    /// Classifies this input.
    #[must_use]
    pub const fn kind(&self) -> InputKind {
        match self {
            Self::Nil => InputKind::Nil,
            Self::Text(_) => InputKind::JsonText,
            Self::Bytes(_) => InputKind::JsonBytes,
            Self::Value(value) => match shape(value) {
                Shape::Null => InputKind::Nil,
                Shape::Object => InputKind::Encodable,
                Shape::Array => InputKind::Sequence,
                Shape::Text => InputKind::JsonText,
                Shape::Scalar(kind) => InputKind::Unsupported(kind),
            },
            Self::Unserializable { .. } => InputKind::Unserializable,
        }
    }
}

impl From<&str> for QueryInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for QueryInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&[u8]> for QueryInput {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for QueryInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Value> for QueryInput {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for QueryInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

fn is_valid_json(bytes: &[u8]) -> bool {
    serde_json::from_slice::<IgnoredAny>(bytes).is_ok()
}

fn encode_text(text: String) -> Result<Vec<u8>, EncodeError> {
    if is_valid_json(text.as_bytes()) {
        Ok(text.into_bytes())
    } else {
        Err(EncodeError::InvalidJsonString)
    }
}

/// Encodes query input into the JSON body sent to the server.
///
/// # Errors
///
/// Returns an [`EncodeError`] when the input is malformed JSON text or
/// bytes, an array, a scalar, or a value that failed to serialize.
///
/// # Example
///
/// ```rust
/// use helix_client::query::{encode_input, EncodeError, QueryInput};
/// use serde_json::json;
///
/// assert_eq!(encode_input(QueryInput::Nil).unwrap(), b"{}");
/// assert_eq!(encode_input(" {\"a\": 1} ".into()).unwrap(), b" {\"a\": 1} ");
/// assert_eq!(
///     encode_input(json!([1]).into()),
///     Err(EncodeError::SequenceNotAllowed)
/// );
/// ```
pub fn encode_input(input: QueryInput) -> Result<Vec<u8>, EncodeError> {
    match input {
        QueryInput::Nil => Ok(EMPTY_OBJECT.to_vec()),
        QueryInput::Text(text) => encode_text(text),
        QueryInput::Bytes(bytes) => {
            if is_valid_json(&bytes) {
                Ok(bytes)
            } else {
                Err(EncodeError::InvalidJsonBytes)
            }
        }
        QueryInput::Value(Value::String(text)) => encode_text(text),
        QueryInput::Value(value) => match shape(&value) {
            Shape::Null => Ok(EMPTY_OBJECT.to_vec()),
            Shape::Object => serde_json::to_vec(&value).map_err(|e| EncodeError::Serialize {
                reason: e.to_string(),
            }),
            Shape::Array => Err(EncodeError::SequenceNotAllowed),
            Shape::Text => Err(EncodeError::InvalidJsonString),
            Shape::Scalar(kind) => Err(EncodeError::UnsupportedShape { kind }),
        },
        QueryInput::Unserializable { reason } => Err(EncodeError::Serialize { reason }),
    }
}
