//! Scan destinations and their validation.
//!
//! A scan argument is either a bare [`Destination`] receiving the whole
//! response body, or a [`FieldDest`] receiving one top-level field. Every
//! destination is validated before any JSON is decoded into it.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::query::ResponseError;

/// Top-level fields of a response body, still JSON-encoded.
pub(crate) type RawFields = HashMap<String, Box<RawValue>>;

/// A location JSON can be decoded into.
///
/// Implemented for every `T: DeserializeOwned`; decoding replaces the
/// current value.
pub trait DecodeSlot {
    /// Decodes `json` and stores the result in `self`.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when `json` does not match the slot's type.
    fn decode_json(&mut self, json: &[u8]) -> Result<(), serde_json::Error>;

    /// Returns the name of the slot's type.
    fn type_name(&self) -> &'static str;
}

impl<T: DeserializeOwned> DecodeSlot for T {
    fn decode_json(&mut self, json: &[u8]) -> Result<(), serde_json::Error> {
        *self = serde_json::from_slice(json)?;
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Where decoded JSON is written.
pub enum Destination<'a> {
    /// A caller-owned location.
    Ref(&'a mut dyn DecodeSlot),
    /// No location; rejected with [`ResponseError::NilDestination`].
    Nil,
    /// A value passed where a location is required; rejected with
    /// [`ResponseError::NotAPointer`].
    Value {
        /// The type of the value that was passed.
        type_name: &'static str,
    },
}

impl<'a> Destination<'a> {
    /// Targets a caller-owned location.
    pub fn to<T: DeserializeOwned>(target: &'a mut T) -> Self {
        Self::Ref(target)
    }

    /// A destination with no location behind it.
    #[must_use]
    pub const fn nil() -> Self {
        Self::Nil
    }

    /// Records a value passed by value. Nothing can be written back through
    /// it, so only its type name is kept.
    pub fn by_value<T>(_value: T) -> Self {
        Self::Value {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns the name of the destination's type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Ref(slot) => slot.type_name(),
            Self::Nil => "nil",
            Self::Value { type_name } => *type_name,
        }
    }

    /// Checks that the destination is a usable location.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::NilDestination`] or
    /// [`ResponseError::NotAPointer`].
    pub fn validate(&mut self) -> Result<&mut (dyn DecodeSlot + 'a), ResponseError> {
        match self {
            Self::Ref(slot) => Ok(&mut **slot),
            Self::Nil => Err(ResponseError::NilDestination),
            Self::Value { type_name } => Err(ResponseError::NotAPointer {
                type_name: *type_name,
            }),
        }
    }
}

impl<'a, T: DeserializeOwned> From<Option<&'a mut T>> for Destination<'a> {
    fn from(target: Option<&'a mut T>) -> Self {
        target.map_or(Self::Nil, Self::to)
    }
}

impl std::fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ref(slot) => f.debug_tuple("Ref").field(&slot.type_name()).finish(),
            Self::Nil => f.write_str("Nil"),
            Self::Value { type_name } => f
                .debug_struct("Value")
                .field("type_name", type_name)
                .finish(),
        }
    }
}

/// A named top-level field and the destination it decodes into.
#[derive(Debug)]
pub struct FieldDest<'a> {
    /// The top-level key to read.
    pub name: String,
    /// Where the key's value is written.
    pub dest: Destination<'a>,
}

impl FieldDest<'_> {
    /// Validates the destination, looks up the field and decodes it.
    pub(crate) fn resolve(&mut self, fields: &RawFields) -> Result<(), ResponseError> {
        let slot = self.dest.validate()?;

        let raw = fields
            .get(&self.name)
            .ok_or_else(|| ResponseError::FieldNotFound {
                name: self.name.clone(),
            })?;

        slot.decode_json(raw.get().as_bytes())
            .map_err(|source| ResponseError::FieldDecode {
                name: self.name.clone(),
                source,
            })
    }
}

/// One argument to [`QueryResponse::scan`](super::QueryResponse::scan).
#[derive(Debug)]
pub enum ScanArg<'a> {
    /// Receives the whole response body.
    Dest(Destination<'a>),
    /// Receives one named top-level field.
    Field(FieldDest<'a>),
}

impl ScanArg<'_> {
    /// Returns the name of the argument's destination type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Dest(dest) => dest.type_name(),
            Self::Field(_) => "FieldDest",
        }
    }
}

impl<'a> From<Destination<'a>> for ScanArg<'a> {
    fn from(dest: Destination<'a>) -> Self {
        Self::Dest(dest)
    }
}

impl<'a> From<FieldDest<'a>> for ScanArg<'a> {
    fn from(field: FieldDest<'a>) -> Self {
        Self::Field(field)
    }
}

/// Decodes the whole response body into `target`.
///
/// # Example
///
/// ```rust
/// use helix_client::{dest, QueryResponse};
///
/// let response = QueryResponse::from_bytes(br#"{"count":3}"#.to_vec());
/// let mut body = serde_json::Value::Null;
/// response.scan([dest(&mut body)]).unwrap();
/// assert_eq!(body["count"], 3);
/// ```
pub fn dest<T: DeserializeOwned>(target: &mut T) -> ScanArg<'_> {
    ScanArg::Dest(Destination::to(target))
}

/// Decodes the top-level field `name` of the response body into `target`.
///
/// # Example
///
/// ```rust
/// use helix_client::{with_dest, QueryResponse};
///
/// let response = QueryResponse::from_bytes(br#"{"count":3,"name":"A"}"#.to_vec());
/// let mut count = 0u32;
/// let mut name = String::new();
/// response
///     .scan([with_dest("count", &mut count), with_dest("name", &mut name)])
///     .unwrap();
/// assert_eq!((count, name.as_str()), (3, "A"));
/// ```
pub fn with_dest<T: DeserializeOwned>(name: impl Into<String>, target: &mut T) -> ScanArg<'_> {
    ScanArg::Field(FieldDest {
        name: name.into(),
        dest: Destination::to(target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_fields(body: &str) -> RawFields {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_decode_slot_replaces_value() {
        let mut count = 1u32;
        count.decode_json(b"7").unwrap();
        assert_eq!(count, 7);

        let mut names = vec!["old".to_string()];
        names.decode_json(br#"["a","b"]"#).unwrap();
        assert_eq!(names, ["a", "b"]);

        assert!(count.decode_json(b"\"seven\"").is_err());
        assert_eq!(count, 7);
    }

    #[test]
    fn test_destination_validation() {
        let mut value = 0i64;
        assert!(Destination::to(&mut value).validate().is_ok());

        assert!(matches!(
            Destination::nil().validate(),
            Err(ResponseError::NilDestination)
        ));
        assert!(matches!(
            Destination::from(None::<&mut i64>).validate(),
            Err(ResponseError::NilDestination)
        ));
        assert!(matches!(
            Destination::by_value(5i64).validate(),
            Err(ResponseError::NotAPointer { type_name: "i64" })
        ));
    }

    #[test]
    fn test_field_resolves_into_target() {
        let fields = raw_fields(r#"{"count":3,"user":{"name":"A"}}"#);

        let mut user = serde_json::Value::Null;
        let mut field = FieldDest {
            name: "user".to_string(),
            dest: Destination::to(&mut user),
        };
        field.resolve(&fields).unwrap();
        assert_eq!(user, json!({"name": "A"}));
    }

    #[test]
    fn test_field_missing_or_mismatched() {
        let fields = raw_fields(r#"{"count":"three"}"#);

        let mut count = 0u32;
        let mut missing = FieldDest {
            name: "total".to_string(),
            dest: Destination::to(&mut count),
        };
        assert!(matches!(
            missing.resolve(&fields),
            Err(ResponseError::FieldNotFound { name }) if name == "total"
        ));

        let mut mismatched = FieldDest {
            name: "count".to_string(),
            dest: Destination::to(&mut count),
        };
        assert!(matches!(
            mismatched.resolve(&fields),
            Err(ResponseError::FieldDecode { name, .. }) if name == "count"
        ));
    }

    #[test]
    fn test_nil_field_destination_fails_before_lookup() {
        let fields = raw_fields("{}");
        let mut field = FieldDest {
            name: "absent".to_string(),
            dest: Destination::nil(),
        };
        assert!(matches!(
            field.resolve(&fields),
            Err(ResponseError::NilDestination)
        ));
    }

    #[test]
    fn test_scan_arg_type_names() {
        let mut count = 0u32;
        assert_eq!(dest(&mut count).type_name(), "u32");
        assert_eq!(with_dest("count", &mut count).type_name(), "FieldDest");
        assert_eq!(ScanArg::from(Destination::nil()).type_name(), "nil");
    }
}
