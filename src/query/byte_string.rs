//! Recognizes byte strings among serializable values.
//!
//! `Vec<u8>`, `&[u8]` and `[u8; N]` serialize as sequences of `u8`, so once
//! converted to a `serde_json::Value` they cannot be told apart from any
//! other array of small numbers. [`byte_string`] runs a serializer that only
//! accepts byte shapes and bails out on the first call that is not one.

use std::fmt;

use serde::ser::{self, Impossible, Serialize, SerializeSeq, SerializeTuple};

/// Returns the bytes of `value` if it serializes as a non-empty byte string.
pub(crate) fn byte_string<T: Serialize + ?Sized>(value: &T) -> Option<Vec<u8>> {
    value.serialize(ByteSerializer { element: false }).ok()
}

#[derive(Debug)]
struct NotBytes;

impl fmt::Display for NotBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value is not a byte string")
    }
}

impl std::error::Error for NotBytes {}

impl ser::Error for NotBytes {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        Self
    }
}

/// At the top level accepts byte sequences; as an element accepts one `u8`.
#[derive(Clone, Copy)]
struct ByteSerializer {
    element: bool,
}

/// Collects the elements of a sequence that is still a byte string.
struct ByteCollector {
    bytes: Vec<u8>,
}

impl ByteCollector {
    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NotBytes> {
        let byte = value.serialize(ByteSerializer { element: true })?;
        self.bytes.extend(byte);
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, NotBytes> {
        if self.bytes.is_empty() {
            Err(NotBytes)
        } else {
            Ok(self.bytes)
        }
    }
}

impl SerializeSeq for ByteCollector {
    type Ok = Vec<u8>;
    type Error = NotBytes;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NotBytes> {
        self.push(value)
    }

    fn end(self) -> Result<Vec<u8>, NotBytes> {
        self.finish()
    }
}

impl SerializeTuple for ByteCollector {
    type Ok = Vec<u8>;
    type Error = NotBytes;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NotBytes> {
        self.push(value)
    }

    fn end(self) -> Result<Vec<u8>, NotBytes> {
        self.finish()
    }
}

impl ByteSerializer {
    fn collector(self, len: Option<usize>) -> Result<ByteCollector, NotBytes> {
        if self.element {
            return Err(NotBytes);
        }
        Ok(ByteCollector {
            bytes: Vec::with_capacity(len.unwrap_or(0)),
        })
    }
}

impl ser::Serializer for ByteSerializer {
    type Ok = Vec<u8>;
    type Error = NotBytes;
    type SerializeSeq = ByteCollector;
    type SerializeTuple = ByteCollector;
    type SerializeTupleStruct = Impossible<Vec<u8>, NotBytes>;
    type SerializeTupleVariant = Impossible<Vec<u8>, NotBytes>;
    type SerializeMap = Impossible<Vec<u8>, NotBytes>;
    type SerializeStruct = Impossible<Vec<u8>, NotBytes>;
    type SerializeStructVariant = Impossible<Vec<u8>, NotBytes>;

    fn serialize_u8(self, v: u8) -> Result<Vec<u8>, NotBytes> {
        if self.element {
            Ok(vec![v])
        } else {
            Err(NotBytes)
        }
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Vec<u8>, NotBytes> {
        if self.element || v.is_empty() {
            Err(NotBytes)
        } else {
            Ok(v.to_vec())
        }
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<ByteCollector, NotBytes> {
        self.collector(len)
    }

    fn serialize_tuple(self, len: usize) -> Result<ByteCollector, NotBytes> {
        self.collector(Some(len))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Vec<u8>, NotBytes> {
        value.serialize(self)
    }

    fn serialize_bool(self, _v: bool) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_i8(self, _v: i8) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_i16(self, _v: i16) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_i32(self, _v: i32) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_i64(self, _v: i64) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_u16(self, _v: u16) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_u32(self, _v: u32) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_u64(self, _v: u64) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_f32(self, _v: f32) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_f64(self, _v: f64) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_char(self, _v: char) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_str(self, _v: &str) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_none(self) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, _value: &T) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_unit(self) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Vec<u8>, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, NotBytes> {
        Err(NotBytes)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, NotBytes> {
        Err(NotBytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_byte_containers_are_recognized() {
        let expected = br#"{"id":"1"}"#.to_vec();

        assert_eq!(byte_string(&expected), Some(expected.clone()));
        assert_eq!(byte_string(expected.as_slice()), Some(expected.clone()));
        assert_eq!(byte_string(b"{}"), Some(b"{}".to_vec()));
    }

    #[test]
    fn test_other_values_are_not_byte_strings() {
        assert_eq!(byte_string(&vec![1u32, 2, 3]), None);
        assert_eq!(byte_string(&vec![1i8, 2]), None);
        assert_eq!(byte_string(&vec![vec![1u8]]), None);
        assert_eq!(byte_string("{}"), None);
        assert_eq!(byte_string(&json!([1, 2])), None);
        assert_eq!(byte_string(&json!({"a": 1})), None);
        assert_eq!(byte_string(&Some(vec![1u8])), None);
    }

    #[test]
    fn test_empty_byte_sequence_is_not_a_byte_string() {
        assert_eq!(byte_string::<[u8]>(&[]), None);
        assert_eq!(byte_string(&Vec::<u8>::new()), None);
    }
}
