//! Typed extraction from parsed values.
//!
//! Parsed records are untyped trees. [`from_value`] feeds one through any
//! `Deserialize` implementation, so a consumer can pick out the fields it
//! cares about as a struct:
//!
//! ```rust
//! use hostinfo::{from_value, record, Value};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Keyslot {
//!     #[serde(rename = "type")]
//!     kind: String,
//!     key_bits: u32,
//!     priority: Option<String>,
//! }
//!
//! let slot = Value::from(record!({ "type": "luks2", "key_bits": 512, "digest_id": 0 }));
//! let slot: Keyslot = from_value(slot).unwrap();
//! assert_eq!(slot, Keyslot { kind: "luks2".into(), key_bits: 512, priority: None });
//! ```
//!
//! Values carry no null, so an `Option` is `Some` whenever its field is
//! present and `None` only when the field is missing.

use crate::{Error, Result, Value};
use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{self, DeserializeOwned, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// Deserializes a `T` from a parsed [`Value`].
///
/// Arrays and objects must be consumed completely: a tuple or map visitor
/// that stops early is an error. Enums are not supported.
///
/// # Errors
///
/// Returns [`Error::Custom`] when the value's shape does not match `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Value;

    fn into_deserializer(self) -> Value {
        self
    }
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Integer(i) => visitor.visit_i64(i),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(items) => {
                let mut seq: SeqDeserializer<_, Error> =
                    SeqDeserializer::new(items.into_iter());
                let out = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(out)
            }
            Value::Object(record) => {
                let mut map: MapDeserializer<_, Error> =
                    MapDeserializer::new(record.into_iter());
                let out = visitor.visit_map(&mut map)?;
                map.end()?;
                Ok(out)
            }
        }
    }

    // No null to map to `None`.
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        enum identifier ignored_any
    }
}
