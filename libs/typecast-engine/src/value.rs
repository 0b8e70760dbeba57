use std::collections::BTreeMap;
use std::fmt;

use base64::Engine;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Serialize, Serializer};

/// Dynamically-typed conversion result.
///
/// One variant per primitive kind, plus the composite shapes:
/// - `Slice`: elements converted individually, order preserved
/// - `Map`: string keys, ordered by key
/// - `Pointer`: single-level box around a converted value
/// - `Object`: generic JSON object for descriptors the engine has no shape for
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(u64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    Timestamp(DateTime<FixedOffset>),
    Bytes(Vec<u8>),

    Slice(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Pointer(Box<Value>),
    Object(serde_json::Map<String, serde_json::Value>),
}

impl Value {
    /// Box a value as a pointer.
    pub fn boxed(self) -> Self {
        Value::Pointer(Box::new(self))
    }

    /// The pointee of a `Pointer`, `None` for every other variant.
    pub fn pointee(&self) -> Option<&Value> {
        match self {
            Value::Pointer(inner) => Some(inner),
            _ => None,
        }
    }

    /// Echo-back as a JSON document.
    pub fn to_json(&self) -> serde_json::Value {
        // Serialization of `Value` is infallible: every map key is a string.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(v) => s.serialize_str(v),
            Value::Int(v) | Value::Int64(v) => s.serialize_i64(*v),
            Value::Int8(v) => s.serialize_i8(*v),
            Value::Int16(v) => s.serialize_i16(*v),
            Value::Int32(v) => s.serialize_i32(*v),
            Value::Uint(v) | Value::Uint64(v) => s.serialize_u64(*v),
            Value::Uint8(v) => s.serialize_u8(*v),
            Value::Uint16(v) => s.serialize_u16(*v),
            Value::Uint32(v) => s.serialize_u32(*v),
            Value::Float32(v) => s.serialize_f32(*v),
            Value::Float64(v) => s.serialize_f64(*v),
            Value::Bool(v) => s.serialize_bool(*v),
            Value::Timestamp(t) => s.serialize_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Bytes(b) => s.serialize_str(&base64::engine::general_purpose::STANDARD.encode(b)),
            Value::Slice(items) => s.collect_seq(items),
            Value::Map(entries) => s.collect_map(entries),
            Value::Pointer(inner) => inner.serialize(s),
            Value::Object(fields) => fields.serialize(s),
        }
    }
}

/// Plain rendering used by the CLI: `[1 2 3]`, `map[a:1 b:2]`, `&42`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(v) => f.write_str(v),
            Value::Int(v) | Value::Int64(v) => write!(f, "{v}"),
            Value::Int8(v) => write!(f, "{v}"),
            Value::Int16(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Uint(v) | Value::Uint64(v) => write!(f, "{v}"),
            Value::Uint8(v) => write!(f, "{v}"),
            Value::Uint16(v) => write!(f, "{v}"),
            Value::Uint32(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Timestamp(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
            Value::Slice(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("map[")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{k}:{v}")?;
                }
                f.write_str("]")
            }
            Value::Pointer(inner) => write!(f, "&{inner}"),
            Value::Object(fields) => {
                let text = serde_json::to_string(fields).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn composites_serialize_as_json() {
        let map = BTreeMap::from([
            ("b".to_string(), Value::Int(2)),
            ("a".to_string(), Value::Int(1)),
        ]);
        let value = Value::Slice(vec![Value::Map(map), Value::Bool(true).boxed()]);
        assert_eq!(value.to_json(), json!([{"a": 1, "b": 2}, true]));
    }

    #[test]
    fn bytes_serialize_as_base64() {
        assert_eq!(Value::Bytes(b"hello".to_vec()).to_json(), json!("aGVsbG8="));
    }

    #[test]
    fn timestamp_serializes_as_rfc3339() {
        let t = DateTime::parse_from_rfc3339("2023-01-15T10:30:00Z").unwrap();
        assert_eq!(Value::Timestamp(t).to_json(), json!("2023-01-15T10:30:00Z"));
    }

    #[test]
    fn display_is_plain() {
        let slice = Value::Slice(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_eq!(slice.to_string(), "[1 2 3]");

        let map = Value::Map(BTreeMap::from([
            ("a".to_string(), Value::String("x".into())),
            ("b".to_string(), Value::String("y".into())),
        ]));
        assert_eq!(map.to_string(), "map[a:x b:y]");

        assert_eq!(Value::Int(42).boxed().to_string(), "&42");
        assert_eq!(Value::Float64(1.5).to_string(), "1.5");
    }
}
