use std::collections::BTreeMap;
use std::fmt;

use crate::descriptor::TypeDescriptor;
use crate::error::ConvertError;
use crate::kind::PrimitiveKind;
use crate::value::Value;

use super::json;

/// The map shapes the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapShape {
    StringToInt,
    StringToString,
}

impl MapShape {
    pub const ALL: [MapShape; 2] = [MapShape::StringToInt, MapShape::StringToString];

    pub const fn value_kind(self) -> PrimitiveKind {
        match self {
            MapShape::StringToInt => PrimitiveKind::Int,
            MapShape::StringToString => PrimitiveKind::String,
        }
    }

    pub fn resolve(key: &TypeDescriptor, value: &TypeDescriptor) -> Option<Self> {
        if !key.is_primitive(PrimitiveKind::String) {
            return None;
        }
        Self::ALL.into_iter().find(|shape| value.is_primitive(shape.value_kind()))
    }
}

impl fmt::Display for MapShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map[{}]{}", PrimitiveKind::String, self.value_kind())
    }
}

/// Decode `value` as a JSON object into the shape named by `target`.
///
/// The shape is checked before the value is looked at. JSON `null` is an
/// empty map.
pub(crate) fn convert(
    value: &str,
    target: &TypeDescriptor,
    key: &TypeDescriptor,
    value_type: &TypeDescriptor,
) -> Result<Value, ConvertError> {
    let shape =
        MapShape::resolve(key, value_type).ok_or_else(|| ConvertError::unsupported("map type", target))?;
    let object: Option<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(value).map_err(|e| ConvertError::malformed("map", e))?;

    let mut entries = BTreeMap::new();
    for (k, v) in object.unwrap_or_default() {
        let converted = match (shape, &v) {
            (MapShape::StringToInt, serde_json::Value::Number(n)) => json::integer(n).map(Value::Int),
            (MapShape::StringToInt, other) => Err(json::mismatch(other, PrimitiveKind::Int, "number")),
            (MapShape::StringToString, other) => Ok(Value::String(json::natural_text(other))),
        };
        let converted = converted.map_err(|e| e.at_key(k.as_str()))?;
        entries.insert(k, converted);
    }
    Ok(Value::Map(entries))
}
