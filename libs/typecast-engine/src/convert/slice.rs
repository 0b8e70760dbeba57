use crate::descriptor::TypeDescriptor;
use crate::error::ConvertError;
use crate::kind::PrimitiveKind;
use crate::registry::{Registry, TypeKey};
use crate::value::Value;

use super::json;

/// Separator used when a slice value is not a JSON array.
pub const DEFAULT_DELIMITER: &str = ",";

/// Element types a slice descriptor may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceElement {
    String,
    Int,
    Float64,
    Bool,
}

impl SliceElement {
    pub const ALL: [SliceElement; 4] = [
        SliceElement::String,
        SliceElement::Int,
        SliceElement::Float64,
        SliceElement::Bool,
    ];

    pub const fn kind(self) -> PrimitiveKind {
        match self {
            SliceElement::String => PrimitiveKind::String,
            SliceElement::Int => PrimitiveKind::Int,
            SliceElement::Float64 => PrimitiveKind::Float64,
            SliceElement::Bool => PrimitiveKind::Bool,
        }
    }

    pub fn resolve(elem: &TypeDescriptor) -> Result<Self, ConvertError> {
        Self::ALL
            .into_iter()
            .find(|e| elem.is_primitive(e.kind()))
            .ok_or_else(|| ConvertError::unsupported("slice element type", elem))
    }

    fn decode_json(self, item: &serde_json::Value) -> Result<Value, ConvertError> {
        match (self, item) {
            (SliceElement::String, item) => Ok(Value::String(json::natural_text(item))),
            (SliceElement::Int, serde_json::Value::Number(n)) => json::integer(n).map(Value::Int),
            (SliceElement::Float64, serde_json::Value::Number(n)) => n
                .as_f64()
                .map(Value::Float64)
                .ok_or_else(|| json::mismatch(item, self.kind(), "number")),
            (SliceElement::Bool, serde_json::Value::Bool(b)) => Ok(Value::Bool(*b)),
            (SliceElement::Int | SliceElement::Float64, other) => {
                Err(json::mismatch(other, self.kind(), "number"))
            }
            (SliceElement::Bool, other) => Err(json::mismatch(other, self.kind(), "boolean")),
        }
    }
}

/// JSON array first, `DEFAULT_DELIMITER`-separated text otherwise.
/// JSON `null` is an empty slice.
pub(crate) fn convert(registry: &Registry, value: &str, elem: &TypeDescriptor) -> Result<Value, ConvertError> {
    let element = SliceElement::resolve(elem)?;
    match serde_json::from_str::<Option<Vec<serde_json::Value>>>(value) {
        Ok(None) => Ok(Value::Slice(Vec::new())),
        Ok(Some(items)) => {
            tracing::trace!(elements = items.len(), "slice value is a JSON array");
            items
                .iter()
                .enumerate()
                .map(|(i, item)| element.decode_json(item).map_err(|e| e.at_index(i)))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Slice)
        }
        Err(_) => split(registry, value, element, DEFAULT_DELIMITER),
    }
}

/// Delimiter-separated text only; no JSON attempt.
pub(crate) fn convert_delimited(
    registry: &Registry,
    value: &str,
    elem: &TypeDescriptor,
    delimiter: &str,
) -> Result<Value, ConvertError> {
    let element = SliceElement::resolve(elem)?;
    split(registry, value, element, delimiter)
}

/// Split on `delimiter` (an empty one yields single characters), trim
/// each segment and parse it with the element's registry entry.
fn split(registry: &Registry, value: &str, element: SliceElement, delimiter: &str) -> Result<Value, ConvertError> {
    let segments: Vec<&str> = if delimiter.is_empty() {
        value
            .char_indices()
            .map(|(i, c)| &value[i..i + c.len_utf8()])
            .collect()
    } else {
        value.split(delimiter).collect()
    };

    let key = TypeKey::value(element.kind());
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| registry.convert(key, segment.trim()).map_err(|e| e.at_index(i)))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Slice)
}
