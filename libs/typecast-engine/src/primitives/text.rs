//! Infallible passthrough kinds: `string` and `[]byte`.

use crate::error::{ConvertError, RegistryError};
use crate::kind::PrimitiveKind;
use crate::registry::RegistryBuilder;
use crate::value::Value;

pub fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder.register_pair(PrimitiveKind::String, parse_string, parse_string_ptr)?;
    builder.register_pair(PrimitiveKind::Bytes, parse_bytes, parse_bytes_ptr)
}

pub fn parse_string(input: &str) -> Result<Value, ConvertError> {
    Ok(Value::String(input.to_string()))
}

pub fn parse_string_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_string(input).map(Value::boxed)
}

pub fn parse_bytes(input: &str) -> Result<Value, ConvertError> {
    Ok(Value::Bytes(input.as_bytes().to_vec()))
}

pub fn parse_bytes_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_bytes(input).map(Value::boxed)
}
