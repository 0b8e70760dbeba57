use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::{ConvertError, RegistryError};
use crate::kind::PrimitiveKind;
use crate::registry::RegistryBuilder;
use crate::value::Value;

use super::int_error;

pub fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder.register_pair(PrimitiveKind::Uint, parse_uint, parse_uint_ptr)?;
    builder.register_pair(PrimitiveKind::Uint8, parse_uint8, parse_uint8_ptr)?;
    builder.register_pair(PrimitiveKind::Uint16, parse_uint16, parse_uint16_ptr)?;
    builder.register_pair(PrimitiveKind::Uint32, parse_uint32, parse_uint32_ptr)?;
    builder.register_pair(PrimitiveKind::Uint64, parse_uint64, parse_uint64_ptr)
}

/// Base-10 unsigned parse. No sign is accepted, not even `+`.
fn unsigned<T>(input: &str, kind: PrimitiveKind) -> Result<T, ConvertError>
where
    T: FromStr<Err = ParseIntError>,
{
    if input.starts_with('+') {
        return Err(ConvertError::parse(input, kind.keyword(), "invalid syntax"));
    }
    input.parse::<T>().map_err(|e| int_error(input, kind.keyword(), &e))
}

pub fn parse_uint(input: &str) -> Result<Value, ConvertError> {
    unsigned(input, PrimitiveKind::Uint).map(Value::Uint)
}

pub fn parse_uint8(input: &str) -> Result<Value, ConvertError> {
    unsigned(input, PrimitiveKind::Uint8).map(Value::Uint8)
}

pub fn parse_uint16(input: &str) -> Result<Value, ConvertError> {
    unsigned(input, PrimitiveKind::Uint16).map(Value::Uint16)
}

pub fn parse_uint32(input: &str) -> Result<Value, ConvertError> {
    unsigned(input, PrimitiveKind::Uint32).map(Value::Uint32)
}

pub fn parse_uint64(input: &str) -> Result<Value, ConvertError> {
    unsigned(input, PrimitiveKind::Uint64).map(Value::Uint64)
}

pub fn parse_uint_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_uint(input).map(Value::boxed)
}

pub fn parse_uint8_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_uint8(input).map(Value::boxed)
}

pub fn parse_uint16_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_uint16(input).map(Value::boxed)
}

pub fn parse_uint32_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_uint32(input).map(Value::boxed)
}

pub fn parse_uint64_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_uint64(input).map(Value::boxed)
}
