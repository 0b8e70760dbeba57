use crate::error::{ConvertError, RegistryError};
use crate::kind::PrimitiveKind;
use crate::registry::RegistryBuilder;
use crate::value::Value;

pub fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder.register_pair(PrimitiveKind::Float32, parse_float32, parse_float32_ptr)?;
    builder.register_pair(PrimitiveKind::Float64, parse_float64, parse_float64_ptr)
}

/// `inf` / `infinity` with an optional sign, any case.
fn is_infinity_literal(input: &str) -> bool {
    let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

pub fn parse_float32(input: &str) -> Result<Value, ConvertError> {
    let target = PrimitiveKind::Float32.keyword();
    let v: f32 = input
        .parse()
        .map_err(|_| ConvertError::parse(input, target, "invalid syntax"))?;
    if v.is_infinite() && !is_infinity_literal(input) {
        return Err(ConvertError::range(input, target));
    }
    Ok(Value::Float32(v))
}

pub fn parse_float64(input: &str) -> Result<Value, ConvertError> {
    let target = PrimitiveKind::Float64.keyword();
    let v: f64 = input
        .parse()
        .map_err(|_| ConvertError::parse(input, target, "invalid syntax"))?;
    if v.is_infinite() && !is_infinity_literal(input) {
        return Err(ConvertError::range(input, target));
    }
    Ok(Value::Float64(v))
}

pub fn parse_float32_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_float32(input).map(Value::boxed)
}

pub fn parse_float64_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_float64(input).map(Value::boxed)
}
