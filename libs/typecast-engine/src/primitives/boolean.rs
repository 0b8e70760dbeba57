use crate::error::{ConvertError, RegistryError};
use crate::kind::PrimitiveKind;
use crate::registry::RegistryBuilder;
use crate::value::Value;

pub fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder.register_pair(PrimitiveKind::Bool, parse_bool, parse_bool_ptr)
}

/// `true`/`false` in any case, or `1`/`0`. Nothing else.
pub fn parse_bool(input: &str) -> Result<Value, ConvertError> {
    if input == "1" || input.eq_ignore_ascii_case("true") {
        Ok(Value::Bool(true))
    } else if input == "0" || input.eq_ignore_ascii_case("false") {
        Ok(Value::Bool(false))
    } else {
        Err(ConvertError::parse(
            input,
            PrimitiveKind::Bool.keyword(),
            "expected true, false, 1 or 0",
        ))
    }
}

pub fn parse_bool_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_bool(input).map(Value::boxed)
}
