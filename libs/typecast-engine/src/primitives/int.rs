use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::{ConvertError, RegistryError};
use crate::kind::PrimitiveKind;
use crate::registry::RegistryBuilder;
use crate::value::Value;

use super::int_error;

pub fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder.register_pair(PrimitiveKind::Int, parse_int, parse_int_ptr)?;
    builder.register_pair(PrimitiveKind::Int8, parse_int8, parse_int8_ptr)?;
    builder.register_pair(PrimitiveKind::Int16, parse_int16, parse_int16_ptr)?;
    builder.register_pair(PrimitiveKind::Int32, parse_int32, parse_int32_ptr)?;
    builder.register_pair(PrimitiveKind::Int64, parse_int64, parse_int64_ptr)
}

/// Base-10 signed parse with an optional `+`/`-` sign.
fn signed<T>(input: &str, kind: PrimitiveKind) -> Result<T, ConvertError>
where
    T: FromStr<Err = ParseIntError>,
{
    input.parse::<T>().map_err(|e| int_error(input, kind.keyword(), &e))
}

pub fn parse_int(input: &str) -> Result<Value, ConvertError> {
    signed(input, PrimitiveKind::Int).map(Value::Int)
}

pub fn parse_int8(input: &str) -> Result<Value, ConvertError> {
    signed(input, PrimitiveKind::Int8).map(Value::Int8)
}

pub fn parse_int16(input: &str) -> Result<Value, ConvertError> {
    signed(input, PrimitiveKind::Int16).map(Value::Int16)
}

pub fn parse_int32(input: &str) -> Result<Value, ConvertError> {
    signed(input, PrimitiveKind::Int32).map(Value::Int32)
}

pub fn parse_int64(input: &str) -> Result<Value, ConvertError> {
    signed(input, PrimitiveKind::Int64).map(Value::Int64)
}

pub fn parse_int_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_int(input).map(Value::boxed)
}

pub fn parse_int8_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_int8(input).map(Value::boxed)
}

pub fn parse_int16_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_int16(input).map(Value::boxed)
}

pub fn parse_int32_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_int32(input).map(Value::boxed)
}

pub fn parse_int64_ptr(input: &str) -> Result<Value, ConvertError> {
    parse_int64(input).map(Value::boxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn width_limits_are_enforced() {
        assert_eq!(parse_int8("127").unwrap(), Value::Int8(127));
        assert_eq!(parse_int8("-128").unwrap(), Value::Int8(-128));
        assert_eq!(parse_int8("128").unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(parse_int8("-129").unwrap_err().kind(), ErrorKind::Range);

        assert_eq!(parse_int16("32767").unwrap(), Value::Int16(i16::MAX));
        assert_eq!(parse_int16("32768").unwrap_err().kind(), ErrorKind::Range);

        assert_eq!(parse_int32("-2147483648").unwrap(), Value::Int32(i32::MIN));
        assert_eq!(parse_int32("2147483648").unwrap_err().kind(), ErrorKind::Range);

        assert_eq!(parse_int64("9223372036854775807").unwrap(), Value::Int64(i64::MAX));
        assert_eq!(parse_int("9223372036854775808").unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn syntax_errors() {
        for bad in ["not_a_number", "1.5", "", " 42", "0x10", "1_000", "+"] {
            let err = parse_int(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "{bad:?}");
        }
    }

    #[test]
    fn sign_prefix() {
        assert_eq!(parse_int("+42").unwrap(), Value::Int(42));
        assert_eq!(parse_int("-42").unwrap(), Value::Int(-42));
    }

    #[test]
    fn message_names_input_and_target() {
        let err = parse_int8("128").unwrap_err();
        assert_eq!(err.to_string(), r#"parsing "128" as int8: value out of range"#);
        let err = parse_int("abc").unwrap_err();
        assert_eq!(err.to_string(), r#"parsing "abc" as int: invalid syntax"#);
    }

    #[test]
    fn pointer_form_boxes_only_on_success() {
        assert_eq!(parse_int32_ptr("7").unwrap(), Value::Int32(7).boxed());
        assert!(parse_int32_ptr("seven").is_err());
    }
}
