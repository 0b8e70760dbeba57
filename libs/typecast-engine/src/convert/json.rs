//! Helpers for the JSON-backed conversion paths.

use crate::error::ConvertError;
use crate::kind::PrimitiveKind;
use crate::value::Value;

/// Text of a JSON value: strings unquoted, everything else as compact JSON
/// (`1.5`, `true`, `null`, `[1,2]`).
pub(crate) fn natural_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON number → 64-bit `int`.
///
/// Non-integral numbers are rejected rather than truncated.
pub(crate) fn integer(number: &serde_json::Number) -> Result<i64, ConvertError> {
    let target = PrimitiveKind::Int.keyword();
    if let Some(v) = number.as_i64() {
        return Ok(v);
    }
    if number.is_u64() {
        return Err(ConvertError::range(number.to_string(), target));
    }
    let f = number.as_f64().unwrap_or(f64::NAN);
    if !f.is_finite() || f.fract() != 0.0 {
        return Err(ConvertError::parse(number.to_string(), target, "not an integer"));
    }
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if f < i64::MIN as f64 || f >= i64::MAX as f64 {
        return Err(ConvertError::range(number.to_string(), target));
    }
    Ok(f as i64)
}

/// A JSON value of the wrong type for `kind`.
pub(crate) fn mismatch(value: &serde_json::Value, kind: PrimitiveKind, expected: &str) -> ConvertError {
    ConvertError::parse(natural_text(value), kind.keyword(), format!("expected a JSON {expected}"))
}

/// Generic decode for descriptors with no known shape. JSON `null` is an
/// empty object.
pub(crate) fn decode_object(value: &str) -> Result<Value, ConvertError> {
    serde_json::from_str::<Option<serde_json::Map<String, serde_json::Value>>>(value)
        .map(|fields| Value::Object(fields.unwrap_or_default()))
        .map_err(|e| ConvertError::malformed("struct", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn number(v: serde_json::Value) -> serde_json::Number {
        match v {
            serde_json::Value::Number(n) => n,
            other => panic!("not a number: {other}"),
        }
    }

    #[test]
    fn integral_floats_are_accepted() {
        assert_eq!(integer(&number(json!(42))).unwrap(), 42);
        assert_eq!(integer(&number(json!(-7))).unwrap(), -7);
        assert_eq!(integer(&number(json!(3.0))).unwrap(), 3);
    }

    #[test]
    fn fractions_and_overflow_are_rejected() {
        assert_eq!(integer(&number(json!(1.5))).unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!(integer(&number(json!(u64::MAX))).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(integer(&number(json!(1e300))).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn natural_text_of_scalars() {
        assert_eq!(natural_text(&json!("a")), "a");
        assert_eq!(natural_text(&json!(1)), "1");
        assert_eq!(natural_text(&json!(1.5)), "1.5");
        assert_eq!(natural_text(&json!(true)), "true");
        assert_eq!(natural_text(&json!(null)), "null");
        assert_eq!(natural_text(&json!([1, "x"])), r#"[1,"x"]"#);
    }

    #[test]
    fn object_decode_requires_an_object() {
        let v = decode_object(r#"{"name":"John","age":30}"#).unwrap();
        assert_eq!(v.to_json(), json!({"name": "John", "age": 30}));

        assert_eq!(decode_object("null").unwrap(), Value::Object(serde_json::Map::new()));

        for bad in ["[1,2]", "42", "not json", ""] {
            let err = decode_object(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput, "{bad:?}");
            assert!(err.to_string().starts_with("failed to parse struct: "));
        }
    }
}
