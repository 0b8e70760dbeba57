use std::fmt;

use crate::error::ConvertError;
use crate::kind::PrimitiveKind;

/// Deepest slice/map/pointer nesting a descriptor may use.
pub const MAX_DEPTH: usize = 64;

/// Parsed type descriptor.
///
/// Grammar, tried in this order:
/// - a primitive keyword (`int`, `float64`, `time.Time`, `[]byte`, ...)
/// - `[]<T>`: slice
/// - `map[<K>]<V>`: map
/// - `*<T>`: pointer
/// - anything else: opaque object name, decoded as a generic JSON object
///
/// Parsing only checks the grammar. Whether a slice element or map shape is
/// supported is decided at conversion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Slice(Box<TypeDescriptor>),
    Map {
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
    },
    Pointer(Box<TypeDescriptor>),
    Object(String),
}

impl TypeDescriptor {
    /// Parse a top-level descriptor. An empty string is rejected.
    pub fn parse(descriptor: &str) -> Result<Self, ConvertError> {
        if descriptor.is_empty() {
            return Err(ConvertError::EmptyDescriptor);
        }
        Self::parse_component(descriptor)
    }

    /// Parse a nested component. Empty components become an empty object
    /// name, which no composite accepts.
    pub(crate) fn parse_component(descriptor: &str) -> Result<Self, ConvertError> {
        Self::parse_nested(descriptor, 0)
    }

    fn parse_nested(descriptor: &str, depth: usize) -> Result<Self, ConvertError> {
        if let Some(kind) = PrimitiveKind::from_keyword(descriptor) {
            return Ok(TypeDescriptor::Primitive(kind));
        }
        let composite = descriptor.starts_with("[]")
            || descriptor.starts_with("map[")
            || descriptor.starts_with('*');
        if composite && depth >= MAX_DEPTH {
            return Err(ConvertError::unsupported(
                "type",
                format!("nesting deeper than {MAX_DEPTH} levels"),
            ));
        }
        let depth = depth + 1;
        if let Some(elem) = descriptor.strip_prefix("[]") {
            return Ok(TypeDescriptor::Slice(Box::new(Self::parse_nested(elem, depth)?)));
        }
        if let Some(rest) = descriptor.strip_prefix("map[") {
            let close = matching_bracket(rest)
                .ok_or_else(|| ConvertError::unsupported("map type", descriptor))?;
            let key = Self::parse_nested(&rest[..close], depth)?;
            let value = Self::parse_nested(&rest[close + 1..], depth)?;
            return Ok(TypeDescriptor::Map {
                key: Box::new(key),
                value: Box::new(value),
            });
        }
        if let Some(inner) = descriptor.strip_prefix('*') {
            return Ok(TypeDescriptor::Pointer(Box::new(Self::parse_nested(inner, depth)?)));
        }
        Ok(TypeDescriptor::Object(descriptor.to_string()))
    }

    pub fn is_primitive(&self, kind: PrimitiveKind) -> bool {
        matches!(self, TypeDescriptor::Primitive(k) if *k == kind)
    }
}

/// Byte offset of the `]` closing a `map[` key, honouring nested brackets.
fn matching_bracket(rest: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in rest.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Canonical rendering; aliases print as their canonical keyword.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(kind) => write!(f, "{kind}"),
            TypeDescriptor::Slice(elem) => write!(f, "[]{elem}"),
            TypeDescriptor::Map { key, value } => write!(f, "map[{key}]{value}"),
            TypeDescriptor::Pointer(inner) => write!(f, "*{inner}"),
            TypeDescriptor::Object(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn prim(kind: PrimitiveKind) -> Box<TypeDescriptor> {
        Box::new(TypeDescriptor::Primitive(kind))
    }

    #[test]
    fn keywords_win_over_prefixes() {
        assert_eq!(
            TypeDescriptor::parse("[]byte").unwrap(),
            TypeDescriptor::Primitive(PrimitiveKind::Bytes)
        );
        assert_eq!(
            TypeDescriptor::parse("time.Time").unwrap(),
            TypeDescriptor::Primitive(PrimitiveKind::Timestamp)
        );
    }

    #[test]
    fn composites_nest() {
        assert_eq!(
            TypeDescriptor::parse("[]*int").unwrap(),
            TypeDescriptor::Slice(Box::new(TypeDescriptor::Pointer(prim(PrimitiveKind::Int))))
        );
        assert_eq!(
            TypeDescriptor::parse("map[string][]int").unwrap(),
            TypeDescriptor::Map {
                key: prim(PrimitiveKind::String),
                value: Box::new(TypeDescriptor::Slice(prim(PrimitiveKind::Int))),
            }
        );
        assert_eq!(
            TypeDescriptor::parse("**bool").unwrap(),
            TypeDescriptor::Pointer(Box::new(TypeDescriptor::Pointer(prim(PrimitiveKind::Bool))))
        );
    }

    #[test]
    fn nested_brackets_in_map_key() {
        let d = TypeDescriptor::parse("map[[2]int]string").unwrap();
        assert_eq!(d.to_string(), "map[[2]int]string");
    }

    #[test]
    fn unknown_names_are_objects() {
        assert_eq!(
            TypeDescriptor::parse("Person").unwrap(),
            TypeDescriptor::Object("Person".into())
        );
        assert_eq!(
            TypeDescriptor::parse("[]").unwrap(),
            TypeDescriptor::Slice(Box::new(TypeDescriptor::Object(String::new())))
        );
    }

    #[test]
    fn malformed_input() {
        assert_eq!(
            TypeDescriptor::parse("").unwrap_err().kind(),
            ErrorKind::UnsupportedType
        );
        let err = TypeDescriptor::parse("map[string").unwrap_err();
        assert_eq!(err.to_string(), "unsupported map type: map[string");
    }

    #[test]
    fn nesting_is_capped() {
        let at_limit = format!("{}int", "*".repeat(MAX_DEPTH));
        assert!(TypeDescriptor::parse(&at_limit).is_ok());

        for deep in [
            format!("{}int", "*".repeat(MAX_DEPTH + 1)),
            format!("{}int", "*".repeat(20_000)),
            format!("{}int", "[]".repeat(20_000)),
            format!("{}int", "map[string]".repeat(20_000)),
            format!("{}string{}", "map[".repeat(20_000), "]int".repeat(20_000)),
        ] {
            let err = TypeDescriptor::parse(&deep).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedType);
            assert_eq!(err.to_string(), "unsupported type: nesting deeper than 64 levels");
        }
    }

    #[test]
    fn display_uses_canonical_keywords() {
        let d = TypeDescriptor::parse("[]timestamp").unwrap();
        assert_eq!(d.to_string(), "[]time.Time");
        assert!(TypeDescriptor::parse("int").unwrap().is_primitive(PrimitiveKind::Int));
    }
}
