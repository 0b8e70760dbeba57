use std::fmt;

use crate::registry::TypeKey;

/// Classification of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Text does not lexically match the target type.
    Parse,
    /// Numeric text is well-formed but outside the target width.
    Range,
    /// Descriptor (or a resolved element/value type) is not supported.
    UnsupportedType,
    /// JSON was required but the input is not valid JSON of the right shape.
    MalformedInput,
    /// A slice element or map value failed; see `ConvertError::root_kind`.
    Element,
}

/// Location of a failing element inside a composite value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Index(usize),
    Key(String),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Index(i) => write!(f, "element {i}"),
            Position::Key(k) => write!(f, "map value for key {k:?}"),
        }
    }
}

/// Conversion failure. Returned by every engine entry point; composite
/// conversions are all-or-nothing and report the first failing position.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("parsing {input:?} as {target}: {reason}")]
    Parse {
        input: String,
        target: &'static str,
        reason: String,
    },

    #[error("parsing {input:?} as {target}: value out of range")]
    Range { input: String, target: &'static str },

    #[error("unsupported {what}: {descriptor}")]
    Unsupported {
        what: &'static str,
        descriptor: String,
    },

    #[error("type descriptor is empty")]
    EmptyDescriptor,

    #[error("delimiter can only be used with slice types")]
    DelimiterRequiresSlice,

    #[error("failed to parse {context}: {source}")]
    Malformed {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to convert {position}: {source}")]
    Element {
        position: Position,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    pub fn parse(input: impl Into<String>, target: &'static str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            target,
            reason: reason.into(),
        }
    }

    pub fn range(input: impl Into<String>, target: &'static str) -> Self {
        Self::Range {
            input: input.into(),
            target,
        }
    }

    pub fn unsupported(what: &'static str, descriptor: impl fmt::Display) -> Self {
        Self::Unsupported {
            what,
            descriptor: descriptor.to_string(),
        }
    }

    pub fn malformed(context: &'static str, source: serde_json::Error) -> Self {
        Self::Malformed { context, source }
    }

    /// Wrap as the failure of the slice element at `index`.
    pub fn at_index(self, index: usize) -> Self {
        Self::Element {
            position: Position::Index(index),
            source: Box::new(self),
        }
    }

    /// Wrap as the failure of the map value under `key`.
    pub fn at_key(self, key: impl Into<String>) -> Self {
        Self::Element {
            position: Position::Key(key.into()),
            source: Box::new(self),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Parse { .. } => ErrorKind::Parse,
            ConvertError::Range { .. } => ErrorKind::Range,
            ConvertError::Unsupported { .. }
            | ConvertError::EmptyDescriptor
            | ConvertError::DelimiterRequiresSlice => ErrorKind::UnsupportedType,
            ConvertError::Malformed { .. } => ErrorKind::MalformedInput,
            ConvertError::Element { .. } => ErrorKind::Element,
        }
    }

    /// Kind of the innermost error, looking through element wrappers.
    pub fn root_kind(&self) -> ErrorKind {
        match self {
            ConvertError::Element { source, .. } => source.root_kind(),
            other => other.kind(),
        }
    }

    /// Position of the failing element, if this is an element error.
    pub fn position(&self) -> Option<&Position> {
        match self {
            ConvertError::Element { position, .. } => Some(position),
            _ => None,
        }
    }
}

/// Failure while assembling a converter registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("converter already registered for {0}")]
    Duplicate(TypeKey),

    #[error("no converter registered for {0}")]
    Missing(TypeKey),
}
