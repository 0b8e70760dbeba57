use std::fmt;

/// Closed set of scalar target kinds a descriptor can name directly.
///
/// Declaration order is the catalogue order used by `supported_types()`
/// and by `Registry::keys()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    String,
    /// 64-bit signed integer.
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    /// 64-bit unsigned integer.
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Bool,
    Timestamp,
    Bytes,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 16] = [
        PrimitiveKind::String,
        PrimitiveKind::Int,
        PrimitiveKind::Int8,
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::Uint,
        PrimitiveKind::Uint8,
        PrimitiveKind::Uint16,
        PrimitiveKind::Uint32,
        PrimitiveKind::Uint64,
        PrimitiveKind::Float32,
        PrimitiveKind::Float64,
        PrimitiveKind::Bool,
        PrimitiveKind::Timestamp,
        PrimitiveKind::Bytes,
    ];

    /// Canonical descriptor keyword.
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Int8 => "int8",
            PrimitiveKind::Int16 => "int16",
            PrimitiveKind::Int32 => "int32",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::Uint => "uint",
            PrimitiveKind::Uint8 => "uint8",
            PrimitiveKind::Uint16 => "uint16",
            PrimitiveKind::Uint32 => "uint32",
            PrimitiveKind::Uint64 => "uint64",
            PrimitiveKind::Float32 => "float32",
            PrimitiveKind::Float64 => "float64",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Timestamp => "time.Time",
            PrimitiveKind::Bytes => "[]byte",
        }
    }

    /// Exact keyword match, including the `timestamp` and `bytes` aliases.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "timestamp" => return Some(PrimitiveKind::Timestamp),
            "bytes" => return Some(PrimitiveKind::Bytes),
            _ => {}
        }
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
