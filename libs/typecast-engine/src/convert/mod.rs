//! Descriptor-driven conversion.
//!
//! The descriptor is parsed once into a `TypeDescriptor` tree and dispatched
//! by pattern matching:
//! - primitives go to the registry's value-form entry
//! - slices try a JSON array first, then split on a delimiter
//! - maps require a JSON object and one of the `MapShape`s
//! - pointers recurse and box the result
//! - unknown names decode as a generic JSON object

mod json;
pub mod map;
pub mod slice;

use std::sync::Arc;

use crate::descriptor::TypeDescriptor;
use crate::error::ConvertError;
use crate::registry::{Registry, TypeKey};
use crate::value::Value;

pub use map::MapShape;
pub use slice::{DEFAULT_DELIMITER, SliceElement};

/// Conversion engine. Cheap to clone; all clones share one registry.
#[derive(Debug, Clone)]
pub struct Converter {
    registry: Arc<Registry>,
}

impl Converter {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Convert `value` to the type named by `descriptor`.
    pub fn convert(&self, value: &str, descriptor: &str) -> Result<Value, ConvertError> {
        let target = TypeDescriptor::parse(descriptor)?;
        tracing::trace!(descriptor, "converting");
        self.convert_to(value, &target)
    }

    /// Convert against an already parsed descriptor.
    pub fn convert_to(&self, value: &str, target: &TypeDescriptor) -> Result<Value, ConvertError> {
        match target {
            TypeDescriptor::Primitive(kind) => self.registry.convert(TypeKey::value(*kind), value),
            TypeDescriptor::Slice(elem) => slice::convert(&self.registry, value, elem),
            TypeDescriptor::Map { key, value: value_type } => map::convert(value, target, key, value_type),
            TypeDescriptor::Pointer(inner) => self.convert_to(value, inner).map(Value::boxed),
            TypeDescriptor::Object(_) => json::decode_object(value),
        }
    }

    /// Split `value` on `delimiter` into a slice. `descriptor` must start
    /// with `[]`; no JSON parsing is attempted.
    pub fn convert_with_delimiter(
        &self,
        value: &str,
        descriptor: &str,
        delimiter: &str,
    ) -> Result<Value, ConvertError> {
        let elem = descriptor
            .strip_prefix("[]")
            .ok_or(ConvertError::DelimiterRequiresSlice)?;
        let elem = TypeDescriptor::parse_component(elem)?;
        tracing::trace!(descriptor, delimiter, "converting with delimiter");
        slice::convert_delimited(&self.registry, value, &elem, delimiter)
    }

    /// See [`crate::catalog::supported_types`].
    pub fn supported_types(&self) -> Vec<String> {
        crate::catalog::supported_types()
    }
}
