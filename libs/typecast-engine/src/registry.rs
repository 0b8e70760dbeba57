use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use crate::error::{ConvertError, RegistryError};
use crate::kind::PrimitiveKind;
use crate::value::Value;
use crate::{primitives, timestamp};

/// Primitive parser: raw text → value of one fixed kind.
///
/// Pure and deterministic; no state is captured.
pub type ConverterFn = fn(&str) -> Result<Value, ConvertError>;

/// Whether an entry produces the bare value or a boxed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Form {
    Value,
    Pointer,
}

/// Registry key: exact type identity, no fuzzy matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey {
    pub kind: PrimitiveKind,
    pub form: Form,
}

impl TypeKey {
    pub const fn value(kind: PrimitiveKind) -> Self {
        Self { kind, form: Form::Value }
    }

    pub const fn pointer(kind: PrimitiveKind) -> Self {
        Self { kind, form: Form::Pointer }
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.form {
            Form::Value => write!(f, "{}", self.kind),
            Form::Pointer => write!(f, "*{}", self.kind),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  RegistryBuilder
// ═══════════════════════════════════════════════════════════════

/// Mutable staging area for a `Registry`.
///
/// Each primitive family installs its entries through `register_pair`;
/// `build()` freezes the result.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    converters: HashMap<TypeKey, ConverterFn>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a converter. A key can be registered only once.
    pub fn register(&mut self, key: TypeKey, converter: ConverterFn) -> Result<(), RegistryError> {
        match self.converters.entry(key) {
            Entry::Occupied(_) => Err(RegistryError::Duplicate(key)),
            Entry::Vacant(slot) => {
                slot.insert(converter);
                Ok(())
            }
        }
    }

    /// Insert the value-form and pointer-form converters of one kind.
    pub fn register_pair(
        &mut self,
        kind: PrimitiveKind,
        value: ConverterFn,
        pointer: ConverterFn,
    ) -> Result<(), RegistryError> {
        self.register(TypeKey::value(kind), value)?;
        self.register(TypeKey::pointer(kind), pointer)
    }

    /// Freeze into a read-only registry.
    ///
    /// Fails if any primitive kind lacks either form.
    pub fn build(self) -> Result<Registry, RegistryError> {
        for kind in PrimitiveKind::ALL {
            for key in [TypeKey::value(kind), TypeKey::pointer(kind)] {
                if !self.converters.contains_key(&key) {
                    return Err(RegistryError::Missing(key));
                }
            }
        }
        tracing::debug!(entries = self.converters.len(), "converter registry built");
        Ok(Registry {
            converters: self.converters,
        })
    }
}

// ═══════════════════════════════════════════════════════════════
//  Registry
// ═══════════════════════════════════════════════════════════════

/// Frozen mapping from type identity to primitive parser.
///
/// Built once by the process entry point and shared behind an `Arc`;
/// never mutated afterwards, so lookups need no locking.
#[derive(Debug)]
pub struct Registry {
    converters: HashMap<TypeKey, ConverterFn>,
}

impl Registry {
    /// Registry with every built-in primitive family installed.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::new();
        primitives::register_all(&mut builder)?;
        timestamp::register(&mut builder)?;
        builder.build()
    }

    /// Exact-match lookup.
    pub fn lookup(&self, key: TypeKey) -> Option<ConverterFn> {
        self.converters.get(&key).copied()
    }

    /// Look up `key` and run its converter on `value`.
    pub fn convert(&self, key: TypeKey, value: &str) -> Result<Value, ConvertError> {
        let converter = self
            .lookup(key)
            .ok_or_else(|| ConvertError::unsupported("type", key))?;
        converter(value)
    }

    /// Registered keys in catalogue order.
    pub fn keys(&self) -> Vec<TypeKey> {
        let mut keys: Vec<TypeKey> = self.converters.keys().copied().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn always_true(_: &str) -> Result<Value, ConvertError> {
        Ok(Value::Bool(true))
    }

    #[test]
    fn builtin_has_both_forms_for_every_kind() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.len(), PrimitiveKind::ALL.len() * 2);
        for kind in PrimitiveKind::ALL {
            assert!(registry.lookup(TypeKey::value(kind)).is_some(), "{kind}");
            assert!(registry.lookup(TypeKey::pointer(kind)).is_some(), "*{kind}");
        }
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut builder = RegistryBuilder::new();
        let key = TypeKey::value(PrimitiveKind::Bool);
        builder.register(key, always_true).unwrap();
        assert_eq!(builder.register(key, always_true), Err(RegistryError::Duplicate(key)));
    }

    #[test]
    fn incomplete_builder_fails_to_build() {
        let mut builder = RegistryBuilder::new();
        builder
            .register_pair(PrimitiveKind::Bool, always_true, always_true)
            .unwrap();
        let err = builder.build().unwrap_err();
        assert_eq!(err, RegistryError::Missing(TypeKey::value(PrimitiveKind::String)));
    }

    #[test]
    fn convert_dispatches_by_exact_key() {
        let registry = Registry::builtin().unwrap();
        let v = registry.convert(TypeKey::value(PrimitiveKind::Int8), "127").unwrap();
        assert_eq!(v, Value::Int8(127));

        let p = registry.convert(TypeKey::pointer(PrimitiveKind::Int8), "-5").unwrap();
        assert_eq!(p, Value::Int8(-5).boxed());

        let err = registry.convert(TypeKey::pointer(PrimitiveKind::Int8), "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn keys_are_sorted_and_stable() {
        let registry = Registry::builtin().unwrap();
        let keys = registry.keys();
        assert_eq!(keys.first(), Some(&TypeKey::value(PrimitiveKind::String)));
        assert_eq!(keys, registry.keys());
        assert_eq!(TypeKey::pointer(PrimitiveKind::Timestamp).to_string(), "*time.Time");
    }
}
