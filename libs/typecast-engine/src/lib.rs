pub mod catalog;
pub mod convert;
pub mod descriptor;
pub mod error;
pub mod kind;
pub mod primitives;
pub mod registry;
pub mod timestamp;
pub mod value;

pub use catalog::supported_types;
pub use convert::Converter;
pub use descriptor::TypeDescriptor;
pub use error::{ConvertError, ErrorKind, Position, RegistryError};
pub use kind::PrimitiveKind;
pub use registry::{ConverterFn, Form, Registry, RegistryBuilder, TypeKey};
pub use value::Value;
