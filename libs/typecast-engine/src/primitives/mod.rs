//! Scalar parsers, one module per primitive family.
//!
//! Every family exposes a `register` function that installs a value-form
//! and a pointer-form converter for each of its kinds.

pub mod boolean;
pub mod float;
pub mod int;
pub mod text;
pub mod uint;

use std::num::{IntErrorKind, ParseIntError};

use crate::error::{ConvertError, RegistryError};
use crate::registry::RegistryBuilder;

/// Install every scalar family except timestamps.
pub fn register_all(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    text::register(builder)?;
    int::register(builder)?;
    uint::register(builder)?;
    float::register(builder)?;
    boolean::register(builder)
}

/// Map a std integer parse failure to a range or syntax error.
pub(crate) fn int_error(input: &str, target: &'static str, e: &ParseIntError) -> ConvertError {
    match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConvertError::range(input, target),
        IntErrorKind::Empty => ConvertError::parse(input, target, "empty input"),
        _ => ConvertError::parse(input, target, "invalid syntax"),
    }
}
