//! Neon, a small statically typed language.
//!
//! This crate contains the declaration parser (type aliases, algebraic types, function signatures and
//! deconstructors) and the checker that resolves algebraic type members against a scope of known types.

pub mod frontend;
pub mod shared;

pub use crate::shared::error::Error;
pub use crate::shared::typed_ids::TypeId;

use crate::frontend::{parse_module, check_module, TypeScope};

/// One stop shop to `parse_module` and `check_module` given Neon source code.
///
/// Returns the scope with all type definitions of the source added.
pub fn check_source<'a>(src: &'a str, filename: &str) -> Result<TypeScope<'a>, Error> {
    let module = parse_module(src, filename)?;
    let mut scope = TypeScope::new();
    check_module(&module, &mut scope)?;
    Ok(scope)
}
