//! Type checker for parsed type definitions.

pub mod error;
pub mod types;
pub mod scope;

use crate::frontend::parser::types::ParsedModule;
use error::CheckResult;
pub use scope::{TypeScope, TypeIdCounter};
pub use types::{Type, UserDefinedType};

/// Returns a fresh scope containing the builtin types.
pub fn new_scope<'a>() -> TypeScope<'a> {
    TypeScope::new()
}

/// Checks and defines all type definitions of the module in declaration order. Stops at the first error.
pub fn check_module<'a>(module: &ParsedModule<'a>, scope: &mut TypeScope<'a>) -> CheckResult {
    for definition in module.type_definitions() {
        scope.define(definition)?;
    }
    Ok(())
}
