//! Type scope: maps type names to descriptors and allocates user type ids.

use std::rc::Rc;
use rustc_hash::FxHashMap;
use tracing::debug;
use crate::shared::typed_ids::TypeId;
use crate::frontend::ast::TypeDefinition;
use crate::frontend::checker::types::{Type, UserDefinedType};
use crate::frontend::checker::error::{CheckError, CheckErrorKind, CheckResult};

/// Hands out user defined type ids, starting right above the builtin range.
#[derive(Debug)]
pub struct TypeIdCounter {
    last: TypeId,
}

impl TypeIdCounter {
    pub fn new() -> Self {
        TypeIdCounter {
            last: TypeId::LAST_BUILTIN,
        }
    }
    /// Returns the next unused id.
    pub fn next(self: &mut Self) -> TypeId {
        self.last = TypeId::new(self.last.into_usize() + 1);
        self.last
    }
}

impl Default for TypeIdCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Type names visible to the checker. Each checking session owns one scope and its id counter.
#[derive(Debug)]
pub struct TypeScope<'a> {
    types   : FxHashMap<&'a str, Rc<Type<'a>>>,
    counter : TypeIdCounter,
}

impl<'a> TypeScope<'a> {

    /// Creates a scope containing the builtin types `Int` and `String`.
    pub fn new() -> Self {
        let mut types = FxHashMap::default();
        types.insert("Int", Rc::new(Type::Int));
        types.insert("String", Rc::new(Type::String));
        TypeScope {
            types   : types,
            counter : TypeIdCounter::new(),
        }
    }

    pub fn get(self: &Self, name: &str) -> Option<&Rc<Type<'a>>> {
        self.types.get(name)
    }

    pub fn contains(self: &Self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(self: &Self) -> usize {
        self.types.len()
    }

    pub fn is_empty(self: &Self) -> bool {
        self.types.is_empty()
    }

    /// The id counter user defined types of this scope are numbered with.
    pub fn counter_mut(self: &mut Self) -> &mut TypeIdCounter {
        &mut self.counter
    }

    /// Adds a type under the given name.
    pub fn insert(self: &mut Self, name: &'a str, ty: Rc<Type<'a>>) -> CheckResult {
        if self.types.contains_key(name) {
            return Err(CheckError::new(CheckErrorKind::DuplicateType(name.to_string())));
        }
        self.types.insert(name, ty);
        Ok(())
    }

    /// Checks a type definition and adds it to the scope, returning the id of the defined type.
    ///
    /// An alias shares the descriptor of the aliased type. An algebraic type gets a fresh id and is checked
    /// against the current scope, so it may only refer to types defined before it.
    pub fn define(self: &mut Self, definition: &TypeDefinition<'a>) -> CheckResult<TypeId> {
        let name = definition.name();
        if self.contains(name) {
            return Err(CheckError::new(CheckErrorKind::DuplicateType(name.to_string())));
        }
        let ty = match definition {
            TypeDefinition::Alias(alias) => {
                self.get(alias.type_name).cloned().ok_or_else(|| CheckError::new(CheckErrorKind::UndefinedType {
                    type_name   : alias.type_name.to_string(),
                    owner       : alias.alias_name.to_string(),
                    tag         : None,
                }))?
            }
            TypeDefinition::Adt(adt) => {
                let mut user_defined = UserDefinedType::new(adt.clone(), &mut self.counter);
                user_defined.check(self)?;
                Rc::new(Type::UserDefined(user_defined))
            }
        };
        let type_id = ty.type_id();
        debug!(name, %type_id, "defined type");
        self.insert(name, ty)?;
        Ok(type_id)
    }
}

impl<'a> Default for TypeScope<'a> {
    fn default() -> Self {
        Self::new()
    }
}
