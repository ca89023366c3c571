//! Type descriptors.

use std::rc::Rc;
use rustc_hash::FxHashMap;
use crate::shared::typed_ids::TypeId;
use crate::frontend::ast::AdtTypeDefinition;
use crate::frontend::checker::scope::{TypeScope, TypeIdCounter};
use crate::frontend::checker::error::{CheckError, CheckErrorKind, CheckResult};

/// A built-in or user defined type.
#[derive(Clone, Debug, PartialEq)]
pub enum Type<'a> {
    Int,
    String,
    UserDefined(UserDefinedType<'a>),
}

impl<'a> Type<'a> {
    pub fn type_id(self: &Self) -> TypeId {
        match self {
            Type::Int => TypeId::INT,
            Type::String => TypeId::STRING,
            Type::UserDefined(user_defined) => user_defined.type_id,
        }
    }
    /// Returns the user defined type, if this is one.
    pub fn as_user_defined(self: &Self) -> Option<&UserDefinedType<'a>> {
        match self {
            Type::UserDefined(user_defined) => Some(user_defined),
            Type::Int | Type::String => None,
        }
    }
}

/// An algebraic type created from its definition. Members are filled in by a successful [`UserDefinedType::check`].
#[derive(Clone, Debug, PartialEq)]
pub struct UserDefinedType<'a> {
    type_id     : TypeId,
    definition  : AdtTypeDefinition<'a>,
    members     : Vec<Rc<Type<'a>>>,
    member_names: FxHashMap<&'a str, Rc<Type<'a>>>,
}

impl<'a> UserDefinedType<'a> {
    /// Creates an unchecked type with a fresh id from the counter.
    pub fn new(definition: AdtTypeDefinition<'a>, counter: &mut TypeIdCounter) -> Self {
        UserDefinedType {
            type_id     : counter.next(),
            definition  : definition,
            members     : Vec::new(),
            member_names: FxHashMap::default(),
        }
    }
    pub fn type_id(self: &Self) -> TypeId {
        self.type_id
    }
    pub fn name(self: &Self) -> &'a str {
        self.definition.name
    }
    pub fn definition(self: &Self) -> &AdtTypeDefinition<'a> {
        &self.definition
    }
    /// Resolved member types in declaration order. Empty until checked.
    pub fn members(self: &Self) -> &[Rc<Type<'a>>] {
        &self.members
    }
    /// Resolved member type by member tag.
    pub fn member(self: &Self, tag: &str) -> Option<&Rc<Type<'a>>> {
        self.member_names.get(tag)
    }
    pub fn member_names(self: &Self) -> &FxHashMap<&'a str, Rc<Type<'a>>> {
        &self.member_names
    }

    /// Resolves every member type in `scope`. Fails on the first unknown type name and leaves the members empty.
    pub fn check(self: &mut Self, scope: &TypeScope<'a>) -> CheckResult {
        let mut members = Vec::with_capacity(self.definition.members.len());
        for member in &self.definition.members {
            match scope.get(member.type_name) {
                Some(resolved) => members.push((member.alias_name, resolved.clone())),
                None => {
                    return Err(CheckError::new(CheckErrorKind::UndefinedType {
                        type_name   : member.type_name.to_string(),
                        owner       : self.definition.name.to_string(),
                        tag         : Some(member.alias_name.to_string()),
                    }));
                }
            }
        }
        self.members = members.iter().map(|(_, resolved)| resolved.clone()).collect();
        self.member_names = members.into_iter().collect();
        Ok(())
    }
}
