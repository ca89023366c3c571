use std::fmt::{self, Display};

/// Represents the various possible type check error-kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckErrorKind {
    /// A member or alias refers to a type that is not in scope. `tag` is the member tag, `None` for aliases.
    UndefinedType {
        type_name   : String,
        owner       : String,
        tag         : Option<String>,
    },
    /// A type with this name is already in scope.
    DuplicateType(String),
}

/// An error reported by the type checker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckError {
    kind: CheckErrorKind,
}

impl CheckError {
    pub(crate) fn new(kind: CheckErrorKind) -> CheckError {
        Self { kind }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &CheckErrorKind {
        &self.kind
    }
}

impl Display for CheckError {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CheckErrorKind::UndefinedType { type_name, owner, tag: Some(tag) } => write!(f, "Unknown type name '{}' in '{}': '{} {}'", type_name, owner, tag, type_name),
            CheckErrorKind::UndefinedType { type_name, owner, tag: None } => write!(f, "Unknown type name '{}' in alias '{}'", type_name, owner),
            CheckErrorKind::DuplicateType(name) => write!(f, "Type '{}' is already defined", name),
        }
    }
}

impl std::error::Error for CheckError { }

pub type CheckResult<T = ()> = Result<T, CheckError>;
