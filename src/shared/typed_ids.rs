//! New-typed numeric identifiers.

use std::fmt::{self, Debug, Display};

/// Macro to implement typesafe ids.
macro_rules! impl_typed_id {
    ($name:ident, $string:expr) => {
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[doc = $string]
        pub struct $name(usize);
        impl $name {
            /// Converts the typed id into a usize.
            pub const fn into_usize(self: Self) -> usize {
                self.0
            }
            /// Creates a new typed id from given usize.
            pub const fn new(input: usize) -> Self {
                Self(input)
            }
        }
        impl From<$name> for usize {
            fn from(input: $name) -> usize {
                input.0
            }
        }
        impl From<usize> for $name {
            fn from(input: usize) -> $name {
                Self(input)
            }
        }
        impl Debug for $name {
            fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
        impl Display for $name {
            fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_typed_id!(TypeId, "Unique numeric id of a type.");

impl TypeId {
    /// Id of the builtin `Int` type.
    pub const INT: TypeId = TypeId::new(1);
    /// Id of the builtin `String` type.
    pub const STRING: TypeId = TypeId::new(2);
    /// Largest id reserved for builtin types. User defined types are numbered above it.
    pub const LAST_BUILTIN: TypeId = TypeId::new(63);

    /// Whether this id belongs to a builtin type.
    pub fn is_builtin(self: Self) -> bool {
        self <= Self::LAST_BUILTIN
    }
}
