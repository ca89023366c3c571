//! Compiler frontend. Parses declarations and type checks type definitions.

pub mod ast;

pub mod parser;
pub use self::parser::{parse_module, Parser, Cursor};
pub use self::parser::error::{ParseError, ParseErrorKind, ParseResult, Location};
pub use self::parser::types::ParsedModule;

pub mod checker;
pub use self::checker::{check_module, new_scope, TypeScope, Type, UserDefinedType};
pub use self::checker::error::{CheckError, CheckErrorKind, CheckResult};
