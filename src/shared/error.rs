use std::fmt::{self, Display};
use crate::frontend::parser::error::{ParseError, Location};
use crate::frontend::checker::error::CheckError;

/// An error generated while parsing or type checking a program.
#[derive(Clone, Debug)]
pub enum Error {
    ParseError(ParseError),
    CheckError(CheckError),
}

impl Error {
    /// Source location of the error, if known. Type check errors do not carry a location.
    pub fn location(self: &Self) -> Option<&Location> {
        match self {
            Self::ParseError(e) => Some(e.location()),
            Self::CheckError(_) => None,
        }
    }
}

impl Display for Error {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(e) => write!(f, "{}", e),
            Self::CheckError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error { }

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Error {
        Error::ParseError(error)
    }
}

impl From<CheckError> for Error {
    fn from(error: CheckError) -> Error {
        Error::CheckError(error)
    }
}
