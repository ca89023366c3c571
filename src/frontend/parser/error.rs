use std::fmt::{self, Display};

/// Represents the various possible parser error-kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input that matches no declaration.
    SyntaxError,
    ExpectedTypeName,
    ExpectedColon,
    ExpectedCloseBracket,
    ExpectedCloseBrace,
    ExpectedCloseParen,
    /// A member line indented deeper than the first member of its block.
    UnexpectedIndent,
}

/// A position in a named source file. Line and column are 1-based, offset is the 0-based byte offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub filename: String,
    pub line    : u32,
    pub column  : u32,
    pub offset  : usize,
}

impl Display for Location {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// An error reported by the parser (e.g. a missing closing bracket).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    location: Location,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, location: Location) -> ParseError {
        Self { kind, location }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> ParseErrorKind {
        self.kind
    }
    /// Where the error occured.
    pub fn location(self: &Self) -> &Location {
        &self.location
    }
    /// Compute 1-based line/column number.
    pub fn loc(self: &Self) -> (u32, u32) {
        (self.location.line, self.location.column)
    }
}

impl Display for ParseError {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self.kind {
            ParseErrorKind::SyntaxError => "Syntax error",
            ParseErrorKind::ExpectedTypeName => "Expected a typename.",
            ParseErrorKind::ExpectedColon => "Expected ':'",
            ParseErrorKind::ExpectedCloseBracket => "Expected ']'",
            ParseErrorKind::ExpectedCloseBrace => "Expected '}'",
            ParseErrorKind::ExpectedCloseParen => "Expected ')'",
            ParseErrorKind::UnexpectedIndent => "Unexpected indent.",
        };
        write!(f, "{} {}", self.location, message)
    }
}

impl std::error::Error for ParseError { }

pub type ParseResult<T = ()> = Result<T, ParseError>;
