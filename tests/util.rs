#![allow(dead_code)]

pub use neon::frontend::{Cursor, Parser, ParseError, ParseErrorKind};
pub use neon::frontend::ast::*;

/// Result of running a single grammar rule on a fresh cursor.
pub struct Parsed<'a, T> {
    pub result: Option<T>,
    pub cursor: Cursor<'a>,
    pub errors: Vec<ParseError>,
}

/// Runs `rule` over `src` with a fresh cursor and parser.
pub fn parse_with<'a, T>(src: &'a str, rule: impl FnOnce(&mut Parser<'a>, &mut Cursor<'a>) -> Option<T>) -> Parsed<'a, T> {
    let mut cursor = Cursor::new("test_data", src);
    let mut parser = Parser::new();
    let result = rule(&mut parser, &mut cursor);
    assert!(cursor.depth() == 0, "Rule left {} open transactions", cursor.depth());
    Parsed {
        result: result,
        cursor: cursor,
        errors: parser.take_errors(),
    }
}

/// Parses a single type definition, panicking if it does not match.
pub fn type_definition(src: &str) -> TypeDefinition<'_> {
    match parse_with(src, |p, c| p.type_definition(c)).result {
        Some(definition) => definition,
        None => panic!("Failed to parse type definition <{:?}>", src),
    }
}

/// Parses a single algebraic type definition, panicking if it does not match.
pub fn adt(src: &str) -> AdtTypeDefinition<'_> {
    match type_definition(src) {
        TypeDefinition::Adt(adt) => adt,
        other => panic!("Expected an algebraic type, got <{:?}>", other),
    }
}

/// Asserts that exactly one diagnostic of the given kind was recorded at line/column.
pub fn assert_error(errors: &[ParseError], kind: ParseErrorKind, loc: (u32, u32)) {
    assert!(errors.len() == 1, "Expected exactly one error, got {:?}", errors);
    assert!(errors[0].kind() == kind, "Error kind <{:?}> did not match expected <{:?}>", errors[0].kind(), kind);
    assert!(errors[0].loc() == loc, "Error location <{:?}> did not match expected <{:?}>", errors[0].loc(), loc);
}
