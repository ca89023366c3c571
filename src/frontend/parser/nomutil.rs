//! Nom based lexical primitives. Each function inspects the start of the given input and returns the matched prefix.
//! None of them consume anything, the cursor advances over the returned slice.

use nom::IResult;
use nom::bytes::complete::{tag, take_while};
use nom::character::complete::satisfy;
use nom::combinator::recognize;
use nom::sequence::pair;

// identifier ([a-z_][a-z_A-Z0-9]*)

pub(super) fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_lowercase()
}

// type name ([A-Z][a-zA-Z0-9_]*)

pub(super) fn is_type_name_start(c: char) -> bool {
    c.is_ascii_uppercase()
}

pub(super) fn is_name_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

pub(super) fn is_indent_char(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Matches a run of whitespace, including newlines. May be empty.
pub(super) fn whitespace(input: &str) -> &str {
    let result: IResult<&str, &str> = take_while(char::is_whitespace)(input);
    result.map_or("", |(_, matched)| matched)
}

/// Matches a run of indentation characters. May be empty.
pub(super) fn indentation(input: &str) -> &str {
    let result: IResult<&str, &str> = take_while(is_indent_char)(input);
    result.map_or("", |(_, matched)| matched)
}

/// Matches the given literal.
pub(super) fn literal<'a>(input: &'a str, literal: &str) -> Option<&'a str> {
    let result: IResult<&'a str, &'a str> = tag(literal)(input);
    result.ok().map(|(_, matched)| matched)
}

/// Matches one character accepted by `initial` followed by any number of characters accepted by `rest`.
pub(super) fn pattern<'a>(input: &'a str, initial: impl Fn(char) -> bool, rest: impl Fn(char) -> bool) -> Option<&'a str> {
    let result: IResult<&'a str, &'a str> = recognize(pair(satisfy(initial), take_while(rest)))(input);
    result.ok().map(|(_, matched)| matched)
}
