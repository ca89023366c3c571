//! Backtracking, memoizing recursive-descent parser for Neon declarations.

pub mod error;
pub mod types;
mod cursor;
mod memo;
mod nomutil;

pub use cursor::{Cursor, CursorState, Transaction};
pub use memo::{MemoTable, TokenKind};

use tracing::{debug, trace};
use crate::frontend::ast::*;
use error::{ParseError, ParseErrorKind, ParseResult};
use types::ParsedModule;

/// Grammar rules over a [`Cursor`].
///
/// Every rule returns `None` when it does not match and leaves the cursor where it was, apart from whitespace
/// skipped by a failing primitive match. Rules that found a production incomplete after committing to it (e.g. a
/// missing closing bracket) additionally record a [`ParseError`], see [`Parser::errors`].
#[derive(Debug, Default)]
pub struct Parser<'a> {
    memo    : MemoTable<'a>,
    errors  : Vec<ParseError>,
}

impl<'a> Parser<'a> {

    pub fn new() -> Self {
        Parser {
            memo    : MemoTable::new(),
            errors  : Vec::new(),
        }
    }

    /// Diagnostics recorded so far.
    pub fn errors(self: &Self) -> &[ParseError] {
        &self.errors
    }

    /// Removes and returns the recorded diagnostics.
    pub fn take_errors(self: &mut Self) -> Vec<ParseError> {
        std::mem::take(&mut self.errors)
    }

    /// The memo table shared by all primitive matches of this parser.
    pub fn memo(self: &Self) -> &MemoTable<'a> {
        &self.memo
    }

    fn error(self: &mut Self, cursor: &Cursor<'a>, kind: ParseErrorKind) {
        let error = ParseError::new(kind, cursor.location());
        debug!(%error, "parse error");
        self.errors.push(error);
    }

    // primitives

    /// Matches the literal `keyword`.
    pub fn keyword(self: &mut Self, cursor: &mut Cursor<'a>, keyword: &'static str) -> bool {
        let position = cursor.position();
        if self.memo.memoized(position, TokenKind::Keyword, Some(keyword), cursor).is_some() {
            return true;
        }
        if !cursor.match_keyword(keyword) {
            return false;
        }
        self.memo.memoize(position, TokenKind::Keyword, cursor, keyword).is_some()
    }

    /// Matches a value identifier `[a-z_][a-z_A-Z0-9]*`.
    pub fn identifier(self: &mut Self, cursor: &mut Cursor<'a>) -> Option<&'a str> {
        let position = cursor.position();
        if let Some(token) = self.memo.memoized(position, TokenKind::Identifier, None, cursor) {
            return Some(token);
        }
        let token = cursor.match_pattern(nomutil::is_identifier_start, nomutil::is_name_char)?;
        self.memo.memoize(position, TokenKind::Identifier, cursor, token)
    }

    /// Matches a type name `[A-Z][a-zA-Z0-9_]*`.
    pub fn type_name(self: &mut Self, cursor: &mut Cursor<'a>) -> Option<&'a str> {
        let position = cursor.position();
        if let Some(token) = self.memo.memoized(position, TokenKind::TypeName, None, cursor) {
            return Some(token);
        }
        let token = cursor.match_pattern(nomutil::is_type_name_start, nomutil::is_name_char)?;
        self.memo.memoize(position, TokenKind::TypeName, cursor, token)
    }

    // type (Int, [Int], {String:Int}, ())

    pub fn type_declaration(self: &mut Self, cursor: &mut Cursor<'a>) -> Option<TypeName<'a>> {
        if let Some(name) = self.type_name(cursor) {
            return Some(TypeName::simple(name));
        }

        {
            let mut txn = cursor.transaction();
            if self.keyword(&mut txn, "[") {
                if let Some(name) = self.type_name(&mut txn) {
                    if !self.keyword(&mut txn, "]") {
                        self.error(&txn, ParseErrorKind::ExpectedCloseBracket);
                        return None;
                    }
                    txn.commit();
                    return Some(TypeName::array(name));
                }
            }
        }

        {
            let mut txn = cursor.transaction();
            if self.keyword(&mut txn, "{") {
                if let Some(key_name) = self.type_name(&mut txn) {
                    if !self.keyword(&mut txn, ":") {
                        self.error(&txn, ParseErrorKind::ExpectedColon);
                        return None;
                    }
                    let value_name = match self.type_name(&mut txn) {
                        Some(value_name) => value_name,
                        None => {
                            self.error(&txn, ParseErrorKind::ExpectedTypeName);
                            return None;
                        }
                    };
                    if !self.keyword(&mut txn, "}") {
                        self.error(&txn, ParseErrorKind::ExpectedCloseBrace);
                        return None;
                    }
                    txn.commit();
                    return Some(TypeName::map(key_name, value_name));
                }
            }
        }

        if self.keyword(cursor, "()") {
            return Some(TypeName::unit());
        }

        None
    }

    /// Greedily matches type declarations. An empty result is `None`.
    fn type_declarations(self: &mut Self, cursor: &mut Cursor<'a>) -> Option<Vec<TypeName<'a>>> {
        let mut result = Vec::new();
        while let Some(type_name) = self.type_declaration(cursor) {
            result.push(type_name);
        }
        if result.is_empty() { None } else { Some(result) }
    }

    // function signature (name :: Inputs* [= Outputs*])

    pub fn function_signature(self: &mut Self, cursor: &mut Cursor<'a>) -> Option<FunctionSignature<'a>> {
        trace!(position = cursor.position(), "function_signature");
        let mut txn = cursor.transaction();
        let name = self.identifier(&mut txn)?;
        if !self.keyword(&mut txn, "::") {
            return None;
        }
        let inputs = self.type_declarations(&mut txn);
        let outputs = if self.keyword(&mut txn, "=") {
            self.type_declarations(&mut txn)
        } else {
            None
        };
        txn.commit();
        Some(FunctionSignature { name, inputs, outputs })
    }

    // type definition (type Alias Type | type Name: <indented Tag Type lines>)

    pub fn type_definition(self: &mut Self, cursor: &mut Cursor<'a>) -> Option<TypeDefinition<'a>> {
        trace!(position = cursor.position(), "type_definition");
        let mut txn = cursor.transaction();
        if !self.keyword(&mut txn, "type") {
            return None;
        }

        let name = match self.type_name(&mut txn) {
            Some(name) => name,
            None => {
                self.error(&txn, ParseErrorKind::ExpectedTypeName);
                return None;
            }
        };

        if let Some(type_name) = self.type_name(&mut txn) {
            txn.commit();
            return Some(TypeDefinition::Alias(TypeAlias { alias_name: name, type_name }));
        }

        if !self.keyword(&mut txn, ":") {
            self.error(&txn, ParseErrorKind::ExpectedColon);
            return None;
        }

        let mut members = Vec::new();
        let mut block_indent = None;
        loop {
            let mut line = txn.transaction();
            let indent = match line.match_indent() {
                Some(indent) => indent,
                None => break,
            };
            match block_indent {
                None => block_indent = Some(indent),
                Some(expected) if indent > expected => {
                    self.error(&line, ParseErrorKind::UnexpectedIndent);
                    return None;
                }
                Some(expected) if indent < expected => {
                    // the shallower line belongs to the caller
                    line.commit();
                    break;
                }
                Some(_) => { }
            }
            let alias_name = match self.type_name(&mut line) {
                Some(alias_name) => alias_name,
                None => break,
            };
            let type_name = match self.type_name(&mut line) {
                Some(type_name) => type_name,
                None => break,
            };
            line.commit();
            members.push(AdtMember { alias_name, type_name });
        }

        if members.is_empty() {
            return None;
        }
        txn.commit();
        Some(TypeDefinition::Adt(AdtTypeDefinition { name, members }))
    }

    // deconstructor ((Type binding (Nested binding)))

    pub fn deconstructor(self: &mut Self, cursor: &mut Cursor<'a>) -> Option<Deconstructor<'a>> {
        let mut txn = cursor.transaction();
        if !self.keyword(&mut txn, "(") {
            return None;
        }
        let type_name = self.type_name(&mut txn)?;

        let mut bindings = Vec::new();
        loop {
            if let Some(nested) = self.deconstructor(&mut txn) {
                bindings.push(DeconstructorElement::Deconstructor(nested));
                continue;
            }
            match self.identifier(&mut txn) {
                Some(var_name) => {
                    let index = bindings.len();
                    bindings.push(DeconstructorElement::Binding(DeconstructorBinding { index, var_name }));
                }
                None => break,
            }
        }

        if !self.keyword(&mut txn, ")") {
            self.error(&txn, ParseErrorKind::ExpectedCloseParen);
            return None;
        }
        txn.commit();
        Some(Deconstructor { type_name, bindings })
    }

    // function

    /// Matches a function name. Function bodies have no grammar yet, so the rule never completes and always rolls
    /// back, returning `None`.
    pub fn function(self: &mut Self, cursor: &mut Cursor<'a>) -> Option<FunctionSignature<'a>> {
        let mut txn = cursor.transaction();
        let name = self.identifier(&mut txn)?;
        trace!(name, "function body grammar missing");
        None
    }

    // declaration

    /// Matches a top level declaration: a type definition or a function signature.
    pub fn declaration(self: &mut Self, cursor: &mut Cursor<'a>) -> Option<Declaration<'a>> {
        if let Some(definition) = self.type_definition(cursor) {
            return Some(definition.into());
        }
        self.function_signature(cursor).map(Declaration::from)
    }
}

/// Parses Neon source code into a module of top level declarations.
///
/// Diagnostics recorded while parsing declarations that still matched are kept in the module, see
/// [`ParsedModule::diagnostics`]. Fails on the first declaration that cannot be parsed, returning the first
/// diagnostic recorded while attempting it, else the earliest diagnostic kept so far, else a syntax error at the
/// position where parsing stopped.
pub fn parse_module<'a>(src: &'a str, filename: &str) -> ParseResult<ParsedModule<'a>> {
    let mut cursor = Cursor::new(filename, src);
    let mut parser = Parser::new();
    let mut declarations = Vec::new();
    let mut diagnostics = Vec::new();
    loop {
        cursor.skip_whitespace();
        if cursor.eof() {
            break;
        }
        match parser.declaration(&mut cursor) {
            Some(declaration) => {
                declarations.push(declaration);
                diagnostics.extend(parser.take_errors());
            }
            None => {
                let error = parser.take_errors().into_iter().chain(diagnostics).next();
                return Err(error.unwrap_or_else(|| ParseError::new(ParseErrorKind::SyntaxError, cursor.location())));
            }
        }
    }
    debug!(filename, declarations = declarations.len(), diagnostics = diagnostics.len(), "parsed module");
    Ok(ParsedModule::new(filename, declarations, diagnostics))
}
