use crate::frontend::ast::{Declaration, TypeDefinition, FunctionSignature};
use crate::frontend::parser::error::ParseError;

/// Parsed source-file AST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedModule<'a> {
    filename    : String,
    items       : Vec<Declaration<'a>>,
    diagnostics : Vec<ParseError>,
}

impl<'a> ParsedModule<'a> {
    pub(crate) fn new(filename: &str, items: Vec<Declaration<'a>>, diagnostics: Vec<ParseError>) -> Self {
        ParsedModule {
            filename    : filename.to_string(),
            items       : items,
            diagnostics : diagnostics,
        }
    }
    /// Name of the file the module was parsed from.
    pub fn filename(self: &Self) -> &str {
        &self.filename
    }
    /// Returns an iterator over all top level declarations.
    pub fn iter(self: &Self) -> impl Iterator<Item = &Declaration<'a>> {
        self.items.iter()
    }
    pub fn len(self: &Self) -> usize {
        self.items.len()
    }
    pub fn is_empty(self: &Self) -> bool {
        self.items.is_empty()
    }
    /// Diagnostics recorded by productions that were abandoned while the surrounding declaration still matched,
    /// in source order.
    pub fn diagnostics(self: &Self) -> &[ParseError] {
        &self.diagnostics
    }
    /// Returns an iterator over the type definitions, in declaration order.
    pub fn type_definitions(self: &Self) -> impl Iterator<Item = &TypeDefinition<'a>> {
        self.items.iter().filter_map(|item| item.as_type_definition())
    }
    /// Returns an iterator over the function signatures, in declaration order.
    pub fn signatures(self: &Self) -> impl Iterator<Item = &FunctionSignature<'a>> {
        self.items.iter().filter_map(|item| item.as_function_signature())
    }
}
