//! Source cursor with nested transactional save/restore.

use std::fmt::{self, Display};
use std::ops::{Deref, DerefMut};
use crate::frontend::parser::error::Location;
use crate::frontend::parser::nomutil;

/// Read position within the source. Line and column are 1-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CursorState {
    pub position: usize,
    pub line    : u32,
    pub column  : u32,
}

impl CursorState {
    fn start() -> Self {
        CursorState {
            position: 0,
            line    : 1,
            column  : 1,
        }
    }
}

/// Tracks the read position over an immutable input buffer.
///
/// `begin` saves the current state, `rollback` restores the most recently saved state and `commit` discards it.
/// Rules should prefer [`Cursor::transaction`], which resolves the saved state on every exit path.
#[derive(Debug)]
pub struct Cursor<'a> {
    data    : &'a str,
    filename: String,
    state   : CursorState,
    stack   : Vec<CursorState>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `data`. The filename is only used for diagnostics.
    pub fn new(filename: impl Into<String>, data: &'a str) -> Self {
        Cursor {
            data    : data,
            filename: filename.into(),
            state   : CursorState::start(),
            stack   : Vec::new(),
        }
    }
    pub fn data(self: &Self) -> &'a str {
        self.data
    }
    pub fn filename(self: &Self) -> &str {
        &self.filename
    }
    pub fn state(self: &Self) -> CursorState {
        self.state
    }
    pub(crate) fn set_state(self: &mut Self, state: CursorState) {
        self.state = state;
    }
    pub fn position(self: &Self) -> usize {
        self.state.position
    }
    pub fn line(self: &Self) -> u32 {
        self.state.line
    }
    pub fn column(self: &Self) -> u32 {
        self.state.column
    }
    /// Number of open transactions.
    pub fn depth(self: &Self) -> usize {
        self.stack.len()
    }
    pub fn eof(self: &Self) -> bool {
        self.state.position >= self.data.len()
    }
    /// Unread part of the input.
    pub fn remaining(self: &Self) -> &'a str {
        &self.data[self.state.position..]
    }
    /// Current location for diagnostics.
    pub fn location(self: &Self) -> Location {
        Location {
            filename: self.filename.clone(),
            line    : self.state.line,
            column  : self.state.column,
            offset  : self.state.position,
        }
    }

    // Transactions

    pub fn begin(self: &mut Self) {
        self.stack.push(self.state);
    }
    pub fn rollback(self: &mut Self) {
        debug_assert!(!self.stack.is_empty(), "rollback without matching begin");
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }
    pub fn commit(self: &mut Self) {
        debug_assert!(!self.stack.is_empty(), "commit without matching begin");
        self.stack.pop();
    }
    /// Begins a transaction that rolls back when dropped unless committed.
    pub fn transaction<'c>(self: &'c mut Self) -> Transaction<'c, 'a> {
        self.begin();
        Transaction { cursor: self, committed: false }
    }

    // Reading

    pub fn peek(self: &Self) -> Option<char> {
        self.remaining().chars().next()
    }
    /// Consumes one character. Does not update the line count, see `newline`.
    pub fn read(self: &mut Self) -> Option<char> {
        let c = self.peek()?;
        self.state.position += c.len_utf8();
        self.state.column += 1;
        Some(c)
    }
    /// Moves line/column to the start of the next line after a newline was read.
    fn newline(self: &mut Self) {
        self.state.line += 1;
        self.state.column = 1;
    }
    /// Advances over `text`, which must be a prefix of the remaining input, counting lines.
    fn advance(self: &mut Self, text: &str) {
        debug_assert!(self.remaining().starts_with(text));
        for c in text.chars() {
            self.state.position += c.len_utf8();
            if c == '\n' {
                self.newline();
            } else {
                self.state.column += 1;
            }
        }
    }

    // Matching

    pub fn skip_whitespace(self: &mut Self) {
        let whitespace = nomutil::whitespace(self.remaining());
        self.advance(whitespace);
    }

    /// Moves to the start of the next line and consumes its indentation, returning the indentation width.
    ///
    /// Only spaces, tabs and carriage returns may precede the newline. Consumes nothing and returns `None` if
    /// anything else is found first or the next line is not indented.
    pub fn match_indent(self: &mut Self) -> Option<usize> {
        let mut txn = self.transaction();
        loop {
            match txn.read() {
                Some(' ' | '\r' | '\t') => continue,
                Some('\n') => {
                    txn.newline();
                    break;
                }
                _ => return None,
            }
        }
        let indentation = nomutil::indentation(txn.remaining());
        if indentation.is_empty() {
            return None;
        }
        txn.advance(indentation);
        txn.commit();
        Some(indentation.chars().count())
    }

    /// Skips whitespace, then consumes `keyword` if the input continues with it.
    /// The skipped whitespace stays consumed when the keyword does not match.
    pub fn match_keyword(self: &mut Self, keyword: &str) -> bool {
        self.skip_whitespace();
        let mut txn = self.transaction();
        match nomutil::literal(txn.remaining(), keyword) {
            Some(matched) => {
                txn.advance(matched);
                txn.commit();
                true
            }
            None => false,
        }
    }

    /// Skips whitespace, then consumes a token starting with a character accepted by `initial` and continuing with
    /// characters accepted by `rest`.
    pub fn match_pattern(self: &mut Self, initial: impl Fn(char) -> bool, rest: impl Fn(char) -> bool) -> Option<&'a str> {
        self.skip_whitespace();
        let mut txn = self.transaction();
        let token = nomutil::pattern(txn.remaining(), initial, rest)?;
        txn.advance(token);
        txn.commit();
        Some(token)
    }
}

impl<'a> Display for Cursor<'a> {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.state.line, self.state.column)
    }
}

/// An open cursor transaction. Rolls back on drop unless [`Transaction::commit`] was called.
///
/// Dereferences to the cursor, so rules can pass `&mut txn` wherever a `&mut Cursor` is expected.
pub struct Transaction<'c, 'a> {
    cursor      : &'c mut Cursor<'a>,
    committed   : bool,
}

impl<'c, 'a> Transaction<'c, 'a> {
    /// Keeps the advanced position.
    pub fn commit(mut self: Self) {
        self.committed = true;
    }
}

impl<'c, 'a> Deref for Transaction<'c, 'a> {
    type Target = Cursor<'a>;
    fn deref(self: &Self) -> &Cursor<'a> {
        &*self.cursor
    }
}

impl<'c, 'a> DerefMut for Transaction<'c, 'a> {
    fn deref_mut(self: &mut Self) -> &mut Cursor<'a> {
        &mut *self.cursor
    }
}

impl<'c, 'a> Drop for Transaction<'c, 'a> {
    fn drop(self: &mut Self) {
        if self.committed {
            self.cursor.commit();
        } else {
            self.cursor.rollback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_updates_line_and_column() {
        let mut cursor = Cursor::new("test_data", "  \n   x");
        cursor.skip_whitespace();
        assert_eq!(cursor.state(), CursorState { position: 6, line: 2, column: 4 });
        assert_eq!(cursor.peek(), Some('x'));
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn read_at_end_of_input() {
        let mut cursor = Cursor::new("test_data", "a");
        assert_eq!(cursor.read(), Some('a'));
        assert_eq!(cursor.read(), None);
        assert_eq!(cursor.peek(), None);
        assert!(cursor.eof());
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn nested_rollbacks_restore_initial_state() {
        let mut cursor = Cursor::new("test_data", "abc\ndef\nghi");
        cursor.read();
        let before = cursor.state();
        for _ in 0..3 {
            cursor.begin();
            cursor.skip_whitespace();
            cursor.read();
            cursor.read();
            cursor.match_indent();
        }
        for _ in 0..3 {
            cursor.rollback();
        }
        assert_eq!(cursor.state(), before);
        assert_eq!(cursor.depth(), 0);
    }

    #[test]
    fn transaction_rolls_back_on_drop() {
        let mut cursor = Cursor::new("test_data", "alpha beta");
        {
            let mut txn = cursor.transaction();
            assert!(txn.match_keyword("alpha"));
            {
                let mut inner = txn.transaction();
                assert!(inner.match_keyword("beta"));
                inner.commit();
            }
            assert_eq!(txn.position(), 10);
            assert_eq!(txn.depth(), 1);
        }
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.depth(), 0);
    }

    #[test]
    fn keyword_mismatch_keeps_skipped_whitespace() {
        let mut cursor = Cursor::new("test_data", "  then");
        assert!(!cursor.match_keyword("else"));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 3);
        assert!(cursor.match_keyword("then"));
        assert!(cursor.eof());
    }

    #[test]
    fn pattern_matching() {
        let mut cursor = Cursor::new("test_data", " Some_Type2 rest");
        assert_eq!(cursor.match_pattern(nomutil::is_identifier_start, nomutil::is_name_char), None);
        assert_eq!(cursor.match_pattern(nomutil::is_type_name_start, nomutil::is_name_char), Some("Some_Type2"));
        assert_eq!(cursor.column(), 12);
    }

    #[test]
    fn indent_is_measured_after_newline() {
        let mut cursor = Cursor::new("test_data", ":  \r\n  \tI Int");
        cursor.read();
        assert_eq!(cursor.match_indent(), Some(3));
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 4);
        assert_eq!(cursor.peek(), Some('I'));
    }

    #[test]
    fn indent_fails_without_consuming() {
        let mut cursor = Cursor::new("test_data", " x\n  I");
        assert_eq!(cursor.match_indent(), None);
        assert_eq!(cursor.position(), 0);

        let mut cursor = Cursor::new("test_data", "\nI Int");
        assert_eq!(cursor.match_indent(), None);
        assert_eq!(cursor.state(), CursorState::start());

        let mut cursor = Cursor::new("test_data", "   ");
        assert_eq!(cursor.match_indent(), None);
        assert_eq!(cursor.position(), 0);
    }
}
