//! Memoization of primitive token matches, keyed by start position and token kind.

use rustc_hash::FxHashMap;
use tracing::trace;
use crate::frontend::parser::cursor::{Cursor, CursorState};

/// Kinds of memoized primitive matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    TypeName,
}

/// A successful match: the cursor state after the match and the matched text.
#[derive(Copy, Clone, Debug)]
struct Memo<'a> {
    state   : CursorState,
    token   : &'a str,
}

/// Maps (start position, token kind) to a previous successful match.
///
/// Only successes are stored. A keyword entry is only reused for a request of the same keyword.
/// Entries are only valid for the input buffer they were recorded on. Lookups through a cursor over any other
/// buffer miss, and recording a match on another buffer discards all entries of the previous one.
#[derive(Debug, Default)]
pub struct MemoTable<'a> {
    source  : Option<&'a str>,
    entries : FxHashMap<(usize, TokenKind), Memo<'a>>,
}

impl<'a> MemoTable<'a> {
    pub fn new() -> Self {
        MemoTable {
            source  : None,
            entries : FxHashMap::default(),
        }
    }

    /// Whether the entries were recorded on the cursor's input buffer.
    fn is_bound_to(self: &Self, cursor: &Cursor<'a>) -> bool {
        self.source.map_or(false, |source| std::ptr::eq(source, cursor.data()))
    }

    /// Looks up a match of `kind` that started at `position`. On a hit the cursor is moved to the state after the
    /// memoized match and the matched token is returned. If `expected` is given, only an entry with exactly that
    /// token text is a hit. A miss has no side effects.
    pub fn memoized(self: &Self, position: usize, kind: TokenKind, expected: Option<&str>, cursor: &mut Cursor<'a>) -> Option<&'a str> {
        if !self.is_bound_to(cursor) {
            return None;
        }
        let memo = self.entries.get(&(position, kind))?;
        if expected.map_or(false, |expected| expected != memo.token) {
            return None;
        }
        trace!(position, ?kind, token = memo.token, "memo hit");
        cursor.set_state(memo.state);
        Some(memo.token)
    }

    /// Records the cursor's current state as the result of matching `token` of `kind` from `position`.
    pub fn memoize(self: &mut Self, position: usize, kind: TokenKind, cursor: &Cursor<'a>, token: &'a str) -> Option<&'a str> {
        if !self.is_bound_to(cursor) {
            if !self.entries.is_empty() {
                trace!(discarded = self.entries.len(), "memo rebound to new input");
            }
            self.entries.clear();
            self.source = Some(cursor.data());
        }
        self.entries.insert((position, kind), Memo { state: cursor.state(), token });
        Some(token)
    }

    pub fn len(self: &Self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(self: &Self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_repositions_cursor() {
        let mut memo = MemoTable::new();
        let src = "  then else";
        let mut cursor = Cursor::new("test_data", src);
        cursor.match_keyword("then");
        memo.memoize(0, TokenKind::Keyword, &cursor, "then");
        let after = cursor.state();

        let mut other = Cursor::new("test_data", src);
        assert_eq!(memo.memoized(0, TokenKind::Keyword, Some("then"), &mut other), Some("then"));
        assert_eq!(other.state(), after);
    }

    #[test]
    fn keyword_text_must_match() {
        let mut memo = MemoTable::new();
        let src = "then";
        let mut cursor = Cursor::new("test_data", src);
        cursor.match_keyword("then");
        memo.memoize(0, TokenKind::Keyword, &cursor, "then");

        let mut other = Cursor::new("test_data", src);
        assert_eq!(memo.memoized(0, TokenKind::Keyword, Some("else"), &mut other), None);
        assert_eq!(other.position(), 0);
    }

    #[test]
    fn kind_must_match() {
        let mut memo = MemoTable::new();
        let mut cursor = Cursor::new("test_data", "value");
        memo.memoize(0, TokenKind::Identifier, &cursor, "value");
        assert_eq!(memo.memoized(0, TokenKind::TypeName, None, &mut cursor), None);
        assert_eq!(memo.memoized(1, TokenKind::Identifier, None, &mut cursor), None);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn entries_are_bound_to_their_buffer() {
        let first = String::from("long_identifier");
        let second = String::from("é");
        let mut memo = MemoTable::new();
        let mut cursor = Cursor::new("test_data", &first);
        cursor.match_pattern(|c| c.is_alphabetic(), |c| c.is_alphanumeric() || c == '_');
        memo.memoize(0, TokenKind::Identifier, &cursor, "long_identifier");

        let mut other = Cursor::new("test_data", &second);
        assert_eq!(memo.memoized(0, TokenKind::Identifier, None, &mut other), None);
        assert_eq!(other.position(), 0);
        assert_eq!(other.remaining(), "é");

        other.read();
        memo.memoize(0, TokenKind::Identifier, &other, "é");
        assert_eq!(memo.len(), 1);
        let mut cursor = Cursor::new("test_data", &first);
        assert_eq!(memo.memoized(0, TokenKind::Identifier, None, &mut cursor), None);
    }
}
