//! Char-aware cursor over expression text.

use crate::lexer::span::{ByteOffset, Span};

/// Byte-position cursor that always rests on a char boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at byte offset `0`.
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Returns the scanned text.
    pub(crate) fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the current byte offset.
    pub(crate) fn offset(&self) -> ByteOffset {
        ByteOffset::from_usize(self.offset)
    }

    /// Returns the char at cursor position.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    /// Returns the first non-whitespace char at or after the cursor.
    pub(crate) fn peek_non_whitespace(&self) -> Option<char> {
        self.input[self.offset..].chars().find(|ch| !ch.is_whitespace())
    }

    /// Consumes and returns the char at cursor position.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes chars while `predicate` holds.
    pub(crate) fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.offset += ch.len_utf8();
        }
    }

    /// Skips whitespace.
    pub(crate) fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Returns the span from `start` to the current position.
    pub(crate) fn span_from(&self, start: ByteOffset) -> Span {
        Span::new(start, self.offset())
    }
}
