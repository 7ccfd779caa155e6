//! Backtracking cursor over an input string.
//!
//! The cursor is a byte-position index into a borrowed `&str`. Rolling a
//! failed match back is just resetting the index to a previously saved
//! position, so readers can probe alternative grammars on the same input
//! without losing or duplicating characters.

/// A character cursor over an input string.
///
/// Owned exclusively by a single parse call; never shared.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    /// The current byte position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Restore the cursor to a position previously returned by [`pos`](Self::pos).
    pub fn rewind(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos, "rewind may only move backwards");
        debug_assert!(self.input.is_char_boundary(pos));
        self.pos = pos;
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Whether the whole input has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume the longest prefix whose characters all satisfy `pred` and
    /// return it (possibly empty).
    pub fn take_while<F>(&mut self, pred: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let start = self.pos;
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|(_, c)| !pred(*c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.pos += len;
        &self.input[start..self.pos]
    }

    /// Advance the cursor by `len` bytes (used after an anchored regex match).
    pub fn advance(&mut self, len: usize) {
        debug_assert!(self.input.is_char_boundary(self.pos + len));
        self.pos += len;
    }
}
