//! Comment lexing.
//!
//! This module handles skipping whitespace and `#` line comments.

use crate::source::CharSource;
use crate::unicode::{is_whitespace, COMMENT_MARKER};
use crate::Lexer;

impl<S: CharSource> Lexer<'_, S> {
    /// Skips whitespace and comments.
    ///
    /// Skips all whitespace characters and line comments. This is called
    /// before lexing each token.
    pub fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                _ if self.cursor.is_at_end() => return,
                c if is_whitespace(c) => self.cursor.advance(),
                COMMENT_MARKER => self.skip_line_comment(),
                _ => return,
            }
        }
    }

    /// Skips a line comment (from `#` to end of line).
    ///
    /// The terminating newline is left for the whitespace loop.
    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }
}
