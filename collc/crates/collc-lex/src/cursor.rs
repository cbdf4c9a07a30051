//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which pulls characters from a
//! [`CharSource`] one at a time and tracks line/column information for
//! error reporting.

use crate::source::CharSource;

/// A cursor over a character stream with one character of lookahead.
///
/// The cursor is primed on construction: the first character is already
/// loaded, and [`line`](Cursor::line) / [`column`](Cursor::column) give its
/// position. After every [`advance`](Cursor::advance) they give the position
/// of the new current character. Both are 1-based; the character after a
/// newline is at column 1 of the next line.
///
/// # Example
///
/// ```
/// use collc_lex::cursor::Cursor;
/// use collc_lex::source::StrSource;
///
/// let mut cursor = Cursor::new(StrSource::new("ab\nc"));
///
/// assert_eq!(cursor.current_char(), 'a');
/// assert_eq!((cursor.line(), cursor.column()), (1, 1));
/// cursor.advance();
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'c');
/// assert_eq!((cursor.line(), cursor.column()), (2, 1));
/// ```
pub struct Cursor<S> {
    /// The character stream being traversed.
    source: S,

    /// Character under the cursor, `None` at end of input.
    current: Option<char>,

    /// Character after `current`, once it has been pulled from the source.
    lookahead: Option<Option<char>>,

    /// Number of characters consumed so far.
    offset: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<S: CharSource> Cursor<S> {
    /// Creates a cursor and loads the first character.
    pub fn new(mut source: S) -> Self {
        let current = source.next_char();
        Self {
            source,
            current,
            lookahead: None,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character without consuming it.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.current.unwrap_or('\0')
    }

    /// Returns the character after the current one without consuming either.
    ///
    /// Returns '\0' if there is no such character.
    ///
    /// # Example
    ///
    /// ```
    /// use collc_lex::cursor::Cursor;
    /// use collc_lex::source::StrSource;
    ///
    /// let mut cursor = Cursor::new(StrSource::new(".5"));
    /// assert_eq!(cursor.peek_next(), '5');
    /// assert_eq!(cursor.current_char(), '.');
    /// ```
    pub fn peek_next(&mut self) -> char {
        if self.current.is_none() {
            return '\0';
        }
        let source = &mut self.source;
        self.lookahead
            .get_or_insert_with(|| source.next_char())
            .unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    pub fn advance(&mut self) {
        let Some(c) = self.current else {
            return;
        };

        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.current = match self.lookahead.take() {
            Some(next) => next,
            None => self.source.next_char(),
        };
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed, false otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use collc_lex::cursor::Cursor;
    /// use collc_lex::source::StrSource;
    ///
    /// let mut cursor = Cursor::new(StrSource::new("=>"));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the number of characters consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StrSource;

    fn cursor(text: &str) -> Cursor<StrSource<'_>> {
        Cursor::new(StrSource::new(text))
    }

    #[test]
    fn test_primed_on_construction() {
        let c = cursor("x");
        assert_eq!(c.current_char(), 'x');
        assert!(!c.is_at_end());
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn test_empty_source() {
        let mut c = cursor("");
        assert!(c.is_at_end());
        assert_eq!(c.current_char(), '\0');
        assert_eq!(c.peek_next(), '\0');
        c.advance();
        assert_eq!((c.line(), c.column(), c.offset()), (1, 1, 0));
    }

    #[test]
    fn test_column_tracking() {
        let mut c = cursor("abc");
        c.advance();
        assert_eq!(c.column(), 2);
        c.advance();
        c.advance();
        assert!(c.is_at_end());
        assert_eq!((c.line(), c.column()), (1, 4));
    }

    #[test]
    fn test_newline_resets_column() {
        let mut c = cursor("a\n\nb");
        c.advance();
        c.advance();
        assert_eq!((c.line(), c.column()), (2, 1));
        c.advance();
        assert_eq!((c.line(), c.column()), (3, 1));
        assert_eq!(c.current_char(), 'b');
    }

    #[test]
    fn test_advance_past_end_is_stable() {
        let mut c = cursor("a");
        c.advance();
        c.advance();
        c.advance();
        assert_eq!((c.line(), c.column(), c.offset()), (1, 2, 1));
    }

    #[test]
    fn test_peek_next_does_not_consume() {
        let mut c = cursor("abc");
        assert_eq!(c.peek_next(), 'b');
        assert_eq!(c.peek_next(), 'b');
        assert_eq!(c.current_char(), 'a');
        c.advance();
        assert_eq!(c.current_char(), 'b');
        assert_eq!(c.peek_next(), 'c');
        c.advance();
        assert_eq!(c.peek_next(), '\0');
        c.advance();
        assert!(c.is_at_end());
    }

    #[test]
    fn test_match_char() {
        let mut c = cursor("->");
        assert!(!c.match_char('>'));
        assert!(c.match_char('-'));
        assert!(c.match_char('>'));
        assert!(c.is_at_end());
        assert!(!c.match_char('\0'));
    }

    #[test]
    fn test_multibyte_counts_one_column() {
        let mut c = cursor("é=");
        c.advance();
        assert_eq!(c.current_char(), '=');
        assert_eq!(c.column(), 2);
    }
}
