//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, token construction helpers
//! and the dispatch on the first significant character of each token.

use std::io::Read;

use collc_util::{DiagnosticBuilder, DiagnosticCode, FileId, Handler, Span};

use crate::cursor::Cursor;
use crate::source::{CharSource, ReaderSource, StrSource};
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

/// Lexer for the Coll programming language.
///
/// The lexer pulls characters from a [`CharSource`] and produces one
/// [`Token`] per call to [`next_token`](Lexer::next_token). Lexical errors
/// never stop it: they come back as [`TokenKind::Error`] tokens, are
/// reported to the [`Handler`], and scanning resumes right after the
/// malformed input.
///
/// # Example
///
/// ```
/// use collc_util::Handler;
/// use collc_lex::{Lexer, TokenKind};
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::for_str("final int x = 00342;", &handler);
///
/// assert_eq!(lexer.next_token().kind(), TokenKind::Final);
/// assert_eq!(lexer.next_token().kind(), TokenKind::IntType);
/// assert_eq!(lexer.next_token().text(), "x");
/// assert_eq!(lexer.next_token().kind(), TokenKind::Assign);
/// assert_eq!(lexer.next_token().text(), "342");
/// ```
pub struct Lexer<'h, S> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<S>,

    /// Error handler for reporting lexical errors.
    handler: &'h Handler,

    /// File the source belongs to, stamped on diagnostic spans.
    file_id: FileId,

    /// Character offset where the current token starts.
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'h, S: CharSource> Lexer<'h, S> {
    /// Creates a new lexer over `source`.
    ///
    /// The cursor is primed immediately, so [`line`](Lexer::line) and
    /// [`column`](Lexer::column) report the first character's position
    /// before any token is requested.
    pub fn new(source: S, handler: &'h Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            file_id: FileId::DUMMY,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Tags diagnostics emitted by this lexer with `file_id`.
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization. It skips whitespace
    /// and comments, then dispatches to the appropriate lexing method
    /// based on the current character.
    ///
    /// # Returns
    /// The next token in the source stream. Once the input is exhausted,
    /// every call returns an [`TokenKind::Eof`] token at the same position.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.offset();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.make_token(TokenKind::Eof, "");
        }

        let token = match self.cursor.current_char() {
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            '.' if self.cursor.peek_next().is_ascii_digit() => self.lex_dot_float(),
            '"' => self.lex_string(),
            _ => self.lex_operator(),
        };

        tracing::trace!(
            kind = %token.kind(),
            line = token.line(),
            column = token.column(),
            "lexed token"
        );
        token
    }

    /// Builds a token positioned at the start of the current lexeme.
    pub(super) fn make_token(&self, kind: TokenKind, text: impl Into<String>) -> Token {
        Token::new(kind, text, self.token_start_line, self.token_start_column)
    }

    /// Reports a lexical error and returns the matching error token.
    ///
    /// # Arguments
    /// * `code` - Diagnostic code of the error
    /// * `message` - Human-readable description sent to the handler
    /// * `text` - Text carried by the returned error token
    /// * `help` - Optional suggestion attached to the diagnostic
    pub(super) fn error_token(
        &self,
        code: DiagnosticCode,
        message: String,
        text: impl Into<String>,
        help: Option<&str>,
    ) -> Token {
        let span = Span::with_file(
            self.token_start,
            self.cursor.offset(),
            self.file_id,
            self.token_start_line,
            self.token_start_column,
        );

        let mut builder = DiagnosticBuilder::error(message).code(code).span(span);
        if let Some(help) = help {
            builder = builder.help(help);
        }
        builder.emit(self.handler);

        self.make_token(TokenKind::Error, text)
    }

    /// Returns the current line number (1-based).
    ///
    /// # Returns
    /// The line number of the next character to be lexed.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    ///
    /// # Returns
    /// The column number of the next character to be lexed.
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

impl<'h, 'a> Lexer<'h, StrSource<'a>> {
    /// Creates a lexer over an in-memory string.
    pub fn for_str(source: &'a str, handler: &'h Handler) -> Self {
        Self::new(StrSource::new(source), handler)
    }
}

impl<'h, R: Read> Lexer<'h, ReaderSource<R>> {
    /// Creates a lexer that decodes UTF-8 from `reader` as it goes.
    pub fn for_reader(reader: R, handler: &'h Handler) -> Self {
        Self::new(ReaderSource::new(reader), handler)
    }
}

impl<S: CharSource> Iterator for Lexer<'_, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
