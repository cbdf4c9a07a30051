//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers, collection names and keywords.

use crate::source::CharSource;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<S: CharSource> Lexer<'_, S> {
    /// Lexes an identifier, collection name or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits or underscores. After reading the identifier, checks if it
    /// matches a reserved keyword.
    ///
    /// # Returns
    ///
    /// A keyword token (e.g. `TokenKind::While`), a `CollectionName` when the
    /// first character is uppercase, or an `Identifier`.
    pub fn lex_identifier(&mut self) -> Token {
        let mut text = String::new();
        while is_ident_continue(self.cursor.current_char()) {
            text.push(self.cursor.current_char());
            self.cursor.advance();
        }

        let kind = keyword_from_ident(&text).unwrap_or_else(|| {
            if text.starts_with(char::is_uppercase) {
                TokenKind::CollectionName
            } else {
                TokenKind::Identifier
            }
        });
        self.make_token(kind, text)
    }
}
