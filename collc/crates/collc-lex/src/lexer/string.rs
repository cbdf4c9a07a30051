//! String literal lexing.

use collc_util::DiagnosticCode;

use crate::source::CharSource;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<S: CharSource> Lexer<'_, S> {
    /// Lexes a string literal.
    ///
    /// Parses a string enclosed in double quotes, resolving the `\n`, `\\`
    /// and `\"` escapes. Raw newlines are kept as-is.
    ///
    /// # Returns
    ///
    /// A `StringLiteral` token with the processed content, or an error
    /// token when the literal is unterminated or holds an unknown escape.
    pub fn lex_string(&mut self) -> Token {
        self.cursor.advance();

        let mut content = String::new();

        loop {
            if self.cursor.is_at_end() {
                return self.unterminated_string();
            }

            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    return self.make_token(TokenKind::StringLiteral, content);
                },
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.is_at_end() {
                        return self.unterminated_string();
                    }
                    let escaped = self.cursor.current_char();
                    self.cursor.advance();
                    match resolve_escape(escaped) {
                        Some(c) => content.push(c),
                        None => return self.invalid_escape(escaped),
                    }
                },
                c => {
                    content.push(c);
                    self.cursor.advance();
                },
            }
        }
    }

    fn unterminated_string(&self) -> Token {
        let message = "unterminated string literal";
        self.error_token(
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            message.to_string(),
            message,
            Some("add a closing `\"`"),
        )
    }

    fn invalid_escape(&self, escaped: char) -> Token {
        let message = format!("invalid escape sequence '\\{}'", escaped);
        self.error_token(
            DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            message.clone(),
            message,
            Some("valid escapes are `\\n`, `\\\\` and `\\\"`"),
        )
    }
}

/// Maps the character after a backslash to the character it stands for.
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        _ => None,
    }
}
