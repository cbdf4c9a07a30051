//! Operator and punctuation lexing.
//!
//! This module handles lexing of operators, delimiters, and punctuation.
//! Two-character operators are matched greedily with one character of
//! lookahead; a non-matching second character is left for the next token.

use collc_util::DiagnosticCode;

use crate::source::CharSource;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<S: CharSource> Lexer<'_, S> {
    /// Lexes an operator or punctuation token.
    ///
    /// Any character without a meaning here becomes an error token whose
    /// text is that character.
    pub fn lex_operator(&mut self) -> Token {
        let kind = match self.cursor.current_char() {
            '+' => TokenKind::Plus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '.' => TokenKind::Dot,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '-' => return self.lex_minus(),
            '=' => return self.lex_equals(),
            '<' => return self.lex_less(),
            '>' => return self.lex_greater(),
            '&' => return self.lex_ampersand(),
            '|' => return self.lex_pipe(),
            c => return self.lex_unexpected(c),
        };
        let c = self.cursor.current_char();
        self.cursor.advance();
        self.make_token(kind, c.to_string())
    }

    /// Lexes minus or arrow.
    ///
    /// Handles: `-`, `->`
    pub fn lex_minus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('>') {
            self.make_token(TokenKind::Arrow, "->")
        } else {
            self.make_token(TokenKind::Minus, "-")
        }
    }

    /// Lexes assign, equals-equals, or not-equal.
    ///
    /// Handles: `=`, `==`, `=/=`
    pub fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Equal, "==")
        } else if self.cursor.match_char('/') {
            if self.cursor.match_char('=') {
                self.make_token(TokenKind::NotEqual, "=/=")
            } else {
                self.error_token(
                    DiagnosticCode::E_LEXER_MALFORMED_NOT_EQUAL,
                    "expected `=` to complete `=/=`".to_string(),
                    "=/",
                    Some("the not-equal operator is written `=/=`"),
                )
            }
        } else {
            self.make_token(TokenKind::Assign, "=")
        }
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::LessEqual, "<=")
        } else {
            self.make_token(TokenKind::Less, "<")
        }
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::GreaterEqual, ">=")
        } else {
            self.make_token(TokenKind::Greater, ">")
        }
    }

    /// Lexes logical and. A lone `&` is an error.
    pub fn lex_ampersand(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            self.make_token(TokenKind::And, "&&")
        } else {
            self.error_token(
                DiagnosticCode::E_LEXER_UNSUPPORTED_OPERATOR,
                "unsupported operator `&`".to_string(),
                "&",
                Some("use `&&` for logical and"),
            )
        }
    }

    /// Lexes logical or. A lone `|` is an error.
    pub fn lex_pipe(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            self.make_token(TokenKind::Or, "||")
        } else {
            self.error_token(
                DiagnosticCode::E_LEXER_UNSUPPORTED_OPERATOR,
                "unsupported operator `|`".to_string(),
                "|",
                Some("use `||` for logical or"),
            )
        }
    }

    fn lex_unexpected(&mut self, c: char) -> Token {
        self.cursor.advance();
        self.error_token(
            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            format!("unexpected character '{}'", c.escape_debug()),
            c.to_string(),
            None,
        )
    }
}
