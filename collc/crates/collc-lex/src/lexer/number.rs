//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.

use crate::source::CharSource;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<S: CharSource> Lexer<'_, S> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `0`; leading zeros are dropped, so `00342` is `342`
    /// - Float: `3.14`, `0.5`, `3.`; a zero run before the point keeps one `0`
    ///
    /// # Returns
    ///
    /// A token of kind `IntegerLiteral` or `FloatLiteral` whose text is the
    /// normalized lexeme.
    pub fn lex_number(&mut self) -> Token {
        let mut text = String::new();

        if self.cursor.current_char() == '0' {
            while self.cursor.current_char() == '0' {
                self.cursor.advance();
            }
            match self.cursor.current_char() {
                '.' => text.push('0'),
                c if c.is_ascii_digit() => {},
                _ => return self.make_token(TokenKind::IntegerLiteral, "0"),
            }
        }

        self.consume_digits(&mut text);

        if self.cursor.current_char() == '.' {
            text.push('.');
            self.cursor.advance();
            self.consume_digits(&mut text);
            return self.make_token(TokenKind::FloatLiteral, text);
        }

        if text.is_empty() {
            text.push('0');
        }
        self.make_token(TokenKind::IntegerLiteral, text)
    }

    /// Lexes a float that starts with its decimal point, e.g. `.234`.
    ///
    /// The dispatcher only calls this when a digit follows the `.`; the
    /// token text gets a leading zero (`0.234`).
    pub fn lex_dot_float(&mut self) -> Token {
        self.cursor.advance();
        let mut text = String::from("0.");
        self.consume_digits(&mut text);
        self.make_token(TokenKind::FloatLiteral, text)
    }

    /// Appends the maximal run of ASCII digits to `text`.
    fn consume_digits(&mut self, text: &mut String) {
        while self.cursor.current_char().is_ascii_digit() {
            text.push(self.cursor.current_char());
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use collc_util::Handler;

    use crate::token::{Token, TokenKind};
    use crate::Lexer;

    fn lex_num(source: &str) -> Token {
        let handler = Handler::new();
        let mut lexer = Lexer::for_str(source, &handler);
        lexer.next_token()
    }

    fn assert_int(source: &str, text: &str) {
        let token = lex_num(source);
        assert_eq!(token.kind(), TokenKind::IntegerLiteral, "{}", source);
        assert_eq!(token.text(), text, "{}", source);
    }

    fn assert_float(source: &str, text: &str) {
        let token = lex_num(source);
        assert_eq!(token.kind(), TokenKind::FloatLiteral, "{}", source);
        assert_eq!(token.text(), text, "{}", source);
    }

    #[test]
    fn test_decimal_integer() {
        assert_int("42", "42");
        assert_int("1000", "1000");
    }

    #[test]
    fn test_zero() {
        assert_int("0", "0");
        assert_int("000", "0");
    }

    #[test]
    fn test_leading_zeros_dropped() {
        assert_int("00342", "342");
        assert_int("0100", "100");
    }

    #[test]
    fn test_float() {
        assert_float("3.14", "3.14");
        assert_float("0.5", "0.5");
    }

    #[test]
    fn test_float_zero_run_keeps_one_zero() {
        assert_float("000.25", "0.25");
        assert_float("0.", "0.");
    }

    #[test]
    fn test_float_trailing_dot_preserved() {
        assert_float("3.", "3.");
    }

    #[test]
    fn test_float_with_leading_zeros_in_integer_part() {
        assert_float("007.5", "7.5");
    }

    #[test]
    fn test_dot_float() {
        assert_float(".234", "0.234");
        assert_float(".0", "0.0");
    }

    #[test]
    fn test_zero_followed_by_letter() {
        let handler = Handler::new();
        let mut lexer = Lexer::for_str("0x1", &handler);
        assert_eq!(lexer.next_token(), Token::new(TokenKind::IntegerLiteral, "0", 1, 1));
        let ident = lexer.next_token();
        assert_eq!(ident.kind(), TokenKind::Identifier);
        assert_eq!(ident.text(), "x1");
        assert_eq!(ident.column(), 2);
    }

    #[test]
    fn test_number_stops_before_second_dot() {
        let handler = Handler::new();
        let kinds: Vec<TokenKind> = Lexer::for_str("1.2.3", &handler).map(|t| t.kind()).collect();
        assert_eq!(kinds, vec![TokenKind::FloatLiteral, TokenKind::FloatLiteral]);
    }

    #[test]
    fn test_float_then_member_access() {
        let handler = Handler::new();
        let tokens: Vec<Token> = Lexer::for_str("3.x", &handler).collect();
        assert_eq!(tokens[0], Token::new(TokenKind::FloatLiteral, "3.", 1, 1));
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_negative_number_is_two_tokens() {
        let handler = Handler::new();
        let kinds: Vec<TokenKind> = Lexer::for_str("-5", &handler).map(|t| t.kind()).collect();
        assert_eq!(kinds, vec![TokenKind::Minus, TokenKind::IntegerLiteral]);
    }
}
