//! Edge case tests for collc-lex

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use collc_util::Handler;
    use proptest::prelude::*;

    use crate::{tokenize, Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        Lexer::for_str(source, &handler).collect()
    }

    /// Yields its bytes, then fails every read after that.
    struct BrokenPipe<'a> {
        data: &'a [u8],
    }

    impl Read for BrokenPipe<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            let n = buf.len().min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![Token::new(TokenKind::Identifier, "x", 1, 1)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("int {} = 1;", name));
        assert_eq!(t[1].text(), name);
        assert_eq!(t[2].column(), 10006);
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(500);
        let t = lex_all(&digits);
        assert_eq!(t[0].kind(), TokenKind::IntegerLiteral);
        assert_eq!(t[0].text(), digits);
    }

    #[test]
    fn test_edge_lone_dot_at_end() {
        assert_eq!(lex_all("."), vec![Token::new(TokenKind::Dot, ".", 1, 1)]);
    }

    #[test]
    fn test_edge_dot_then_space_then_digit() {
        let t = lex_all(". 5");
        assert_eq!(t[0].kind(), TokenKind::Dot);
        assert_eq!(t[1].kind(), TokenKind::IntegerLiteral);
    }

    #[test]
    fn test_edge_comment_without_newline() {
        assert!(lex_all("# nothing else").is_empty());
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb");
        assert_eq!((t[1].line(), t[1].column()), (2, 1));
    }

    #[test]
    fn test_edge_nul_character_is_error() {
        let handler = Handler::new();
        let t: Vec<Token> = Lexer::for_str("a\0b", &handler).collect();
        assert_eq!(t.len(), 3);
        assert_eq!(t[1], Token::new(TokenKind::Error, "\0", 1, 2));
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_unicode_punctuation_is_error() {
        let t = lex_all("x → y");
        assert_eq!(t[1], Token::new(TokenKind::Error, "→", 1, 3));
        assert_eq!(t[2].column(), 5);
    }

    #[test]
    fn test_edge_string_at_end_of_line() {
        let t = lex_all("\"a\"\n\"b\"");
        assert_eq!((t[1].line(), t[1].column()), (2, 1));
    }

    #[test]
    fn test_edge_all_operators() {
        let t = lex_all("+ - * / % == =/= < > <= >= && || = ->");
        assert_eq!(t.len(), 15);
        assert!(t.iter().all(|tok| !tok.is_error()));
    }

    #[test]
    fn test_edge_io_failure_truncates_to_eof() {
        let handler = Handler::new();
        let reader = BrokenPipe { data: b"final x" };
        let mut lexer = Lexer::for_reader(reader, &handler);

        assert_eq!(lexer.next_token().kind(), TokenKind::Final);
        assert_eq!(lexer.next_token().text(), "x");
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_edge_invalid_utf8_truncates_to_eof() {
        let handler = Handler::new();
        let bytes: &[u8] = &[b'a', b' ', 0xFF, b'b'];
        let tokens: Vec<Token> = Lexer::for_reader(bytes, &handler).collect();
        assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "a", 1, 1)]);
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_trivia_only_is_eof() {
        proptest!(|(input in "([ \t\r\n]|#[^\n]*\n)*")| {
            let tokens = tokenize(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert!(tokens[0].is_eof());

            let lines = input.matches('\n').count() as u32 + 1;
            prop_assert_eq!(tokens[0].line(), lines);
        });
    }

    #[test]
    fn test_property_eof_is_idempotent() {
        proptest!(|(input in ".{0,64}")| {
            let handler = Handler::new();
            let mut lexer = Lexer::for_str(&input, &handler);
            while !lexer.next_token().is_eof() {}

            let position = (lexer.line(), lexer.column());
            for _ in 0..3 {
                let token = lexer.next_token();
                prop_assert!(token.is_eof());
                prop_assert_eq!((token.line(), token.column()), position);
            }
        });
    }

    #[test]
    fn test_property_arbitrary_input_terminates() {
        proptest!(|(input in "\\PC{0,200}")| {
            let handler = Handler::new();
            let tokens = crate::tokenize_with(&input, &handler);
            prop_assert!(tokens.last().is_some_and(Token::is_eof));

            let errors = tokens.iter().filter(|t| t.is_error()).count();
            prop_assert_eq!(errors, handler.error_count());
        });
    }

    #[test]
    fn test_property_reader_matches_str() {
        proptest!(|(input in "\\PC{0,200}")| {
            let handler = Handler::new();
            let from_str: Vec<Token> = Lexer::for_str(&input, &handler).collect();
            let from_reader: Vec<Token> = Lexer::for_reader(input.as_bytes(), &handler).collect();
            prop_assert_eq!(from_str, from_reader);
        });
    }

    #[test]
    fn test_property_identifiers() {
        proptest!(|(input in "[a-z_][a-zA-Z0-9_]{0,40}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            if crate::keyword_from_ident(&input).is_none() {
                prop_assert_eq!(tokens[0].kind(), TokenKind::Identifier);
            }
        });
    }

    #[test]
    fn test_property_collection_names() {
        proptest!(|(input in "[A-Z][a-zA-Z0-9_]{0,40}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind(), TokenKind::CollectionName);
        });
    }

    #[test]
    fn test_property_integers_drop_leading_zeros() {
        proptest!(|(zeros in 0usize..5, digits in "[1-9][0-9]{0,15}")| {
            let source = format!("{}{}", "0".repeat(zeros), digits);
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind(), TokenKind::IntegerLiteral);
            prop_assert_eq!(tokens[0].text(), digits.as_str());
        });
    }

    #[test]
    fn test_property_plain_strings() {
        proptest!(|(input in "[^\"\\\\]{0,100}")| {
            let source = format!("\"{}\"", input);
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind(), TokenKind::StringLiteral);
            prop_assert_eq!(tokens[0].text(), input.as_str());
        });
    }
}
