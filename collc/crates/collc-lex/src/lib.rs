//! collc-lex - Lexical Analyzer for the Coll Programming Language
//!
//! This crate turns a stream of characters into a stream of classified
//! tokens for the Coll parser. Characters are pulled one at a time from a
//! [`CharSource`], so the same lexer runs over in-memory strings and over
//! any `std::io::Read`.
//!
//! # Example Usage
//!
//! ```
//! use collc_util::Handler;
//! use collc_lex::{Lexer, TokenKind};
//!
//! let source = "coll Point { float x; }";
//! let handler = Handler::new();
//!
//! // Iterate through tokens
//! for token in Lexer::for_str(source, &handler) {
//!     println!("{}", token);
//! }
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::for_str(source, &handler);
//! assert_eq!(lexer.next_token().kind(), TokenKind::Coll);
//! assert_eq!(lexer.next_token().kind(), TokenKind::CollectionName);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor with one character of lookahead
//! - [`source`] - Character sources over strings and readers
//! - [`unicode`] - Character classification
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `final`, `coll`, `def`, `for`, `while`, `if`, `else`, `return`, `not`,
//! `array`, the type names `int`, `float`, `bool`, `string`, and the
//! boolean literals `true`, `false`.
//!
//! ## Identifiers
//!
//! A letter or `_` followed by letters, digits or `_`. Names starting with
//! an uppercase letter are collection names (`Point`), the rest are plain
//! identifiers (`point`).
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0`; `00342` lexes as `342`
//! - **Float**: `3.14`, `.5` (lexed as `0.5`), `3.`
//! - **String**: `"hello"`, with the escapes `\n`, `\\` and `\"`
//!
//! ## Operators and Delimiters
//!
//! `+ - * / %`, `== =/= < > <= >=`, `&& ||`, `=`, `( ) { } [ ]`, `. ; ,`
//! and `->`.
//!
//! ## Comments
//!
//! `#` starts a comment that runs to the end of the line.
//!
//! ## Errors
//!
//! Malformed input yields [`TokenKind::Error`] tokens and one diagnostic
//! per error on the [`Handler`](collc_util::Handler); lexing continues
//! after the offending characters.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod source;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

use collc_util::Handler;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use source::{CharSource, ReaderSource, StrSource};
pub use token::{keyword_from_ident, Token, TokenKind};
pub use unicode::{is_ident_continue, is_ident_start};

/// Lexes `source` completely, discarding diagnostics.
///
/// The returned vector always ends with the [`TokenKind::Eof`] token. Use
/// [`tokenize_with`] to keep the diagnostics.
///
/// # Example
///
/// ```
/// use collc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x =/= .5");
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Identifier, TokenKind::NotEqual, TokenKind::FloatLiteral, TokenKind::Eof]
/// );
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, &Handler::new())
}

/// Lexes `source` completely, reporting lexical errors to `handler`.
///
/// The returned vector always ends with the [`TokenKind::Eof`] token.
pub fn tokenize_with(source: &str, handler: &Handler) -> Vec<Token> {
    let mut lexer = Lexer::for_str(source, handler);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tracing::debug!(count = tokens.len(), "tokenized source");
    tokens
}
