//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `comment` - Whitespace and comment skipping
//! - `identifier` - Identifier, keyword and collection-name lexing
//! - `number` - Integer and float literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator and punctuation lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
