//! Token definitions for the Coll language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the lexeme it was read from and the
//! 1-based line/column where that lexeme starts. Reserved words are resolved
//! through a process-wide keyword table, see [`keyword_from_ident`].

use std::fmt;
use std::sync::LazyLock;

use collc_util::FxHashMap;
use serde::Serialize;
use static_assertions::{assert_eq_size, assert_impl_all};

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Integer literal: `42`
    IntegerLiteral,
    /// Float literal: `3.14`, `.5`
    FloatLiteral,
    /// String literal: `"hello"`
    StringLiteral,
    /// `true`
    True,
    /// `false`
    False,

    // Identifiers
    /// Lowercase-initial name: `x`, `my_var`, `_count`
    Identifier,
    /// Capitalized name of a collection type: `Point`
    CollectionName,

    // Keywords
    /// `final`
    Final,
    /// `coll`
    Coll,
    /// `def`
    Def,
    /// `for`
    For,
    /// `while`
    While,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
    /// `not`
    Not,
    /// `array`
    Array,

    // Type keywords
    /// `int`
    IntType,
    /// `float`
    FloatType,
    /// `bool`
    BoolType,
    /// `string`
    StringType,

    // Arithmetic operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,

    // Comparison operators
    /// `==`
    Equal,
    /// `=/=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,

    // Logical operators
    /// `&&`
    And,
    /// `||`
    Or,

    // Assignment and punctuation
    /// `=`
    Assign,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `.`
    Dot,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `->`
    Arrow,

    // Special
    /// End of input
    Eof,
    /// Lexical error; the token text describes it
    Error,
}

impl TokenKind {
    /// Upper-snake name of the kind, e.g. `INTEGER_LITERAL`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::CollectionName => "COLLECTION_NAME",
            TokenKind::Final => "FINAL",
            TokenKind::Coll => "COLL",
            TokenKind::Def => "DEF",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Not => "NOT",
            TokenKind::Array => "ARRAY",
            TokenKind::IntType => "INT_TYPE",
            TokenKind::FloatType => "FLOAT_TYPE",
            TokenKind::BoolType => "BOOL_TYPE",
            TokenKind::StringType => "STRING_TYPE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::Greater => "GREATER",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Assign => "ASSIGN",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Dot => "DOT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Arrow => "ARROW",
            TokenKind::Eof => "EOF",
            TokenKind::Error => "ERROR",
        }
    }

    /// Reserved words other than literals and type names.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Final
                | TokenKind::Coll
                | TokenKind::Def
                | TokenKind::For
                | TokenKind::While
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::Not
                | TokenKind::Array
        )
    }

    /// Built-in type names.
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::IntType | TokenKind::FloatType | TokenKind::BoolType | TokenKind::StringType
        )
    }

    /// Literal values, including `true` and `false`.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// Arithmetic, comparison, logical and assignment operators.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::Less
                | TokenKind::Greater
                | TokenKind::LessEqual
                | TokenKind::GreaterEqual
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Assign
        )
    }
}

impl Serialize for TokenKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme with the position of its first character.
///
/// # Example
///
/// ```
/// use collc_lex::token::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier, "x", 1, 5);
/// assert_eq!(token.kind(), TokenKind::Identifier);
/// assert_eq!(token.to_string(), "<IDENTIFIER,x>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: u32,
    column: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// The token kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The lexeme, the resolved content of a string literal, or the error
    /// description of an error token.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line of the first character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the first character (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns true for [`TokenKind::Eof`].
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true for [`TokenKind::Error`].
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// Consumes the token, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.kind, self.text)
    }
}

assert_eq_size!(TokenKind, u8);
assert_impl_all!(Token: Send, Sync, Clone);

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("final", TokenKind::Final),
        ("coll", TokenKind::Coll),
        ("def", TokenKind::Def),
        ("for", TokenKind::For),
        ("while", TokenKind::While),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
        ("not", TokenKind::Not),
        ("array", TokenKind::Array),
        ("int", TokenKind::IntType),
        ("float", TokenKind::FloatType),
        ("bool", TokenKind::BoolType),
        ("string", TokenKind::StringType),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
    ]
    .into_iter()
    .collect()
});

/// Looks up a reserved word. Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use collc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("whilst"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}
