//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting, and formatting
//! compiler diagnostics with their codes and help messages.
//!
//! # Examples
//!
//! ```
//! use collc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use collc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("malformed '=/=' operator")
//!     .code(DiagnosticCode::E_LEXER_MALFORMED_NOT_EQUAL)
//!     .span(Span::point(1, 3))
//!     .help("write '=/=' for inequality")
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use collc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents compilation
    Error,
    /// A warning that doesn't prevent compilation
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// The first line of a rendered diagnostic: `level[code]: message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collc_util::diagnostic::{Diagnostic, DiagnosticCode};
    /// use collc_util::Span;
    ///
    /// let diag = Diagnostic::error("unterminated string literal", Span::DUMMY);
    /// assert_eq!(diag.header(), "error: unterminated string literal");
    ///
    /// let mut diag = diag;
    /// diag.code = Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING);
    /// assert_eq!(diag.header(), "error[E1002]: unterminated string literal");
    /// ```
    pub fn header(&self) -> String {
        match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.header(), self.span.line, self.span.column)
    }
}

/// Collects diagnostics emitted during a compilation phase.
///
/// The handler is shared by reference; emitting only needs `&self`.
///
/// # Examples
///
/// ```
/// use collc_util::diagnostic::{Diagnostic, Handler};
/// use collc_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected character '@'", Span::point(1, 1)));
///
/// if handler.has_errors() {
///     eprintln!("Lexing failed with {} errors", handler.error_count());
/// }
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
