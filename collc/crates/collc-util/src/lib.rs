//! collc-util - Core Utilities and Foundation Types
//!
//! This crate provides the types shared by every phase of the collc
//! toolchain:
//!
//! - [`span`] - Source locations ([`Span`], [`FileId`]) and the [`SourceMap`]
//!   used to render them
//! - [`diagnostic`] - Error and warning reporting ([`Diagnostic`],
//!   [`DiagnosticBuilder`], [`Handler`])
//! - [`error`] - Error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use collc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::point(3, 9))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
