//! Error handling module for the collc driver.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the collc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a source file cannot be opened or read.
    #[error("cannot read `{}`: {source}", .path.display())]
    ReadSource {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lexing finished but reported errors.
    #[error("aborting due to {0} lexical error(s)")]
    LexicalErrors(usize),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
