//! Core error types for collc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// File not registered in the source map
    #[error("File not found: index {0}")]
    FileNotFound(usize),

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines in the file
        max_lines: usize,
    },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = SourceMapError::FileNotFound(3);
        assert_eq!(err.to_string(), "File not found: index 3");
    }

    #[test]
    fn test_invalid_line_display() {
        let err = SourceMapError::InvalidLineNumber {
            line: 9,
            max_lines: 2,
        };
        assert_eq!(err.to_string(), "Invalid line number: 9 (file has 2 lines)");
    }
}
