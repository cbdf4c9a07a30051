//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations,
//! including character offsets, line/column information, and file identification.
//!
//! Offsets count characters (Unicode scalar values), not bytes, because the
//! lexer reads its input one character at a time from a stream.
//!
//! # Examples
//!
//! ```
//! use collc_util::span::{FileId, Span};
//!
//! // Create a span at a specific location
//! let span = Span::new(10, 20, 1, 5);
//!
//! // Create a span associated with a specific file
//! let span = Span::with_file(10, 20, FileId(0), 1, 5);
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// A dummy FileId for testing
    pub const DUMMY: FileId = FileId(0);
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Character offsets (start, end)
/// - Line and column numbers of the start (1-based, for human-readable output)
/// - File ID (for multi-file projects)
///
/// # Examples
///
/// ```
/// use collc_util::span::Span;
///
/// let span = Span::new(4, 7, 1, 5);
/// assert_eq!(span.len(), 3);
///
/// let point = Span::point(1, 5);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start character offset in source
    pub start: usize,
    /// End character offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Create a new span associated with a specific file
    ///
    /// # Examples
    ///
    /// ```
    /// use collc_util::span::{FileId, Span};
    ///
    /// let span = Span::with_file(10, 20, FileId(2), 1, 5);
    /// assert_eq!(span.file_id, FileId(2));
    /// ```
    #[inline]
    pub fn with_file(start: usize, end: usize, file_id: FileId, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id,
        }
    }

    /// Create a span at a single point
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in characters
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
        assert_eq!(span.file_id, FileId::DUMMY);
    }

    #[test]
    fn test_span_len_and_empty() {
        assert_eq!(Span::new(3, 8, 1, 4).len(), 5);
        assert!(Span::new(3, 3, 1, 4).is_empty());
        assert!(Span::point(2, 1).is_empty());
    }

    #[test]
    fn test_inverted_span_len_saturates() {
        assert_eq!(Span::new(8, 3, 1, 1).len(), 0);
    }

    #[test]
    fn test_default_is_dummy() {
        assert_eq!(Span::default(), Span::DUMMY);
        assert_eq!(FileId::default().index(), 0);
    }
}
