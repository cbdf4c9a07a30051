//! Source map for managing source files and rendering source locations.
//!
//! This module provides the [`SourceMap`] type for managing multiple source files
//! and turning a [`Diagnostic`] into a human-readable report with a snippet of
//! the offending line.

use std::sync::Arc;

use super::FileId;
use crate::diagnostic::{Diagnostic, SourceSnippet};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use collc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.coll", "def int f() {}");
/// assert_eq!(file.name(), "main.coll");
/// assert_eq!(file.line_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start byte offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the text of a line (1-based), without its line terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use collc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.coll", "final int x = 1;\r\nx = 2;");
    /// assert_eq!(file.line_text(1).unwrap(), "final int x = 1;");
    /// assert_eq!(file.line_text(2).unwrap(), "x = 2;");
    /// assert!(file.line_text(3).is_err());
    /// ```
    pub fn line_text(&self, line: usize) -> SourceMapResult<&str> {
        let invalid = || SourceMapError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        };
        let index = line.checked_sub(1).ok_or_else(invalid)?;
        let start = *self.line_starts.get(index).ok_or_else(invalid)?;
        let end = self
            .line_starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.content.len());

        let text = &self.content[start..end];
        let text = text.strip_suffix('\n').unwrap_or(text);
        Ok(text.strip_suffix('\r').unwrap_or(text))
    }
}

/// A collection of source files indexed by [`FileId`]
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    /// Create an empty source map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file and return its identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use collc_util::span::{FileId, SourceMap};
    ///
    /// let mut map = SourceMap::new();
    /// let first = map.add_file("a.coll", "x = 1;");
    /// let second = map.add_file("b.coll", "y = 2;");
    /// assert_eq!(first, FileId(0));
    /// assert_eq!(second, FileId(1));
    /// ```
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        self.files.push(SourceFile::new(id, name, content));
        FileId(id)
    }

    /// Look up a file by identifier
    pub fn get(&self, id: FileId) -> SourceMapResult<&SourceFile> {
        self.files
            .get(id.index())
            .ok_or(SourceMapError::FileNotFound(id.index()))
    }

    /// Number of registered files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no file has been registered
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Render a diagnostic as a multi-line report.
    ///
    /// The report names the file and position of the diagnostic's span and,
    /// when the line is available, shows it with a caret underline. The
    /// underline stops at the end of the displayed line even when the span
    /// continues onto later lines. Unknown files and lines fall back to the
    /// bare header.
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut out = diagnostic.header();
        let span = diagnostic.span;

        if let Ok(file) = self.get(span.file_id) {
            out.push_str(&format!("\n  --> {}:{}:{}", file.name(), span.line, span.column));

            if let Ok(line) = file.line_text(span.line as usize) {
                let column = span.column as usize;
                let end = (column + span.len()).min(line.chars().count() + 1);
                let snippet = SourceSnippet::new(
                    line,
                    span.line as usize,
                    column,
                    end,
                    None::<String>,
                );
                out.push('\n');
                out.push_str(&snippet.format());
            }
        }

        for help in &diagnostic.helps {
            out.push_str(&format!("\n  = help: {}", help));
        }

        out
    }
}
