//! # Source Span
//!
//! Byte ranges into the text handed to an entry point. Parser spans are
//! translated into this type so diagnostics never leak source-map offsets.
//!
//! ## Usage
//!
//! ```rust
//! use snapshot_rewrite::Span;
//!
//! let span = Span::new(7, 13);
//! assert_eq!(span.len(), 6);
//! assert_eq!(span.slice("import assert from 'assert';"), Some("assert"));
//! ```

use serde::{Deserialize, Serialize};
use swc_core::common::{BytePos, Span as SourceMapSpan};

/// A range in the input text, represented as byte offsets.
///
/// # Fields
///
/// - `start`: Starting byte offset (inclusive)
/// - `end`: Ending byte offset (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Starting byte offset (inclusive)
    start: usize,
    /// Ending byte offset (exclusive)
    end: usize,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Translates a source-map span into offsets relative to the file that
    /// starts at `file_start`.
    ///
    /// Dummy spans (which sit before every file) collapse to `0..0`.
    pub fn from_source_map(span: SourceMapSpan, file_start: BytePos) -> Self {
        let start = span.lo.0.saturating_sub(file_start.0) as usize;
        let end = span.hi.0.saturating_sub(file_start.0) as usize;
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Returns the starting byte offset.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the covered text, or `None` when the span is out of bounds or
    /// does not fall on character boundaries.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snapshot_rewrite::Span;
    ///
    /// assert_eq!(Span::new(0, 3).slice("foo;"), Some("foo"));
    /// assert_eq!(Span::new(2, 9).slice("foo;"), None);
    /// ```
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_core::common::{SyntaxContext, DUMMY_SP};

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20);
        assert_eq!(span.start(), 10);
        assert_eq!(span.end(), 20);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn test_span_is_empty() {
        assert!(Span::new(5, 5).is_empty());
        assert!(Span::new(10, 5).is_empty());
        assert!(!Span::new(0, 1).is_empty());
    }

    #[test]
    fn test_from_source_map_is_relative_to_file_start() {
        let span = SourceMapSpan::new(BytePos(105), BytePos(110), SyntaxContext::empty());
        let relative = Span::from_source_map(span, BytePos(100));
        assert_eq!(relative, Span::new(5, 10));
    }

    #[test]
    fn test_from_source_map_dummy_span() {
        assert_eq!(Span::from_source_map(DUMMY_SP, BytePos(1)), Span::default());
    }

    #[test]
    fn test_slice_rejects_out_of_bounds() {
        assert_eq!(Span::new(0, 100).slice("short"), None);
    }
}
