//! Source location spans
//!
//! Byte-offset ranges into the original source text. Spans are attached to
//! every node so diagnostics and text edits can point back at the source.

use serde::{Deserialize, Serialize};

/// A source location span as byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,

    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start and end offsets
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span at a single point
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span contains an offset
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Merge two spans into one that covers both
    pub fn merge(&self, other: &Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// The text this span covers, or `None` if it does not fit the source
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_operations() {
        let span1 = Span::new(10, 20);
        let span2 = Span::new(15, 30);

        assert_eq!(span1.len(), 10);
        assert!(span1.contains(15));
        assert!(!span1.contains(25));

        let merged = span1.merge(&span2);
        assert_eq!(merged.start, 10);
        assert_eq!(merged.end, 30);
    }

    #[test]
    fn test_point_span() {
        let span = Span::point(7);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_slice() {
        let source = "allay { }";
        assert_eq!(Span::new(0, 5).slice(source), Some("allay"));
        assert_eq!(Span::new(0, 100).slice(source), None);
    }

    #[test]
    fn test_slice_respects_char_boundaries() {
        let source = "api = \"héllo\"";
        // Offset 8 lands inside the two-byte 'é'
        assert_eq!(Span::new(7, 9).slice(source), None);
    }
}
