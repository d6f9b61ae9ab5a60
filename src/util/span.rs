use std::{fmt, ops::Range};

/// A half-open byte range `[start, end)` into the original source text.
///
/// Spans are produced by the scanner, carried through every AST node and
/// attached to every error so a diagnostic can point back at the offending
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Offset of the first byte covered by the span.
    pub start: usize,
    /// Offset one past the last byte covered by the span.
    pub end:   usize,
}

impl Span {
    /// Creates a span from its two offsets.
    ///
    /// # Example
    /// ```
    /// use sprig::util::span::Span;
    ///
    /// let span = Span::new(2, 5);
    /// assert_eq!(span.len(), 3);
    /// ```
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span positioned at `offset`, used for end-of-input errors.
    #[must_use]
    pub const fn point(offset: usize) -> Self {
        Self { start: offset,
               end:   offset, }
    }

    /// The smallest span covering both `self` and `other`.
    #[must_use]
    pub fn to(self, other: Self) -> Self {
        Self { start: self.start.min(other.start),
               end:   self.end.max(other.end), }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Clamps the span so it can be used to slice a text of length `len`.
    #[must_use]
    pub fn clamp(self, len: usize) -> Range<usize> {
        let start = self.start.min(len);
        let end = self.end.clamp(start, len);
        start..end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
