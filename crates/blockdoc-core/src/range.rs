//! Byte ranges into source text.
//!
//! Lines produced by the lexer and inline matches found by the span scanner
//! both carry a `ByteRange` so callers can map results back to the input.

/// A byte range in the source text.
///
/// Ranges use byte offsets (not character offsets) and are half-open:
/// `[start, end)`.
///
/// # Example
///
/// ```rust
/// use blockdoc_core::range::ByteRange;
///
/// let range = ByteRange::new(6, 15);
/// assert_eq!(range.slice("Hello **world** !"), "**world**");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteRange {
    /// Starting byte offset (inclusive).
    pub start: usize,
    /// Ending byte offset (exclusive).
    pub end: usize,
}

impl ByteRange {
    /// Create a new range from byte offsets.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Borrow the covered text from `source`.
    ///
    /// Returns an empty string when the range does not fall on character
    /// boundaries of `source`.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}
