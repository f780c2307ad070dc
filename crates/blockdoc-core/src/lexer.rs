//! Line splitting and line classification.
//!
//! The lexer splits input on `\n` for the block parser and classifies each
//! trimmed line by its leading marker. It uses `memchr` for newline
//! detection (SIMD on supported platforms) and borrows every line from the
//! input.

use crate::range::ByteRange;
use memchr::memchr;

/// Heading markers in match order, paired with their level.
const HEADING_MARKERS: [(&str, u8); 4] = [("# ", 1), ("## ", 2), ("### ", 3), ("#### ", 4)];

/// A single line from the input with its source range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without the trailing newline).
    pub text: &'a str,
    /// Byte range in the original input.
    pub range: ByteRange,
    /// Zero-based line number.
    pub number: usize,
}

impl<'a> Line<'a> {
    /// The line with leading and trailing whitespace removed.
    #[inline]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    /// Classify the trimmed line.
    #[inline]
    pub fn kind(&self) -> LineKind<'a> {
        LineKind::classify(self.trimmed())
    }
}

/// What a trimmed line opens.
///
/// Carried text is the remainder after the marker, untrimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: u8, rest: &'a str },
    Bullet(&'a str),
    Numbered(&'a str),
    Blank,
    Text(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify an already trimmed line. The first matching marker wins:
    /// headings (shortest marker first), bullets, numbers, blank, text.
    pub fn classify(trimmed: &'a str) -> Self {
        for (marker, level) in HEADING_MARKERS {
            if let Some(rest) = trimmed.strip_prefix(marker) {
                return LineKind::Heading { level, rest };
            }
        }

        if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            return LineKind::Bullet(rest);
        }

        if let Some(rest) = strip_number_marker(trimmed) {
            return LineKind::Numbered(rest);
        }

        if trimmed.is_empty() {
            LineKind::Blank
        } else {
            LineKind::Text(trimmed)
        }
    }
}

/// Strip a `<digits>. ` marker, returning the remainder.
#[inline]
fn strip_number_marker(text: &str) -> Option<&str> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    text[digits..].strip_prefix(". ")
}

/// Line iterator over the input.
///
/// Every `\n` ends a line, so `"a\n\nb"` yields `a`, an empty line and `b`.
/// A trailing `\r` stays on the line; trimming removes it.
pub struct Lexer<'a> {
    /// The complete input text.
    input: &'a str,
    /// Current byte offset.
    offset: usize,
    /// Number of the next line.
    number: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            number: 0,
        }
    }

    /// Check if all input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Consume and return the next line.
    ///
    /// Returns `None` if at end of input.
    #[inline]
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        if self.is_eof() {
            return None;
        }

        let start = self.offset;
        let bytes = self.input.as_bytes();

        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => bytes.len(),
        };

        // `\n` is ASCII, so both ends fall on char boundaries.
        self.offset = if end < bytes.len() { end + 1 } else { end };
        let number = self.number;
        self.number += 1;

        Some(Line {
            text: &self.input[start..end],
            range: ByteRange::new(start, end),
            number,
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}
