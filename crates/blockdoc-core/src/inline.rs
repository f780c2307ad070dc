//! Inline span scanner.
//!
//! Three pattern families are searched independently over a fragment:
//! bold (`**text**`), italic (`*text*`) and link (`[text](url)`). All matches
//! are collected, sorted by start offset and walked left to right, with the
//! gaps between them emitted as plain text.
//!
//! Matches from different families are not reconciled. A bold run inside
//! link text, for example, produces both a link and a bold match whose
//! ranges overlap; they are emitted in start order as found.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Span;
use crate::range::ByteRange;

static BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern compiles"));

// Candidates only; see `italic_matches` for the `**` neighbour check.
static ITALIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("italic pattern compiles"));

static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern compiles"));

/// Which pattern family produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Bold,
    Italic,
    Link,
}

/// One pattern match inside a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch<'a> {
    pub kind: MatchKind,
    /// Range of the whole match, delimiters included.
    pub range: ByteRange,
    /// Captured inner text.
    pub text: &'a str,
    /// Captured destination, links only.
    pub url: Option<&'a str>,
}

impl InlineMatch<'_> {
    fn to_span(&self) -> Span {
        match self.kind {
            MatchKind::Bold => Span::bold(self.text),
            MatchKind::Italic => Span::italic(self.text),
            MatchKind::Link => Span::link(self.text, self.url.unwrap_or_default()),
        }
    }
}

/// Collect every bold, italic and link match in `fragment`, sorted by start
/// offset. Ties keep family order: bold, italic, link.
pub fn find_matches(fragment: &str) -> Vec<InlineMatch<'_>> {
    let mut matches = Vec::new();

    for caps in BOLD_REGEX.captures_iter(fragment) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        matches.push(InlineMatch {
            kind: MatchKind::Bold,
            range: ByteRange::new(whole.start(), whole.end()),
            text: inner.as_str(),
            url: None,
        });
    }

    matches.extend(italic_matches(fragment));

    for caps in LINK_REGEX.captures_iter(fragment) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        matches.push(InlineMatch {
            kind: MatchKind::Link,
            range: ByteRange::new(whole.start(), whole.end()),
            text: label.as_str(),
            url: Some(url.as_str()),
        });
    }

    matches.sort_by_key(|m| m.range.start);
    matches
}

/// Single-asterisk runs whose delimiters are not part of a `**` pair.
///
/// A candidate touching another `*` on either side is rejected and the
/// search resumes one byte after its opening asterisk.
fn italic_matches(fragment: &str) -> Vec<InlineMatch<'_>> {
    let bytes = fragment.as_bytes();
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(caps) = ITALIC_REGEX.captures_at(fragment, pos) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let star_before = whole.start() > 0 && bytes[whole.start() - 1] == b'*';
        let star_after = bytes.get(whole.end()) == Some(&b'*');
        if star_before || star_after {
            pos = whole.start() + 1;
            continue;
        }
        matches.push(InlineMatch {
            kind: MatchKind::Italic,
            range: ByteRange::new(whole.start(), whole.end()),
            text: inner.as_str(),
            url: None,
        });
        pos = whole.end();
    }

    matches
}

/// Parse a fragment into spans.
///
/// Never fails: text that no pattern matches, including unterminated
/// delimiters, comes back as plain text. The result is never empty.
pub fn parse_spans(fragment: &str) -> Vec<Span> {
    let matches = find_matches(fragment);
    if matches.is_empty() {
        return vec![Span::plain(fragment)];
    }

    let mut spans = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;

    for m in &matches {
        if m.range.start > cursor {
            spans.push(Span::plain(ByteRange::new(cursor, m.range.start).slice(fragment)));
        }
        spans.push(m.to_span());
        // Overlapping matches can move the cursor backwards.
        cursor = m.range.end;
    }

    if cursor < fragment.len() {
        spans.push(Span::plain(&fragment[cursor..]));
    }

    spans
}
