//! Block and span types produced by the Markdown parser.
//!
//! The tree is deliberately shallow: a document is a flat, ordered list of
//! [`Block`]s and every block holds a flat, ordered list of inline [`Span`]s.
//! Nothing nests. Both enums are closed so every consumer matches all four
//! kinds exhaustively.
//!
//! With `serde`, blocks and spans are internally tagged by `kind`:
//!
//! ```json
//! {"kind": "heading", "level": 2, "spans": [{"kind": "plain_text", "text": "Hope"}]}
//! ```

use serde::{Deserialize, Serialize};

/// Block-level nodes.
///
/// Each block corresponds to exactly one non-blank source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Section heading (levels 1-4).
    Heading(Heading),
    /// One line of body text.
    Paragraph(Paragraph),
    /// Unordered list item (`- ` or `* `).
    BulletItem(ListItem),
    /// Ordered list item (`1. `). The source number is not kept.
    NumberedItem(ListItem),
}

/// Section heading with level and inline content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-4).
    pub level: u8,
    /// Inline content.
    pub spans: Vec<Span>,
}

/// A single line of body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub spans: Vec<Span>,
}

/// A bullet or numbered list item. Items never contain nested blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub spans: Vec<Span>,
}

impl Block {
    /// Build a heading. Levels outside 1-4 are clamped.
    pub fn heading(level: u8, spans: Vec<Span>) -> Self {
        Block::Heading(Heading {
            level: level.clamp(1, 4),
            spans,
        })
    }

    pub fn paragraph(spans: Vec<Span>) -> Self {
        Block::Paragraph(Paragraph { spans })
    }

    pub fn bullet(spans: Vec<Span>) -> Self {
        Block::BulletItem(ListItem { spans })
    }

    pub fn numbered(spans: Vec<Span>) -> Self {
        Block::NumberedItem(ListItem { spans })
    }

    /// Inline content of this block, in source order.
    pub fn spans(&self) -> &[Span] {
        match self {
            Block::Heading(h) => &h.spans,
            Block::Paragraph(p) => &p.spans,
            Block::BulletItem(item) | Block::NumberedItem(item) => &item.spans,
        }
    }

    /// The serialized `kind` tag of this block.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading(_) => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::BulletItem(_) => "bullet_item",
            Block::NumberedItem(_) => "numbered_item",
        }
    }

    /// Visible text of the block with all formatting removed.
    pub fn plain_text(&self) -> String {
        self.spans().iter().map(Span::text).collect()
    }
}

/// Inline-level nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Span {
    /// Unformatted text.
    PlainText(Text),
    /// Strong text (`**bold**`).
    Bold(Text),
    /// Emphasized text (`*italic*`).
    Italic(Text),
    /// Hyperlink (`[text](url)`).
    Link(Link),
}

/// Text payload shared by plain, bold and italic spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

/// Hyperlink with visible text and destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Link text shown to the reader.
    pub text: String,
    /// Link destination, exactly as written.
    pub url: String,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::PlainText(Text { text: text.into() })
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Span::Bold(Text { text: text.into() })
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Span::Italic(Text { text: text.into() })
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Link(Link {
            text: text.into(),
            url: url.into(),
        })
    }

    /// Display text of the span, ignoring marks and URLs.
    pub fn text(&self) -> &str {
        match self {
            Span::PlainText(t) | Span::Bold(t) | Span::Italic(t) => &t.text,
            Span::Link(l) => &l.text,
        }
    }

    /// The serialized `kind` tag of this span.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Span::PlainText(_) => "plain_text",
            Span::Bold(_) => "bold",
            Span::Italic(_) => "italic",
            Span::Link(_) => "link",
        }
    }
}
