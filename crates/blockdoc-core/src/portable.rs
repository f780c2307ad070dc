//! Stored block records.
//!
//! Content is persisted in the Portable Text record shape: a list of
//! `block` records with a `style`, an optional `listItem`, and `children`
//! spans carrying `marks`. Field names follow the storage collaborator, so
//! this module is the only place that knows them.
//!
//! Lowering typed blocks ([`to_portable`]) mirrors how content has always
//! been written: bold and italic become the `strong` and `em` decorators,
//! and a link becomes a bare `link` decorator with its URL dropped.
//! Rendering therefore cannot recover link destinations from parsed
//! Markdown, only from records that carry a link annotation.

use serde::{Deserialize, Serialize};

use crate::ast::{Block, Span};
use crate::error::Result;

pub const BLOCK_TYPE: &str = "block";
pub const SPAN_TYPE: &str = "span";
pub const STRONG: &str = "strong";
pub const EM: &str = "em";
pub const LINK: &str = "link";

/// One stored block record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortableBlock {
    #[serde(rename = "_type")]
    pub record_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default)]
    pub children: Vec<PortableChild>,
}

/// One child of a block record. Only `span` children carry text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortableChild {
    #[serde(rename = "_type")]
    pub child_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

/// A span mark: a decorator name or an annotation object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mark {
    Decorator(String),
    Annotation(Annotation),
}

/// Annotation mark, e.g. `{"_type": "link", "href": "https://..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "_type")]
    pub annotation_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Mark {
    pub fn decorator(name: &str) -> Self {
        Mark::Decorator(name.to_string())
    }

    pub fn link(href: impl Into<String>) -> Self {
        Mark::Annotation(Annotation {
            annotation_type: LINK.to_string(),
            href: Some(href.into()),
        })
    }
}

impl PortableBlock {
    fn new(style: &str, list_item: Option<&str>, children: Vec<PortableChild>) -> Self {
        Self {
            record_type: BLOCK_TYPE.to_string(),
            style: Some(style.to_string()),
            list_item: list_item.map(str::to_string),
            level: list_item.map(|_| 1),
            children,
        }
    }

    /// Whether this record is a text block (other record types are ignored).
    pub fn is_text_block(&self) -> bool {
        self.record_type == BLOCK_TYPE
    }

    /// Heading level from an `h1`..`h4` style.
    pub fn heading_level(&self) -> Option<u8> {
        match self.style.as_deref()? {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            _ => None,
        }
    }
}

impl PortableChild {
    pub fn span(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            child_type: SPAN_TYPE.to_string(),
            text: Some(text.into()),
            marks,
        }
    }

    pub fn is_span(&self) -> bool {
        self.child_type == SPAN_TYPE
    }
}

impl From<&Span> for PortableChild {
    fn from(span: &Span) -> Self {
        let marks = match span {
            Span::PlainText(_) => Vec::new(),
            Span::Bold(_) => vec![Mark::decorator(STRONG)],
            Span::Italic(_) => vec![Mark::decorator(EM)],
            Span::Link(_) => vec![Mark::decorator(LINK)],
        };
        PortableChild::span(span.text(), marks)
    }
}

impl From<&Block> for PortableBlock {
    fn from(block: &Block) -> Self {
        let children = block.spans().iter().map(PortableChild::from).collect();
        match block {
            Block::Heading(h) => {
                PortableBlock::new(&format!("h{}", h.level.clamp(1, 4)), None, children)
            }
            Block::Paragraph(_) => PortableBlock::new("normal", None, children),
            Block::BulletItem(_) => PortableBlock::new("normal", Some("bullet"), children),
            Block::NumberedItem(_) => PortableBlock::new("normal", Some("number"), children),
        }
    }
}

/// Lower typed blocks into stored records.
pub fn to_portable(blocks: &[Block]) -> Vec<PortableBlock> {
    blocks.iter().map(PortableBlock::from).collect()
}

/// Lift stored records into typed blocks.
///
/// Non-`block` records and non-`span` children are skipped. The first
/// recognized mark decides a span's kind: `strong`, `em`, or a link
/// annotation. A block left without spans gets one empty plain span.
pub fn from_portable(records: &[PortableBlock]) -> Vec<Block> {
    records
        .iter()
        .filter(|record| record.is_text_block())
        .map(lift_block)
        .collect()
}

fn lift_block(record: &PortableBlock) -> Block {
    let mut spans: Vec<Span> = record
        .children
        .iter()
        .filter(|child| child.is_span())
        .map(lift_span)
        .collect();
    if spans.is_empty() {
        spans.push(Span::plain(""));
    }

    if let Some(level) = record.heading_level() {
        return Block::heading(level, spans);
    }
    match record.list_item.as_deref() {
        Some("bullet") => Block::bullet(spans),
        Some("number") => Block::numbered(spans),
        _ => Block::paragraph(spans),
    }
}

fn lift_span(child: &PortableChild) -> Span {
    let text = child.text.clone().unwrap_or_default();
    for mark in &child.marks {
        match mark {
            Mark::Decorator(name) if name == STRONG => return Span::bold(text),
            Mark::Decorator(name) if name == EM => return Span::italic(text),
            Mark::Annotation(a) if a.annotation_type == LINK => {
                return Span::link(text, a.href.clone().unwrap_or_default());
            }
            _ => {}
        }
    }
    Span::plain(text)
}

/// Decode stored records from JSON.
pub fn portable_from_json(json: &str) -> Result<Vec<PortableBlock>> {
    Ok(serde_json::from_str(json)?)
}

/// Encode stored records as JSON.
pub fn portable_to_json(records: &[PortableBlock], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}
