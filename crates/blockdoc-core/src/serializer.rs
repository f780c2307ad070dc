//! Markdown rendering of stored blocks.
//!
//! This is not an inverse of the parser. Only the `strong` and `em`
//! decorators and link annotations produce syntax; every other mark,
//! including the bare `link` decorator the parser writes, renders as plain
//! text. Typed blocks are lowered to stored records first so both entry
//! points share one rendering path.

use crate::ast::Block;
use crate::portable::{to_portable, Mark, PortableBlock, PortableChild, EM, LINK, STRONG};

/// Separator between rendered blocks.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Render typed blocks as Markdown.
///
/// ```rust
/// use blockdoc_core::{blocks_to_markdown, Block, Span};
///
/// let blocks = vec![
///     Block::heading(2, vec![Span::plain("Morning")]),
///     Block::paragraph(vec![Span::plain("Be "), Span::bold("still")]),
/// ];
/// assert_eq!(blocks_to_markdown(&blocks), "## Morning\n\nBe **still**");
/// ```
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    portable_to_markdown(&to_portable(blocks))
}

/// Render stored records as Markdown.
///
/// Records that are not text blocks, and blocks whose text is empty,
/// contribute nothing.
pub fn portable_to_markdown(records: &[PortableBlock]) -> String {
    let lines: Vec<String> = records.iter().filter_map(render_block).collect();
    log::debug!("rendered {} of {} records", lines.len(), records.len());
    lines.join(BLOCK_SEPARATOR)
}

fn render_block(record: &PortableBlock) -> Option<String> {
    if !record.is_text_block() {
        return None;
    }

    let text: String = record.children.iter().map(render_child).collect();
    if text.is_empty() {
        return None;
    }

    if let Some(level) = record.heading_level() {
        return Some(format!("{} {}", "#".repeat(level as usize), text));
    }

    // Numbered items always render as `1.`, whatever their position.
    let line = match record.list_item.as_deref() {
        Some("bullet") => format!("- {text}"),
        Some("number") => format!("1. {text}"),
        _ => text,
    };
    Some(line)
}

fn render_child(child: &PortableChild) -> String {
    if !child.is_span() {
        return String::new();
    }

    let mut text = child.text.clone().unwrap_or_default();
    for mark in &child.marks {
        text = apply_mark(text, mark);
    }
    text
}

/// Wrap `text` for one mark. Later marks wrap earlier ones.
fn apply_mark(text: String, mark: &Mark) -> String {
    match mark {
        Mark::Decorator(name) if name == STRONG => format!("**{text}**"),
        Mark::Decorator(name) if name == EM => format!("*{text}*"),
        Mark::Annotation(a) if a.annotation_type == LINK => {
            format!("[{}]({})", text, a.href.as_deref().unwrap_or_default())
        }
        _ => text,
    }
}
