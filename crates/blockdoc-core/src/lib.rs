//! # blockdoc core
//!
//! Conversion between a small Markdown dialect and the block/span model
//! used to store devotional content.
//!
//! ## Quick Start
//!
//! ```rust
//! use blockdoc_core::{blocks_to_markdown, markdown_to_blocks, Block, Span};
//!
//! let blocks = markdown_to_blocks("# Psalm 23\n\nThe Lord is my **shepherd**.");
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[1].spans()[1], Span::bold("shepherd"));
//!
//! let markdown = blocks_to_markdown(&blocks);
//! assert_eq!(markdown, "# Psalm 23\n\nThe Lord is my **shepherd**.");
//! ```
//!
//! ## Dialect
//!
//! One block per non-blank line:
//!
//! - `# ` to `#### ` open headings
//! - `- ` and `* ` open bullet items, `1. ` (any digits) numbered items
//! - every other line is its own paragraph; lines are never merged
//!
//! Inline `**bold**`, `*italic*` and `[text](url)` are recognized. Anything
//! else, including unterminated delimiters, is plain text.
//!
//! ## Asymmetry
//!
//! [`blocks_to_markdown`] is not an inverse of [`markdown_to_blocks`]. Links
//! are stored without their destination, so they render as plain text:
//!
//! ```rust
//! use blockdoc_core::{blocks_to_markdown, markdown_to_blocks};
//!
//! let blocks = markdown_to_blocks("Read [Romans 8](https://example.org/rom8)");
//! assert_eq!(blocks_to_markdown(&blocks), "Read Romans 8");
//! ```

pub mod ast;
pub mod error;
pub mod inline;
pub mod lexer;
pub mod parser;
pub mod portable;
pub mod range;
pub mod reflection;
pub mod serializer;

pub use ast::{Block, Span};
pub use error::{Error, Result};
pub use parser::markdown_to_blocks;
pub use portable::{from_portable, portable_from_json, portable_to_json, to_portable, PortableBlock};
pub use reflection::{ReflectionDocument, ReflectionDraft};
pub use serializer::{blocks_to_markdown, portable_to_markdown};
