//! Line-oriented block parser.
//!
//! A single pass over the input with one pending-block register. Every
//! block kind is complete after its own line, so the register never holds
//! more than one line of content:
//!
//! - heading and list lines close the pending block and become pending;
//! - a blank line closes the pending block;
//! - a text line closes the pending block and is emitted at once as its
//!   own paragraph. Consecutive text lines are never merged.

use crate::ast::{Block, Span};
use crate::inline::parse_spans;
use crate::lexer::{Lexer, LineKind};

/// Parse Markdown into blocks.
///
/// Total over all inputs. When no line produces a block (empty or
/// all-blank input) the result is one paragraph holding the input verbatim.
///
/// ```rust
/// use blockdoc_core::{markdown_to_blocks, Block};
///
/// let blocks = markdown_to_blocks("# Grace\n\nline one\nline two");
/// assert_eq!(blocks.len(), 3);
/// assert!(matches!(blocks[0], Block::Heading(ref h) if h.level == 1));
/// ```
pub fn markdown_to_blocks(input: &str) -> Vec<Block> {
    let blocks = BlockParser::new(input).parse();
    log::debug!("parsed {} bytes into {} blocks", input.len(), blocks.len());
    blocks
}

struct BlockParser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    /// The block opened by the previous line, not yet emitted.
    pending: Option<Block>,
    blocks: Vec<Block>,
}

impl<'a> BlockParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            lexer: Lexer::new(input),
            pending: None,
            blocks: Vec::with_capacity(16),
        }
    }

    fn parse(mut self) -> Vec<Block> {
        while let Some(line) = self.lexer.next_line() {
            let kind = line.kind();
            log::trace!("line {}: {:?}", line.number + 1, kind);

            match kind {
                LineKind::Heading { level, rest } => {
                    self.open(Block::heading(level, parse_spans(rest)));
                }
                LineKind::Bullet(rest) => self.open(Block::bullet(parse_spans(rest))),
                LineKind::Numbered(rest) => self.open(Block::numbered(parse_spans(rest))),
                LineKind::Blank => self.close(),
                LineKind::Text(text) => {
                    self.close();
                    self.blocks.push(Block::paragraph(parse_spans(text)));
                }
            }
        }

        self.close();

        if self.blocks.is_empty() {
            return vec![Block::paragraph(vec![Span::plain(self.input)])];
        }

        self.blocks
    }

    #[inline]
    fn open(&mut self, block: Block) {
        self.close();
        self.pending = Some(block);
    }

    #[inline]
    fn close(&mut self) {
        if let Some(block) = self.pending.take() {
            self.blocks.push(block);
        }
    }
}
