//! Integration tests for Markdown parsing and rendering

use blockdoc_core::inline::{find_matches, parse_spans, MatchKind};
use blockdoc_core::lexer::{Lexer, LineKind};
use blockdoc_core::{blocks_to_markdown, markdown_to_blocks, Block, Span};
use pretty_assertions::assert_eq;

fn only_block(input: &str) -> Block {
    let blocks = markdown_to_blocks(input);
    assert_eq!(blocks.len(), 1, "expected one block for {:?}", input);
    blocks.into_iter().next().unwrap()
}

// ============================================================================
// Fallback Tests
// ============================================================================

#[test]
fn test_empty_input_falls_back_to_paragraph() {
    let blocks = markdown_to_blocks("");
    assert_eq!(blocks, vec![Block::paragraph(vec![Span::plain("")])]);
}

#[test]
fn test_plain_text_single_paragraph() {
    let block = only_block("just plain text, no markers");
    assert_eq!(
        block,
        Block::paragraph(vec![Span::plain("just plain text, no markers")])
    );
}

#[test]
fn test_plain_text_is_trimmed() {
    let block = only_block("   surrounded by spaces   ");
    assert_eq!(block, Block::paragraph(vec![Span::plain("surrounded by spaces")]));
}

#[test]
fn test_blank_only_input_kept_verbatim() {
    let input = "\n   \n\t\n";
    let blocks = markdown_to_blocks(input);
    assert_eq!(blocks, vec![Block::paragraph(vec![Span::plain(input)])]);
}

// ============================================================================
// Heading Tests
// ============================================================================

#[test]
fn test_heading_levels() {
    let blocks = markdown_to_blocks("# A\n## B\n### C\n#### D");
    assert_eq!(blocks.len(), 4);

    for (i, (block, text)) in blocks.iter().zip(["A", "B", "C", "D"]).enumerate() {
        match block {
            Block::Heading(h) => {
                assert_eq!(h.level, (i + 1) as u8);
                assert_eq!(h.spans, vec![Span::plain(text)]);
            }
            other => panic!("Expected heading, got {:?}", other),
        }
    }
}

#[test]
fn test_heading_without_space_is_paragraph() {
    let block = only_block("#NoSpace");
    assert_eq!(block, Block::paragraph(vec![Span::plain("#NoSpace")]));
}

#[test]
fn test_heading_level_five_is_paragraph() {
    let block = only_block("##### Five hashes");
    assert_eq!(block, Block::paragraph(vec![Span::plain("##### Five hashes")]));
}

#[test]
fn test_heading_inline_formatting() {
    let block = only_block("## The **Good** Shepherd");
    assert_eq!(
        block,
        Block::heading(
            2,
            vec![
                Span::plain("The "),
                Span::bold("Good"),
                Span::plain(" Shepherd"),
            ]
        )
    );
}

#[test]
fn test_heading_remainder_keeps_inner_spacing() {
    let block = only_block("#  Spaced");
    assert_eq!(block, Block::heading(1, vec![Span::plain(" Spaced")]));
}

#[test]
fn test_indented_heading() {
    let block = only_block("    ### Indented");
    assert_eq!(block, Block::heading(3, vec![Span::plain("Indented")]));
}

// ============================================================================
// List Tests
// ============================================================================

#[test]
fn test_bullet_items() {
    let blocks = markdown_to_blocks("- one\n- two");
    assert_eq!(
        blocks,
        vec![
            Block::bullet(vec![Span::plain("one")]),
            Block::bullet(vec![Span::plain("two")]),
        ]
    );
}

#[test]
fn test_asterisk_bullet() {
    let block = only_block("* pray daily");
    assert_eq!(block, Block::bullet(vec![Span::plain("pray daily")]));
}

#[test]
fn test_numbered_items_ignore_digits() {
    let blocks = markdown_to_blocks("1. first\n2. second\n10. tenth");
    assert_eq!(
        blocks,
        vec![
            Block::numbered(vec![Span::plain("first")]),
            Block::numbered(vec![Span::plain("second")]),
            Block::numbered(vec![Span::plain("tenth")]),
        ]
    );
}

#[test]
fn test_number_without_space_is_paragraph() {
    let block = only_block("3.14 is not a list");
    assert!(matches!(block, Block::Paragraph(_)));
}

#[test]
fn test_list_item_inline_formatting() {
    let block = only_block("- read *Psalm 46*");
    assert_eq!(
        block,
        Block::bullet(vec![Span::plain("read "), Span::italic("Psalm 46")])
    );
}

// ============================================================================
// Paragraph Tests
// ============================================================================

#[test]
fn test_one_line_per_paragraph() {
    let blocks = markdown_to_blocks("line one\nline two");
    assert_eq!(
        blocks,
        vec![
            Block::paragraph(vec![Span::plain("line one")]),
            Block::paragraph(vec![Span::plain("line two")]),
        ]
    );
}

#[test]
fn test_heading_then_text_line_keeps_both() {
    let blocks = markdown_to_blocks("# A\nbody");
    assert_eq!(
        blocks,
        vec![
            Block::heading(1, vec![Span::plain("A")]),
            Block::paragraph(vec![Span::plain("body")]),
        ]
    );
}

#[test]
fn test_blank_lines_only_separate() {
    let blocks = markdown_to_blocks("first\n\n\n\nsecond");
    assert_eq!(blocks.len(), 2);
}

#[test]
fn test_mixed_document_order() {
    let input = "# Morning\n\nGive thanks.\n- for rest\n1. pray\n\n## Evening";
    let kinds: Vec<&str> = markdown_to_blocks(input)
        .iter()
        .map(Block::kind_name)
        .collect();
    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "bullet_item",
            "numbered_item",
            "heading"
        ]
    );
}

#[test]
fn test_crlf_line_endings() {
    let blocks = markdown_to_blocks("# Title\r\nBody\r\n");
    assert_eq!(
        blocks,
        vec![
            Block::heading(1, vec![Span::plain("Title")]),
            Block::paragraph(vec![Span::plain("Body")]),
        ]
    );
}

// ============================================================================
// Inline Span Tests
// ============================================================================

#[test]
fn test_inline_composition() {
    let block = only_block("Hello **world** and *universe* and [link](http://x)");
    assert_eq!(
        block.spans(),
        &[
            Span::plain("Hello "),
            Span::bold("world"),
            Span::plain(" and "),
            Span::italic("universe"),
            Span::plain(" and "),
            Span::link("link", "http://x"),
        ]
    );
}

#[test]
fn test_bold_is_not_also_italic() {
    let matches = find_matches("**world**");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, MatchKind::Bold);
    assert_eq!(matches[0].text, "world");
}

#[test]
fn test_match_ranges_sorted() {
    let matches = find_matches("[a](b) *c* **d**");
    let starts: Vec<usize> = matches.iter().map(|m| m.range.start).collect();
    assert_eq!(starts, vec![0, 7, 11]);
    assert_eq!(matches[0].url, Some("b"));
}

#[test]
fn test_unterminated_bold_is_literal() {
    assert_eq!(parse_spans("**oops"), vec![Span::plain("**oops")]);
}

#[test]
fn test_trailing_text_after_match() {
    assert_eq!(
        parse_spans("*Selah* amen"),
        vec![Span::italic("Selah"), Span::plain(" amen")]
    );
}

#[test]
fn test_triple_asterisk_reads_as_bold() {
    assert_eq!(
        parse_spans("***x***"),
        vec![Span::plain("*"), Span::bold("x"), Span::plain("*")]
    );
}

#[test]
fn test_italic_found_on_very_long_line() {
    let long = "a".repeat(500_000);
    let fragment = format!("*{}** *ok*", long);

    let matches = find_matches(&fragment);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, MatchKind::Italic);

    assert_eq!(
        parse_spans(&fragment),
        vec![Span::plain(format!("*{}** ", long)), Span::italic("ok")]
    );
}

#[test]
fn test_overlapping_matches_are_not_merged() {
    // The bold run inside the link label is matched independently.
    assert_eq!(
        parse_spans("[**a**](u)"),
        vec![
            Span::link("**a**", "u"),
            Span::bold("a"),
            Span::plain("](u)"),
        ]
    );
}

#[test]
fn test_unicode_text_around_matches() {
    assert_eq!(
        parse_spans("Señor **ten piedad** 🙏"),
        vec![
            Span::plain("Señor "),
            Span::bold("ten piedad"),
            Span::plain(" 🙏"),
        ]
    );
}

// ============================================================================
// Lexer Tests
// ============================================================================

#[test]
fn test_lexer_splits_every_newline() {
    let lines: Vec<&str> = Lexer::new("a\n\nb").map(|l| l.text).collect();
    assert_eq!(lines, vec!["a", "", "b"]);
}

#[test]
fn test_line_ranges_and_numbers() {
    let lines: Vec<_> = Lexer::new("ab\ncd").collect();
    assert_eq!(lines[1].range.start, 3);
    assert_eq!(lines[1].range.end, 5);
    assert_eq!(lines[1].number, 1);
}

#[test]
fn test_classify_priority() {
    assert_eq!(
        LineKind::classify("## x"),
        LineKind::Heading { level: 2, rest: "x" }
    );
    assert_eq!(LineKind::classify("* x"), LineKind::Bullet("x"));
    assert_eq!(LineKind::classify("42. x"), LineKind::Numbered("x"));
    assert_eq!(LineKind::classify(""), LineKind::Blank);
    assert_eq!(LineKind::classify("*x*"), LineKind::Text("*x*"));
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_render_empty() {
    assert_eq!(blocks_to_markdown(&[]), "");
}

#[test]
fn test_render_block_prefixes() {
    let blocks = vec![
        Block::heading(1, vec![Span::plain("One")]),
        Block::heading(4, vec![Span::plain("Four")]),
        Block::bullet(vec![Span::plain("item")]),
        Block::paragraph(vec![Span::plain("text")]),
    ];
    assert_eq!(
        blocks_to_markdown(&blocks),
        "# One\n\n#### Four\n\n- item\n\ntext"
    );
}

#[test]
fn test_render_numbered_always_one() {
    let blocks = vec![
        Block::numbered(vec![Span::plain("first")]),
        Block::numbered(vec![Span::plain("second")]),
        Block::numbered(vec![Span::plain("third")]),
    ];
    assert_eq!(
        blocks_to_markdown(&blocks),
        "1. first\n\n1. second\n\n1. third"
    );
}

#[test]
fn test_render_marks() {
    let blocks = vec![Block::paragraph(vec![
        Span::plain("Be "),
        Span::bold("still"),
        Span::plain(" and "),
        Span::italic("know"),
    ])];
    assert_eq!(blocks_to_markdown(&blocks), "Be **still** and *know*");
}

#[test]
fn test_render_skips_empty_blocks() {
    let blocks = vec![
        Block::paragraph(vec![Span::plain("")]),
        Block::heading(2, vec![Span::plain("")]),
        Block::paragraph(vec![Span::plain("kept")]),
    ];
    assert_eq!(blocks_to_markdown(&blocks), "kept");
}

#[test]
fn test_render_link_drops_url() {
    let blocks = vec![Block::paragraph(vec![Span::link("Romans 8", "https://x")])];
    assert_eq!(blocks_to_markdown(&blocks), "Romans 8");
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[test]
fn test_round_trip_plain_headings_and_paragraphs() {
    let blocks = vec![
        Block::heading(1, vec![Span::plain("Advent")]),
        Block::paragraph(vec![Span::plain("Wait with hope.")]),
        Block::heading(3, vec![Span::plain("Week one")]),
        Block::paragraph(vec![Span::plain("Light a candle.")]),
    ];
    let markdown = blocks_to_markdown(&blocks);
    assert_eq!(markdown_to_blocks(&markdown), blocks);
}

#[test]
fn test_round_trip_bold_and_italic() {
    let input = "Grace **upon** *grace*";
    let blocks = markdown_to_blocks(input);
    assert_eq!(blocks_to_markdown(&blocks), input);
}

#[test]
fn test_round_trip_loses_link_destination() {
    let blocks = markdown_to_blocks("See [John 3](https://example.org/john3)");
    let reparsed = markdown_to_blocks(&blocks_to_markdown(&blocks));

    assert_ne!(reparsed, blocks);
    assert_eq!(reparsed, vec![Block::paragraph(vec![Span::plain("See John 3")])]);
}

#[test]
fn test_round_trip_renumbers_items() {
    let markdown = blocks_to_markdown(&markdown_to_blocks("7. seven\n8. eight"));
    assert_eq!(markdown, "1. seven\n\n1. eight");
}

// ============================================================================
// Serde Tests
// ============================================================================

#[test]
fn test_block_json_shape() {
    let block = Block::heading(2, vec![Span::plain("Hope"), Span::link("more", "/m")]);
    let value = serde_json::to_value(&block).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "kind": "heading",
            "level": 2,
            "spans": [
                {"kind": "plain_text", "text": "Hope"},
                {"kind": "link", "text": "more", "url": "/m"}
            ]
        })
    );

    let back: Block = serde_json::from_value(value).unwrap();
    assert_eq!(back, block);
}
