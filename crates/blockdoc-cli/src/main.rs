//! blockdoc CLI - Convert devotional content between Markdown and stored blocks
//!
//! Usage:
//!   blockdoc [OPTIONS] <COMMAND> <FILE>
//!
//! Commands:
//!   parse       Parse Markdown and display the block structure
//!   render      Render stored block JSON back to Markdown
//!   reflection  Build a daily reflection document from a Markdown body
//!   stats       Show document statistics

mod config;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use blockdoc_core::{
    markdown_to_blocks, portable_from_json, portable_to_markdown, to_portable, Block,
    ReflectionDraft, Span,
};
use clap::{Parser, Subcommand};

use crate::config::{CliConfig, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "blockdoc",
    version,
    about = "Convert devotional content between Markdown and stored blocks"
)]
struct Cli {
    /// Configuration file layered over the defaults
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show debug logging and span-level detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse Markdown and display the block structure
    Parse {
        /// Markdown file, or `-` for stdin
        file: PathBuf,
        /// Output format (defaults to `output.format` from config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Shorthand for `--format json`
        #[arg(short, long, conflicts_with_all = ["format", "portable"])]
        json: bool,
        /// Shorthand for `--format portable`
        #[arg(short, long, conflicts_with = "format")]
        portable: bool,
    },
    /// Render stored block JSON back to Markdown
    Render {
        /// Stored block JSON file, or `-` for stdin
        file: PathBuf,
    },
    /// Build a daily reflection document from a Markdown body
    Reflection {
        /// Markdown body, or `-` for stdin
        file: PathBuf,
        #[arg(long)]
        title: String,
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[arg(long)]
        author: Option<String>,
        /// Scripture reference, e.g. "John 3:16"
        #[arg(long)]
        scripture: Option<String>,
        /// Mark the reflection as published
        #[arg(long)]
        publish: bool,
    },
    /// Show document statistics
    Stats {
        /// Markdown file, or `-` for stdin
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Command::Parse {
            file,
            format,
            json,
            portable,
        } => {
            let format = if json {
                OutputFormat::Json
            } else if portable {
                OutputFormat::Portable
            } else {
                format.unwrap_or(config.output.format)
            };
            let input = read_input(&file)?;
            cmd_parse(&input, format, cli.verbose, &config)
        }
        Command::Render { file } => {
            let input = read_input(&file)?;
            cmd_render(&input, &file)
        }
        Command::Reflection {
            file,
            title,
            date,
            author,
            scripture,
            publish,
        } => {
            let input = read_input(&file)?;
            let mut draft = ReflectionDraft::new(title, date, input)
                .published(publish || config.reflection.publish);
            draft.author = author.or_else(|| Some(config.reflection.author.clone()));
            draft.scripture = scripture;
            cmd_reflection(draft, &config)
        }
        Command::Stats { file } => {
            let input = read_input(&file)?;
            cmd_stats(&input);
            Ok(())
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

// =============================================================================
// Parse Command
// =============================================================================

fn cmd_parse(input: &str, format: OutputFormat, verbose: bool, config: &CliConfig) -> Result<()> {
    let blocks = markdown_to_blocks(input);

    match format {
        OutputFormat::Json => println!("{}", to_json(&blocks, config.output.pretty)?),
        OutputFormat::Portable => {
            println!("{}", to_json(&to_portable(&blocks), config.output.pretty)?)
        }
        OutputFormat::Text => {
            if verbose {
                print_blocks_verbose(&blocks);
            } else {
                print_blocks_summary(&blocks);
            }
        }
    }

    Ok(())
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(input: &str, file: &Path) -> Result<()> {
    let records = portable_from_json(input)
        .with_context(|| format!("failed to decode '{}'", file.display()))?;
    println!("{}", portable_to_markdown(&records));
    Ok(())
}

// =============================================================================
// Reflection Command
// =============================================================================

fn cmd_reflection(draft: ReflectionDraft, config: &CliConfig) -> Result<()> {
    let document = draft
        .into_document(chrono::Utc::now())
        .context("invalid reflection")?;
    log::info!(
        "built reflection '{}' with {} blocks",
        document.title,
        document.content.len()
    );
    println!("{}", to_json(&document, config.output.pretty)?);
    Ok(())
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(input: &str) {
    let blocks = markdown_to_blocks(input);
    let stats = DocumentStats::from_blocks(&blocks, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Blocks:");
    println!("  Total:          {}", stats.total_blocks);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Bullet items:   {}", stats.bullet_items);
    println!("  Numbered items: {}", stats.numbered_items);
    println!();
    println!("Spans:");
    println!("  Plain:          {}", stats.plain_spans);
    println!("  Bold:           {}", stats.bold_spans);
    println!("  Italic:         {}", stats.italic_spans);
    println!("  Links:          {}", stats.links);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);
}

#[derive(Debug, Default, PartialEq, Eq)]
struct DocumentStats {
    total_blocks: usize,
    headings: usize,
    paragraphs: usize,
    bullet_items: usize,
    numbered_items: usize,
    plain_spans: usize,
    bold_spans: usize,
    italic_spans: usize,
    links: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_blocks(blocks: &[Block], input: &str) -> Self {
        let mut stats = Self {
            total_blocks: blocks.len(),
            chars: input.chars().count(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
            ..Self::default()
        };

        for block in blocks {
            match block {
                Block::Heading(_) => stats.headings += 1,
                Block::Paragraph(_) => stats.paragraphs += 1,
                Block::BulletItem(_) => stats.bullet_items += 1,
                Block::NumberedItem(_) => stats.numbered_items += 1,
            }
            for span in block.spans() {
                match span {
                    Span::PlainText(_) => stats.plain_spans += 1,
                    Span::Bold(_) => stats.bold_spans += 1,
                    Span::Italic(_) => stats.italic_spans += 1,
                    Span::Link(_) => stats.links += 1,
                }
            }
        }

        stats
    }
}

// =============================================================================
// Text Output
// =============================================================================

fn print_blocks_summary(blocks: &[Block]) {
    println!("Blocks: {}", blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        println!("  [{}] {}: {}", i + 1, describe_block(block), block.plain_text());
    }
}

fn print_blocks_verbose(blocks: &[Block]) {
    println!("=== Blocks ===");
    for (i, block) in blocks.iter().enumerate() {
        println!();
        println!("[{}] {}", i + 1, describe_block(block));
        for span in block.spans() {
            println!("  {}", describe_span(span));
        }
    }
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Heading(h) => format!("Heading (level {})", h.level),
        Block::Paragraph(_) => "Paragraph".to_string(),
        Block::BulletItem(_) => "BulletItem".to_string(),
        Block::NumberedItem(_) => "NumberedItem".to_string(),
    }
}

fn describe_span(span: &Span) -> String {
    match span {
        Span::PlainText(t) => format!("PlainText {:?}", t.text),
        Span::Bold(t) => format!("Bold {:?}", t.text),
        Span::Italic(t) => format!("Italic {:?}", t.text),
        Span::Link(l) => format!("Link {:?} -> {}", l.text, l.url),
    }
}
