//! Markdown Parser
//!
//! This module parses Markdown text into a `docshift_ast::Document`, one line
//! at a time. Each line is trimmed and classified on its own; there is no
//! lookahead and no inline parsing.
//!
//! # Supported Syntax
//!
//! - Headings: `# Level 1`, `## Level 2`, ... (level = number of `#`)
//! - Bullets: `- item`, `* item`, `+ item`
//! - Numbered items: any line starting with a digit and containing `.`
//! - Everything else is a paragraph; empty lines are paragraph breaks
//!
//! Empty lines directly after a list item are swallowed, so a blank line
//! between two lists joins them into one.
//!
//! # Example
//!
//! ```
//! use docshift_core::parser;
//!
//! let doc = parser::parse("## Notes\n\n1. first\n2. second");
//! assert_eq!(doc.len(), 4);
//! ```

use std::fs;
use std::path::Path;

use docshift_ast::{percent, Block, Document, NoProgress, Progress};
use tracing::debug;

use crate::error::{ParseError, Result};

/// Line-by-line Markdown parser
struct Parser {
    /// Accumulated blocks
    doc: Document,
}

impl Parser {
    fn new() -> Self {
        Self {
            doc: Document::new(),
        }
    }

    /// True when the most recently emitted block is a list item
    fn in_list(&self) -> bool {
        self.doc.last().is_some_and(Block::is_list_item)
    }

    /// Parse the entire document, reporting after every line
    fn parse(mut self, text: &str, progress: &mut dyn Progress) -> Document {
        let lines: Vec<&str> = text.split('\n').collect();
        let total = lines.len();

        for (index, line) in lines.iter().enumerate() {
            self.process_line(line);
            progress.report(percent(index, total));
        }

        progress.report(100);
        debug!(lines = total, blocks = self.doc.len(), "parsed markdown");
        self.doc
    }

    /// Process a single line
    fn process_line(&mut self, line: &str) {
        let line = line.trim();

        if line.is_empty() {
            if !self.in_list() {
                self.doc.push(Block::Blank);
            }
            return;
        }

        let block = try_parse_heading(line)
            .or_else(|| try_parse_bullet(line))
            .or_else(|| try_parse_numbered(line))
            .unwrap_or_else(|| Block::paragraph(line));
        self.doc.push(block);
    }
}

/// `#`, `##`, ... followed by the heading text
fn try_parse_heading(line: &str) -> Option<Block> {
    if !line.starts_with('#') {
        return None;
    }
    let level = line.chars().take_while(|&c| c == '#').count();
    Some(Block::heading(level, line[level..].trim()))
}

/// `- `, `* ` or `+ ` followed by the item text
fn try_parse_bullet(line: &str) -> Option<Block> {
    ["- ", "* ", "+ "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(|rest| Block::list_item(false, rest))
}

/// A leading digit and a `.` anywhere; the text follows the first `.`
///
/// The prefix is not checked further, so `3.14 is pi` becomes an item
/// with text `14 is pi`.
fn try_parse_numbered(line: &str) -> Option<Block> {
    if !line.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let (_, rest) = line.split_once('.')?;
    Some(Block::list_item(true, rest.trim()))
}

/// Parse Markdown text into a document
pub fn parse(text: &str) -> Document {
    parse_with_progress(text, &mut NoProgress)
}

/// Parse Markdown text, reporting `round(line / lines * 100)` after each
/// line and a final `100`
pub fn parse_with_progress(text: &str, progress: &mut dyn Progress) -> Document {
    Parser::new().parse(text, progress)
}

/// Read and parse a Markdown file
///
/// No progress is reported if the file cannot be read.
pub fn parse_file<P: AsRef<Path>>(path: P, progress: &mut dyn Progress) -> Result<Document> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_with_progress(&text, progress))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docshift_ast::{Heading, ListItem};

    #[test]
    fn test_heading_levels() {
        let doc = parse("# One\n### Three\n###### Six");
        assert_eq!(
            doc.blocks,
            vec![
                Block::heading(1, "One"),
                Block::heading(3, "Three"),
                Block::heading(6, "Six"),
            ]
        );
    }

    #[test]
    fn test_heading_level_is_unbounded() {
        let doc = parse("######## Deep");
        assert_eq!(
            doc.blocks[0],
            Block::Heading(Heading {
                level: 8,
                text: "Deep".to_string()
            })
        );
    }

    #[test]
    fn test_heading_without_space() {
        let doc = parse("##Tight");
        assert_eq!(doc.blocks[0], Block::heading(2, "Tight"));
    }

    #[test]
    fn test_bullet_markers() {
        let doc = parse("- dash\n* star\n+ plus");
        assert_eq!(
            doc.blocks,
            vec![
                Block::list_item(false, "dash"),
                Block::list_item(false, "star"),
                Block::list_item(false, "plus"),
            ]
        );
    }

    #[test]
    fn test_bullet_requires_space() {
        let doc = parse("-dash");
        assert_eq!(doc.blocks[0], Block::paragraph("-dash"));
    }

    #[test]
    fn test_numbered_items() {
        let doc = parse("1. first\n10.   tenth");
        assert_eq!(
            doc.blocks,
            vec![Block::list_item(true, "first"), Block::list_item(true, "tenth")]
        );
    }

    #[test]
    fn test_decimal_number_is_misread_as_item() {
        let doc = parse("3.14 is pi");
        assert_eq!(doc.blocks[0], Block::list_item(true, "14 is pi"));
    }

    #[test]
    fn test_digit_without_dot_is_paragraph() {
        let doc = parse("2024 was a year");
        assert_eq!(doc.blocks[0], Block::paragraph("2024 was a year"));
    }

    #[test]
    fn test_list_level_is_flat() {
        let doc = parse("- top\n    - nested");
        for block in &doc.blocks {
            match block {
                Block::ListItem(ListItem { level, .. }) => assert_eq!(*level, 0),
                other => panic!("Expected list item, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_lines_are_trimmed() {
        let doc = parse("   plain text   \r\n\t# Title ");
        assert_eq!(
            doc.blocks,
            vec![Block::paragraph("plain text"), Block::heading(1, "Title")]
        );
    }

    #[test]
    fn test_blank_lines_between_paragraphs() {
        let doc = parse("one\n\ntwo");
        assert_eq!(
            doc.blocks,
            vec![Block::paragraph("one"), Block::Blank, Block::paragraph("two")]
        );
    }

    #[test]
    fn test_blank_lines_after_list_are_swallowed() {
        let doc = parse("- a\n\n\n- b\n\npara");
        assert_eq!(
            doc.blocks,
            vec![
                Block::list_item(false, "a"),
                Block::list_item(false, "b"),
                Block::paragraph("para"),
            ]
        );
    }

    #[test]
    fn test_trailing_newline_yields_blank() {
        let doc = parse("text\n");
        assert_eq!(doc.blocks, vec![Block::paragraph("text"), Block::Blank]);
    }

    #[test]
    fn test_empty_input() {
        let doc = parse("");
        assert_eq!(doc.blocks, vec![Block::Blank]);
    }

    #[test]
    fn test_progress_per_line() {
        let mut seen = Vec::new();
        parse_with_progress("a\nb\nc\nd", &mut |p: u8| seen.push(p));
        assert_eq!(seen, vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn test_progress_is_monotonic() {
        for n in 1..40 {
            let text = vec!["line"; n].join("\n");
            let mut seen = Vec::new();
            parse_with_progress(&text, &mut |p: u8| seen.push(p));

            assert_eq!(seen.len(), n + 1);
            assert!(seen.windows(2).all(|w| w[0] <= w[1]), "n={}: {:?}", n, seen);
            assert_eq!(seen.last(), Some(&100));
        }
    }

    #[test]
    fn test_parse_file_missing_reports_nothing() {
        let mut seen = Vec::new();
        let result = parse_file("/definitely/not/here.md", &mut |p: u8| seen.push(p));
        assert!(matches!(result, Err(ParseError::Io { .. })));
        assert!(seen.is_empty());
    }
}
