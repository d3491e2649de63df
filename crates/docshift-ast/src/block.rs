//! Block-level elements for document structure
//!
//! A document is a flat sequence of blocks. Inline emphasis is not modeled
//! here: block text is carried verbatim.

use serde::{Deserialize, Serialize};

/// Block-level content element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// A section heading
    Heading(Heading),
    /// A paragraph of text
    Paragraph(Paragraph),
    /// A single list entry
    ListItem(ListItem),
    /// A paragraph break with no content
    Blank,
}

/// A section heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, the number of leading `#` markers (1 is the highest)
    pub level: usize,
    /// Heading text
    pub text: String,
}

/// A paragraph block
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text
    pub text: String,
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Numbered (`1.`) rather than bulleted (`-`, `*`, `+`)
    pub ordered: bool,
    /// Nesting level (0-based)
    pub level: usize,
    /// Item text without its marker
    pub text: String,
}

impl Block {
    /// Create a heading block
    pub fn heading(level: usize, text: impl Into<String>) -> Self {
        Block::Heading(Heading {
            level,
            text: text.into(),
        })
    }

    /// Create a paragraph block
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(Paragraph { text: text.into() })
    }

    /// Create a top-level list item
    pub fn list_item(ordered: bool, text: impl Into<String>) -> Self {
        Block::ListItem(ListItem {
            ordered,
            level: 0,
            text: text.into(),
        })
    }

    /// Whether this block is a list item
    pub fn is_list_item(&self) -> bool {
        matches!(self, Block::ListItem(_))
    }

    /// The block's text content (empty for [`Block::Blank`])
    pub fn text(&self) -> &str {
        match self {
            Block::Heading(h) => &h.text,
            Block::Paragraph(p) => &p.text,
            Block::ListItem(item) => &item.text,
            Block::Blank => "",
        }
    }
}
