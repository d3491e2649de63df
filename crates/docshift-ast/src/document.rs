//! Document root

use crate::block::Block;

/// A complete document: an ordered sequence of blocks
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Document content blocks
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the document
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// The most recently added block
    pub fn last(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Check if the document is empty (no blocks)
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}
