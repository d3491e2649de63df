//! docshift-ast - Document model definitions
//!
//! This crate provides the intermediate structure every docshift pipeline
//! passes through, plus the progress contract shared by all converters.
//!
//! - [`Block`]: one structural unit (heading, paragraph, list item, blank)
//! - [`Document`]: an ordered sequence of blocks
//! - [`Progress`]: the 0-100 completion callback

pub mod block;
pub mod document;
pub mod progress;

pub use block::{Block, Heading, ListItem, Paragraph};
pub use document::Document;
pub use progress::{percent, NoProgress, Progress};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
