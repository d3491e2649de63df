//! docshift-core - Markdown to document model
//!
//! Core library for docshift, providing the line-oriented Markdown parser.
//!
//! # Example
//!
//! ```
//! use docshift_ast::Block;
//! use docshift_core::parse;
//!
//! let doc = parse("# Hello\n- one\n- two");
//! assert_eq!(doc.blocks[0], Block::heading(1, "Hello"));
//! assert_eq!(doc.blocks[1], Block::list_item(false, "one"));
//! ```

pub mod error;
pub mod parser;

// Re-export main types and functions
pub use error::{ParseError, Result};
pub use parser::{parse, parse_file, parse_with_progress};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
