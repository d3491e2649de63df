//! # docshift-ooxml
//!
//! OOXML (Office Open XML) reading and generation for docshift.
//!
//! This crate provides functionality to:
//! - Read a DOCX file's paragraphs with their style, numbering and runs
//! - Render those paragraphs as Markdown
//! - Generate a DOCX package from a `docshift_ast::Document`
//!
//! ## Example: Reading a Document
//!
//! ```no_run
//! use docshift_ooxml::{Document, OoxmlArchive};
//!
//! let archive = OoxmlArchive::open("document.docx")?;
//! let document = Document::parse(archive.document_xml()?)?;
//!
//! for para in &document.paragraphs {
//!     println!("{:?}: {}", para.kind(), para.plain_text());
//! }
//! # Ok::<(), docshift_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod document;
pub mod error;
pub mod extract;
pub mod styles;
pub mod template;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_utils;

pub use archive::OoxmlArchive;
pub use document::{Document, NumberingRef, Paragraph, Run};
pub use error::{OoxmlError, Result};
pub use extract::MarkdownExtractor;
pub use styles::ParagraphKind;
pub use template::Template;
pub use writer::DocxWriter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
