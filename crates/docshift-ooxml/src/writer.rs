//! DOCX Writer
//!
//! This module writes a `docshift_ast::Document` to DOCX format. Each block
//! becomes exactly one paragraph with at most one run:
//!
//! | Block       | Paragraph                                            |
//! |-------------|------------------------------------------------------|
//! | `Heading`   | style `Heading<level>`                               |
//! | `ListItem`  | style `ListParagraph`, numbering level `level`       |
//! | `Paragraph` | no style                                             |
//! | `Blank`     | empty paragraph                                      |
//!
//! List paragraphs carry a numbering level but no numbering definition, so
//! ordered and unordered items come out identical.
//!
//! # Example
//!
//! ```
//! use docshift_ast::{Block, Document};
//! use docshift_ooxml::DocxWriter;
//!
//! let doc = Document::from(vec![Block::heading(1, "Hello")]);
//! let bytes = DocxWriter::generate(&doc)?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), docshift_ooxml::OoxmlError>(())
//! ```

use docshift_ast::{Block, Document, Heading, ListItem, Paragraph};
use tracing::debug;

use crate::archive::DOCUMENT_XML;
use crate::error::Result;
use crate::styles::{heading_style, LIST_PARAGRAPH_STYLE};
use crate::template::Template;

/// DOCX Writer for generating DOCX files from the document model
#[derive(Debug, Default)]
pub struct DocxWriter {
    /// XML output buffer
    output: String,
}

impl DocxWriter {
    /// Create a new DocxWriter
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a complete DOCX package in memory
    pub fn generate(doc: &Document) -> Result<Vec<u8>> {
        let mut writer = Self::new();
        let document_xml = writer.generate_document_xml(doc);

        let mut archive = Template::blank().into_archive();
        archive.set_string(DOCUMENT_XML, document_xml);

        let bytes = archive.to_bytes()?;
        debug!(
            blocks = doc.len(),
            bytes = bytes.len(),
            "generated docx package"
        );
        Ok(bytes)
    }

    /// Generate the complete document.xml content
    pub fn generate_document_xml(&mut self, doc: &Document) -> String {
        self.output.clear();

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        );
        self.output.push('\n');
        self.output.push_str("<w:body>\n");

        for block in &doc.blocks {
            self.generate_block(block);
        }

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    /// Generate XML for a single block
    fn generate_block(&mut self, block: &Block) {
        match block {
            Block::Heading(heading) => self.generate_heading(heading),
            Block::ListItem(item) => self.generate_list_item(item),
            Block::Paragraph(para) => self.generate_paragraph(para),
            Block::Blank => self.output.push_str("<w:p/>\n"),
        }
    }

    /// Generate XML for a heading
    fn generate_heading(&mut self, heading: &Heading) {
        self.output.push_str("<w:p>\n");
        self.output.push_str("<w:pPr>\n");
        self.output.push_str(&format!(
            "<w:pStyle w:val=\"{}\"/>\n",
            heading_style(heading.level)
        ));
        self.output.push_str("</w:pPr>\n");
        self.generate_run(&heading.text);
        self.output.push_str("</w:p>\n");
    }

    /// Generate XML for a list item
    fn generate_list_item(&mut self, item: &ListItem) {
        self.output.push_str("<w:p>\n");
        self.output.push_str("<w:pPr>\n");
        self.output.push_str(&format!(
            "<w:pStyle w:val=\"{}\"/>\n",
            LIST_PARAGRAPH_STYLE
        ));
        self.output.push_str("<w:numPr>\n");
        self.output
            .push_str(&format!("<w:ilvl w:val=\"{}\"/>\n", item.level));
        self.output.push_str("</w:numPr>\n");
        self.output.push_str("</w:pPr>\n");
        self.generate_run(&item.text);
        self.output.push_str("</w:p>\n");
    }

    /// Generate XML for a plain paragraph
    fn generate_paragraph(&mut self, para: &Paragraph) {
        self.output.push_str("<w:p>\n");
        self.generate_run(&para.text);
        self.output.push_str("</w:p>\n");
    }

    /// Generate a single unformatted run
    fn generate_run(&mut self, text: &str) {
        self.output.push_str("<w:r>\n");
        self.output.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>\n",
            escape_xml(text)
        ));
        self.output.push_str("</w:r>\n");
    }
}

/// Escape special XML characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
