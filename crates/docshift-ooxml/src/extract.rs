//! Document extraction (docx → Markdown)
//!
//! Each Word paragraph becomes one Markdown block, chosen by its
//! [`ParagraphKind`]:
//!
//! - `Heading1`-`Heading3` → `#`-`###` headings followed by a blank line
//! - `ListParagraph` with a numbering definition → `1. ` item, indented two
//!   spaces per level (the ordinal is always `1`)
//! - `ListParagraph` without one → `- ` item
//! - anything else → a paragraph followed by a blank line
//!
//! Bold runs are wrapped in `**`, italic runs in `_`. A run that is both is
//! written as bold only.

use std::path::Path;

use docshift_ast::{percent, Progress};
use tracing::debug;

use crate::archive::OoxmlArchive;
use crate::document::{Document, Paragraph, Run};
use crate::error::Result;
use crate::styles::ParagraphKind;

/// Extracts OOXML documents to Markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownExtractor;

impl MarkdownExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract a document from a file path
    pub fn extract_file<P: AsRef<Path>>(
        &self,
        path: P,
        progress: &mut dyn Progress,
    ) -> Result<String> {
        let archive = OoxmlArchive::open(path)?;
        self.extract_archive(&archive, progress)
    }

    /// Extract from an already-opened archive
    pub fn extract_archive(
        &self,
        archive: &OoxmlArchive,
        progress: &mut dyn Progress,
    ) -> Result<String> {
        let document = Document::parse(archive.document_xml()?)?;
        Ok(self.convert_document(&document, progress))
    }

    /// Render every paragraph, reporting `round(index / total * 100)` after
    /// each one
    pub fn convert_document(&self, document: &Document, progress: &mut dyn Progress) -> String {
        let total = document.paragraphs.len();
        let mut markdown = String::new();

        for (index, para) in document.paragraphs.iter().enumerate() {
            markdown.push_str(&self.convert_paragraph(para));
            progress.report(percent(index, total));
        }

        debug!(paragraphs = total, "rendered markdown");
        markdown
    }

    /// Convert a paragraph to a Markdown block
    pub fn convert_paragraph(&self, para: &Paragraph) -> String {
        let text: String = para.runs.iter().map(|run| self.convert_run(run)).collect();

        match para.kind() {
            ParagraphKind::Heading(level) => {
                format!("{} {}\n\n", "#".repeat(level as usize), text)
            }
            ParagraphKind::ListParagraph {
                numbered: true,
                level,
            } => format!("{}1. {}\n", "  ".repeat(level as usize), text),
            ParagraphKind::ListParagraph {
                numbered: false, ..
            } => format!("- {}\n", text),
            ParagraphKind::Body => format!("{}\n\n", text),
        }
    }

    /// Convert a run to Markdown text
    fn convert_run(&self, run: &Run) -> String {
        if run.bold {
            format!("**{}**", run.text)
        } else if run.italic {
            format!("_{}_", run.text)
        } else {
            run.text.clone()
        }
    }
}
