//! Document content parsing (word/document.xml)
//!
//! This module parses the main document content into body paragraphs, each
//! with its style ID, numbering reference and formatted runs. Paragraphs
//! inside tables are skipped, as is everything inside a text box
//! (`<w:txbxContent>`), which nests whole paragraphs inside a run. Runs
//! inside hyperlinks are read as ordinary runs.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{OoxmlError, Result};
use crate::styles::ParagraphKind;

/// A parsed Word document
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

/// A paragraph with its runs and style
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Style ID (references styles.xml)
    pub style_id: Option<String>,
    /// Numbering info (for lists)
    pub numbering: Option<NumberingRef>,
    /// Text runs
    pub runs: Vec<Run>,
}

/// A text run with formatting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    /// The text content
    pub text: String,
    /// Whether the text is bold
    pub bold: bool,
    /// Whether the text is italic
    pub italic: bool,
}

/// Numbering properties of a paragraph (`<w:numPr>`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberingRef {
    /// Numbering definition ID; absent when only a level is given
    pub num_id: Option<u32>,
    /// Indent level (0-based)
    pub ilvl: u32,
}

impl Document {
    /// Parse a document from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        // Don't trim text - preserve whitespace in runs
        reader.config_mut().trim_text(false);

        let mut paragraphs = Vec::new();
        let mut buf = Vec::new();

        let mut in_body = false;
        let mut table_depth = 0u32;
        let mut textbox_depth = 0u32;
        let mut current_para: Option<ParagraphBuilder> = None;
        let mut current_run: Option<RunBuilder> = None;
        // Only <w:t> carries visible text (not <w:instrText>)
        let mut in_text_element = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if textbox_depth > 0 => {
                    if e.local_name().as_ref() == b"txbxContent" {
                        textbox_depth += 1;
                    }
                }
                Ok(Event::End(ref e)) if textbox_depth > 0 => {
                    if e.local_name().as_ref() == b"txbxContent" {
                        textbox_depth -= 1;
                    }
                }
                Ok(Event::Empty(_)) | Ok(Event::Text(_)) if textbox_depth > 0 => {}
                Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"body" => in_body = true,
                    b"txbxContent" => textbox_depth += 1,
                    b"tbl" => table_depth += 1,
                    b"p" if in_body && table_depth == 0 && current_para.is_none() => {
                        current_para = Some(ParagraphBuilder::default());
                    }
                    b"r" if current_para.is_some() => {
                        current_run = Some(RunBuilder::default());
                    }
                    b"t" if current_run.is_some() => in_text_element = true,
                    _ => apply_property(e, &mut current_para, &mut current_run),
                },
                Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                    // Self-closing <w:p/> is an empty paragraph
                    b"p" if in_body && table_depth == 0 && current_para.is_none() => {
                        paragraphs.push(Paragraph::default());
                    }
                    b"tab" => {
                        if let Some(run) = current_run.as_mut() {
                            run.text.push('\t');
                        }
                    }
                    _ => apply_property(e, &mut current_para, &mut current_run),
                },
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"body" => in_body = false,
                    b"tbl" => table_depth = table_depth.saturating_sub(1),
                    b"p" => {
                        if let Some(para) = current_para.take() {
                            paragraphs.push(para.build());
                        }
                    }
                    b"r" => {
                        if let Some(run) = current_run.take() {
                            if let Some(para) = current_para.as_mut() {
                                if !run.text.is_empty() {
                                    para.runs.push(run.build());
                                }
                            }
                        }
                    }
                    b"t" => in_text_element = false,
                    _ => {}
                },
                Ok(Event::Text(ref e)) => {
                    if in_text_element {
                        if let Some(run) = current_run.as_mut() {
                            let text = e.unescape().unwrap_or_default();
                            run.text.push_str(&text);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(Document { paragraphs })
    }
}

impl Paragraph {
    /// Style ID, or `""` when the paragraph has none
    pub fn style_name(&self) -> &str {
        self.style_id.as_deref().unwrap_or("")
    }

    /// Whether the paragraph references a numbering definition
    ///
    /// A `<w:numPr>` carrying only a level, or `numId` 0, does not count.
    pub fn is_numbered(&self) -> bool {
        self.numbering
            .and_then(|n| n.num_id)
            .is_some_and(|id| id != 0)
    }

    /// Numbering level (0-based), `0` without numbering
    pub fn numbering_level(&self) -> u32 {
        self.numbering.map(|n| n.ilvl).unwrap_or(0)
    }

    /// Structural role derived from style and numbering
    pub fn kind(&self) -> ParagraphKind {
        ParagraphKind::classify(
            self.style_name(),
            self.is_numbered(),
            self.numbering_level(),
        )
    }

    /// Get plain text of this paragraph
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if this paragraph has no visible text
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.trim().is_empty())
    }
}

// Builder types for constructing elements during parsing

#[derive(Default)]
struct ParagraphBuilder {
    style_id: Option<String>,
    numbering: Option<NumberingRef>,
    runs: Vec<Run>,
}

impl ParagraphBuilder {
    fn build(self) -> Paragraph {
        Paragraph {
            style_id: self.style_id,
            numbering: self.numbering,
            runs: self.runs,
        }
    }
}

#[derive(Default)]
struct RunBuilder {
    text: String,
    bold: bool,
    italic: bool,
}

impl RunBuilder {
    fn build(self) -> Run {
        Run {
            text: self.text,
            bold: self.bold,
            italic: self.italic,
        }
    }
}

/// Apply paragraph and run properties (`pStyle`, `numPr`, `b`, `i`, ...)
fn apply_property(
    e: &BytesStart,
    para: &mut Option<ParagraphBuilder>,
    run: &mut Option<RunBuilder>,
) {
    match e.local_name().as_ref() {
        b"pStyle" => {
            if let (Some(para), Some(style)) = (para.as_mut(), get_attr(e, b"w:val")) {
                para.style_id = Some(style);
            }
        }
        b"numPr" => {
            if let Some(para) = para.as_mut() {
                para.numbering.get_or_insert_with(NumberingRef::default);
            }
        }
        b"numId" => {
            if let (Some(para), Some(num_id)) = (para.as_mut(), get_u32_attr(e, b"w:val")) {
                para.numbering
                    .get_or_insert_with(NumberingRef::default)
                    .num_id = Some(num_id);
            }
        }
        b"ilvl" => {
            if let (Some(para), Some(ilvl)) = (para.as_mut(), get_u32_attr(e, b"w:val")) {
                para.numbering.get_or_insert_with(NumberingRef::default).ilvl = ilvl;
            }
        }
        b"b" => {
            if let Some(run) = run.as_mut() {
                run.bold = is_toggle_on(e);
            }
        }
        b"i" => {
            if let Some(run) = run.as_mut() {
                run.italic = is_toggle_on(e);
            }
        }
        _ => {}
    }
}

// Helper functions

fn get_attr(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| String::from_utf8(a.value.to_vec()).ok())
}

fn get_u32_attr(e: &BytesStart, name: &[u8]) -> Option<u32> {
    get_attr(e, name).and_then(|v| v.parse().ok())
}

/// `<w:b/>` is on; `<w:b w:val="0"/>` and `w:val="false"` are off
fn is_toggle_on(e: &BytesStart) -> bool {
    !get_attr(e, b"w:val")
        .map(|v| v == "0" || v == "false")
        .unwrap_or(false)
}
