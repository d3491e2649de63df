//! Paragraph style conventions
//!
//! Word paragraph styles are free-form strings. docshift recognizes a small
//! set of built-in style IDs and classifies every paragraph into a
//! [`ParagraphKind`]; anything unrecognized is body text.
//!
//! This module also provides the `word/styles.xml` part written into
//! generated documents, so the style IDs used by the writer resolve.

/// Prefix of heading style IDs (`Heading1`, `Heading2`, ...)
pub const HEADING_STYLE_PREFIX: &str = "Heading";

/// Style ID used for list paragraphs
pub const LIST_PARAGRAPH_STYLE: &str = "ListParagraph";

/// Highest heading level recognized when reading
pub const MAX_READ_HEADING_LEVEL: u8 = 3;

/// Highest heading level with a style definition in generated documents
pub const MAX_DEFINED_HEADING_LEVEL: usize = 6;

/// Structural role of a Word paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    /// `Heading1` to `Heading3`
    Heading(u8),
    /// `ListParagraph`, with or without a numbering definition
    ListParagraph {
        /// Paragraph references a numbering definition
        numbered: bool,
        /// Numbering level (0-based)
        level: u32,
    },
    /// Any other or missing style
    Body,
}

impl ParagraphKind {
    /// Classify a paragraph by its style ID and numbering metadata
    pub fn classify(style_id: &str, numbered: bool, level: u32) -> Self {
        if style_id == LIST_PARAGRAPH_STYLE {
            return ParagraphKind::ListParagraph { numbered, level };
        }

        style_id
            .strip_prefix(HEADING_STYLE_PREFIX)
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=MAX_READ_HEADING_LEVEL).contains(n))
            .map(ParagraphKind::Heading)
            .unwrap_or(ParagraphKind::Body)
    }
}

/// Style ID for a heading of the given level
pub fn heading_style(level: usize) -> String {
    format!("{}{}", HEADING_STYLE_PREFIX, level)
}

/// Generate `word/styles.xml` for a new document
///
/// Defines `Normal`, `Heading1`-`Heading6` and `ListParagraph`.
pub fn default_styles_xml() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );
    xml.push('\n');

    xml.push_str(concat!(
        r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#,
        r#"<w:name w:val="Normal"/><w:qFormat/></w:style>"#,
        "\n"
    ));

    // Sizes in half-points, largest first
    const HEADING_SIZES: [u32; MAX_DEFINED_HEADING_LEVEL] = [32, 28, 26, 24, 22, 22];
    for (index, size) in HEADING_SIZES.iter().enumerate() {
        let level = index + 1;
        xml.push_str(&format!(
            concat!(
                r#"<w:style w:type="paragraph" w:styleId="{id}">"#,
                r#"<w:name w:val="heading {level}"/>"#,
                r#"<w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
                r#"<w:pPr><w:keepNext/><w:spacing w:before="240" w:after="60"/>"#,
                r#"<w:outlineLvl w:val="{outline}"/></w:pPr>"#,
                r#"<w:rPr><w:b/><w:sz w:val="{size}"/></w:rPr></w:style>"#,
                "\n"
            ),
            id = heading_style(level),
            level = level,
            outline = index,
            size = size,
        ));
    }

    xml.push_str(&format!(
        concat!(
            r#"<w:style w:type="paragraph" w:styleId="{id}">"#,
            r#"<w:name w:val="List Paragraph"/><w:basedOn w:val="Normal"/><w:qFormat/>"#,
            r#"<w:pPr><w:ind w:left="720"/></w:pPr></w:style>"#,
            "\n"
        ),
        id = LIST_PARAGRAPH_STYLE,
    ));

    xml.push_str("</w:styles>");
    xml
}
