//! Package skeleton for generated DOCX files
//!
//! A word processor refuses a package that lacks content types or the
//! relationship graph, so every generated document starts from
//! [`Template::blank`] and only replaces `word/document.xml`.
//!
//! # Example
//!
//! ```
//! use docshift_ooxml::Template;
//!
//! let template = Template::blank();
//! assert!(template.archive().contains("word/styles.xml"));
//! ```

use crate::archive::{OoxmlArchive, DOCUMENT_XML};
use crate::styles::default_styles_xml;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

const EMPTY_DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body/></w:document>"#;

/// A DOCX package ready for content injection
#[derive(Debug)]
pub struct Template {
    /// The underlying OOXML archive
    archive: OoxmlArchive,
}

impl Template {
    /// A minimal package with content types, relationships, styles and an
    /// empty body
    pub fn blank() -> Self {
        let mut archive = OoxmlArchive::new();
        archive.set_string("[Content_Types].xml", CONTENT_TYPES_XML);
        archive.set_string("_rels/.rels", PACKAGE_RELS_XML);
        archive.set_string("word/_rels/document.xml.rels", DOCUMENT_RELS_XML);
        archive.set_string("word/styles.xml", default_styles_xml());
        archive.set_string(DOCUMENT_XML, EMPTY_DOCUMENT_XML);
        Self { archive }
    }

    /// Get a reference to the underlying archive
    pub fn archive(&self) -> &OoxmlArchive {
        &self.archive
    }

    /// Consume the template and return the underlying archive
    pub fn into_archive(self) -> OoxmlArchive {
        self.archive
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::blank()
    }
}
