//! Conversion entry point
//!
//! Routes an input file to one of three pipelines by its extension. The
//! output goes to `<output_dir>/<input stem>.<new extension>`, replacing any
//! file already there. Directories are never created.
//!
//! | Input   | Output  | Pipeline                                   |
//! |---------|---------|--------------------------------------------|
//! | `.md`   | `.docx` | Markdown parser → DOCX writer              |
//! | `.docx` | `.md`   | DOCX reader → Markdown renderer            |
//! | `.xlsx` | `.md`   | workbook loader → Markdown table renderer  |
//!
//! Every output is fully built in memory and written with a single call, so
//! a failed conversion never leaves a partial file behind.

use std::fs;
use std::path::{Path, PathBuf};

use docshift_ast::Progress;
use docshift_data::DataEngine;
use docshift_ooxml::{DocxWriter, MarkdownExtractor};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Label shown when the input has no supported extension
pub const NONE_SELECTED: &str = "[None Selected]";

/// The three supported conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionKind {
    /// `.md` → `.docx`
    MarkdownToWord,
    /// `.docx` → `.md`
    WordToMarkdown,
    /// `.xlsx` → `.md`
    ExcelToMarkdown,
}

impl ConversionKind {
    /// Detect the conversion from a file extension, ignoring case
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "md" => Some(Self::MarkdownToWord),
            "docx" => Some(Self::WordToMarkdown),
            "xlsx" => Some(Self::ExcelToMarkdown),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Self::MarkdownToWord => "Markdown to Word",
            Self::WordToMarkdown => "Word to Markdown",
            Self::ExcelToMarkdown => "Excel to Markdown",
        }
    }

    /// Extension of the produced file, without the dot
    pub fn output_extension(self) -> &'static str {
        match self {
            Self::MarkdownToWord => "docx",
            Self::WordToMarkdown | Self::ExcelToMarkdown => "md",
        }
    }
}

/// Label for a path, or [`NONE_SELECTED`] when it cannot be converted
pub fn describe(path: &Path) -> &'static str {
    ConversionKind::from_path(path).map_or(NONE_SELECTED, ConversionKind::label)
}

/// Where the converted file for `input` lands inside `output_dir`
///
/// Returns `None` for unsupported inputs.
pub fn output_path(input: &Path, output_dir: &Path) -> Option<PathBuf> {
    let kind = ConversionKind::from_path(input)?;
    let stem = input.file_stem()?;

    let mut name = stem.to_os_string();
    name.push(".");
    name.push(kind.output_extension());
    Some(output_dir.join(name))
}

/// Why a conversion failed
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum ConversionError {
    /// The input extension is not `.md`, `.docx` or `.xlsx`
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The input is missing, unreadable or cannot be parsed
    #[error("Read error: {0}")]
    ReadError(String),

    /// The output cannot be created or written
    #[error("Write error: {0}")]
    WriteError(String),
}

/// Convert `input` into `output_dir`, returning the written path
///
/// Progress runs from 0 to 100; a failure stops the sequence wherever it
/// happens to be. An unsupported input fails before any progress is
/// reported or any file is touched.
pub fn convert(
    input: &Path,
    output_dir: &Path,
    progress: &mut dyn Progress,
) -> Result<PathBuf, ConversionError> {
    if input.as_os_str().is_empty() {
        return Err(ConversionError::ReadError(
            "no input file selected".to_string(),
        ));
    }
    if output_dir.as_os_str().is_empty() {
        return Err(ConversionError::WriteError(
            "no output folder selected".to_string(),
        ));
    }

    let kind = ConversionKind::from_path(input).ok_or_else(|| {
        ConversionError::UnsupportedFormat(format!("{}", input.display()))
    })?;
    let output = output_path(input, output_dir).ok_or_else(|| {
        ConversionError::UnsupportedFormat(format!("{}", input.display()))
    })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        kind = kind.label(),
        "starting conversion"
    );

    let result = match kind {
        ConversionKind::MarkdownToWord => markdown_to_word(input, &output, progress),
        ConversionKind::WordToMarkdown => word_to_markdown(input, &output, progress),
        ConversionKind::ExcelToMarkdown => excel_to_markdown(input, &output, progress),
    };

    match result {
        Ok(()) => {
            info!(output = %output.display(), "conversion complete");
            Ok(output)
        }
        Err(err) => {
            warn!(error = %err, "conversion failed");
            Err(err)
        }
    }
}

/// `.md` → `.docx`; the parser's own final report is the terminal 100
fn markdown_to_word(
    input: &Path,
    output: &Path,
    progress: &mut dyn Progress,
) -> Result<(), ConversionError> {
    let doc = docshift_core::parse_file(input, progress)
        .map_err(|e| ConversionError::ReadError(e.to_string()))?;
    debug!(blocks = doc.len(), "parsed markdown source");

    let bytes = DocxWriter::generate(&doc).map_err(|e| {
        ConversionError::WriteError(format!("{}: {}", output.display(), e))
    })?;
    write_output(output, &bytes)
}

/// `.docx` → `.md`
fn word_to_markdown(
    input: &Path,
    output: &Path,
    progress: &mut dyn Progress,
) -> Result<(), ConversionError> {
    let markdown = MarkdownExtractor::new()
        .extract_file(input, progress)
        .map_err(|e| ConversionError::ReadError(format!("{}: {}", input.display(), e)))?;

    write_output(output, markdown.as_bytes())?;
    progress.report(100);
    Ok(())
}

/// `.xlsx` → `.md`
fn excel_to_markdown(
    input: &Path,
    output: &Path,
    progress: &mut dyn Progress,
) -> Result<(), ConversionError> {
    let markdown = DataEngine::excel_to_markdown(input, progress)
        .map_err(|e| ConversionError::ReadError(format!("{}: {}", input.display(), e)))?;

    write_output(output, markdown.as_bytes())?;
    progress.report(100);
    Ok(())
}

fn write_output(output: &Path, contents: &[u8]) -> Result<(), ConversionError> {
    fs::write(output, contents)
        .map_err(|e| ConversionError::WriteError(format!("{}: {}", output.display(), e)))
}
