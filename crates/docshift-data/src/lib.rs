//! # docshift-data
//!
//! Spreadsheet support for docshift - load `.xlsx` workbooks and render each
//! sheet as a Markdown table.
//!
//! ## Features
//!
//! - **Excel Support**: Read every sheet of an `.xlsx` file using `calamine`
//! - **Grid semantics**: Sheets are re-anchored at A1 with trailing empty
//!   cells dropped
//! - **Markdown tables**: One `# <sheet>` section per sheet
//!
//! ## Example
//!
//! ```rust,no_run
//! use docshift_ast::NoProgress;
//! use docshift_data::DataEngine;
//!
//! let markdown = DataEngine::excel_to_markdown("data.xlsx", &mut NoProgress)?;
//! println!("{}", markdown);
//! # Ok::<(), docshift_data::DataError>(())
//! ```

pub mod converter;
pub mod error;
pub mod sources;
pub mod workbook;

// Re-exports
pub use converter::MarkdownTableRenderer;
pub use error::{DataError, Result};
pub use sources::{DataSource, ExcelSource};
pub use workbook::{Row, Sheet, Workbook};

use std::path::Path;

use docshift_ast::Progress;

/// Data engine for processing spreadsheet sources
pub struct DataEngine;

impl DataEngine {
    /// Load every sheet of an Excel workbook
    pub fn load_excel(path: impl AsRef<Path>) -> Result<Workbook> {
        ExcelSource::new(path)?.read_workbook()
    }

    /// Load an Excel workbook and render it as Markdown tables
    ///
    /// Progress covers rendering only; loading reports nothing.
    pub fn excel_to_markdown(path: impl AsRef<Path>, progress: &mut dyn Progress) -> Result<String> {
        let workbook = Self::load_excel(path)?;
        Ok(MarkdownTableRenderer::new().render(&workbook, progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_workbook() {
        let err = DataEngine::excel_to_markdown("/nonexistent/data.xlsx", &mut |_p: u8| {})
            .unwrap_err();
        assert!(matches!(err, DataError::FileNotFound(_)));
    }
}
