//! Table renderer - turns a workbook into one Markdown table per sheet.
//!
//! Each sheet becomes a `# <name>` heading, a blank line and a pipe table.
//! The first non-empty row of a sheet is always treated as the header and is
//! followed by a `| --- |` separator sized to that row. Rows with no cells
//! are skipped.

use docshift_ast::{percent, Progress};
use tracing::debug;

use crate::workbook::{Row, Workbook};

/// Renders workbooks as Markdown tables
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownTableRenderer;

impl MarkdownTableRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render every sheet in workbook order
    ///
    /// Progress is reported after each row as
    /// `(sheet_index * rows + row_index) / (sheets * rows)`, where `rows` is
    /// the row count of the sheet being rendered. Every sheet therefore
    /// covers an equal slice of the range whatever its size.
    pub fn render(&self, workbook: &Workbook, progress: &mut dyn Progress) -> String {
        let total_sheets = workbook.sheets.len();
        let mut markdown = String::new();

        for (sheet_index, sheet) in workbook.sheets.iter().enumerate() {
            markdown.push_str(&format!("# {}\n\n", sheet.name));

            let rows_in_sheet = sheet.rows.len();
            let mut header_written = false;

            for (row_index, row) in sheet.rows.iter().enumerate() {
                if !row.is_empty() {
                    markdown.push_str(&Self::render_row(row));
                    if !header_written {
                        markdown.push_str(&Self::separator(row.cells.len()));
                        header_written = true;
                    }
                }

                progress.report(percent(
                    sheet_index * rows_in_sheet + row_index,
                    total_sheets * rows_in_sheet,
                ));
            }

            markdown.push('\n');
        }

        debug!(sheets = total_sheets, "rendered workbook tables");
        markdown
    }

    /// `| c1 | c2 | ... |`
    fn render_row(row: &Row) -> String {
        format!("| {} |\n", row.cells.join(" | "))
    }

    /// `| --- | ... |` with `columns` dashes
    fn separator(columns: usize) -> String {
        format!("|{}\n", " --- |".repeat(columns))
    }
}
