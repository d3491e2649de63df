//! Data source implementations.

pub mod excel;

pub use excel::ExcelSource;

use crate::error::Result;
use crate::workbook::{Sheet, Workbook};

/// A source of named sheets of display strings
pub trait DataSource {
    /// List available sheets in workbook order
    fn list_sheets(&self) -> Result<Vec<String>>;

    /// Read a single sheet by name
    fn read_sheet(&self, sheet: &str) -> Result<Sheet>;

    /// Read every sheet, in the order given by [`DataSource::list_sheets`]
    fn read_workbook(&self) -> Result<Workbook> {
        let sheets = self
            .list_sheets()?
            .iter()
            .map(|name| self.read_sheet(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(Workbook::from(sheets))
    }
}
