//! Excel/XLSX data source using calamine.
//!
//! calamine hands back only the used range of a sheet. Loading re-anchors it
//! at A1, so leading empty rows and columns come back as empty cells, and
//! drops trailing empty cells so that a row without values has no cells.
//!
//! Date-formatted cells render as `YYYY-MM-DD` (plus `HH:MM:SS` when the
//! value has a time part) and error cells as their Excel literal, e.g.
//! `#DIV/0!`.

use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, ExcelDateTime, Range, Reader, Xlsx, XlsxError};
use tracing::debug;

use crate::error::{DataError, Result};
use crate::sources::DataSource;
use crate::workbook::{Row, Sheet};

/// Excel workbook data source
#[derive(Debug)]
pub struct ExcelSource {
    /// Path to the Excel file
    path: PathBuf,
    /// Sheet names cache
    sheet_names: Vec<String>,
}

impl ExcelSource {
    /// Open an Excel source from a file path
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DataError::FileNotFound(path.display().to_string()));
        }

        let workbook = Self::open(path)?;
        let sheet_names = workbook.sheet_names().to_vec();

        Ok(Self {
            path: path.to_path_buf(),
            sheet_names,
        })
    }

    fn open(path: &Path) -> Result<Xlsx<std::io::BufReader<std::fs::File>>> {
        open_workbook(path).map_err(|e: XlsxError| {
            DataError::WorkbookOpen(format!("{}: {}", path.display(), e))
        })
    }

    /// Convert a calamine cell to a string
    fn cell_to_string(cell: &Data) -> String {
        match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => {
                // Whole numbers print without a fraction
                if f.fract() == 0.0 {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
            Data::Bool(b) => b.to_string(),
            Data::Error(e) => e.to_string(),
            Data::DateTime(dt) => Self::datetime_to_string(dt),
            Data::DateTimeIso(s) => s.clone(),
            Data::DurationIso(s) => s.clone(),
        }
    }

    /// `YYYY-MM-DD`, plus the time when the serial has a fraction; durations
    /// keep their raw serial value
    fn datetime_to_string(dt: &ExcelDateTime) -> String {
        match dt.as_datetime() {
            Some(value) if dt.is_datetime() => {
                if dt.as_f64().fract() == 0.0 {
                    value.format("%Y-%m-%d").to_string()
                } else {
                    value.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
            _ => dt.to_string(),
        }
    }

    /// Re-anchor a used range at A1 and reduce it to display strings
    fn sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
        let Some((first_row, first_col)) = range.start() else {
            return Sheet {
                name: name.to_string(),
                rows: Vec::new(),
            };
        };

        let mut rows: Vec<Row> = (0..first_row).map(|_| Row::default()).collect();

        for used in range.rows() {
            let mut cells = vec![String::new(); first_col as usize];
            cells.extend(used.iter().map(Self::cell_to_string));

            while cells.last().is_some_and(|cell| cell.is_empty()) {
                cells.pop();
            }
            rows.push(Row::new(cells));
        }

        Sheet {
            name: name.to_string(),
            rows,
        }
    }
}

impl DataSource for ExcelSource {
    fn list_sheets(&self) -> Result<Vec<String>> {
        Ok(self.sheet_names.clone())
    }

    fn read_sheet(&self, sheet: &str) -> Result<Sheet> {
        // Re-open workbook for reading (calamine requires &mut)
        let mut workbook = Self::open(&self.path)?;

        let range = workbook
            .worksheet_range(sheet)
            .map_err(|e| DataError::SheetNotFound(format!("{}: {}", sheet, e)))?;

        let loaded = Self::sheet_from_range(sheet, &range);
        debug!(sheet = %sheet, rows = loaded.rows.len(), "loaded sheet");
        Ok(loaded)
    }
}
