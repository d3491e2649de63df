//! In-memory workbook model.
//!
//! Every cell is already reduced to its display string; no value types
//! survive loading.

/// An ordered collection of sheets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    /// Sheets in workbook order
    pub sheets: Vec<Sheet>,
}

/// A named worksheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    /// Sheet name as shown on its tab
    pub name: String,
    /// Rows from the first sheet row down to the last used one
    pub rows: Vec<Row>,
}

/// One row of display strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Workbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sheets
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Whether the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl Sheet {
    /// Build a sheet from raw cell strings, one inner vector per row
    pub fn from_rows<S: Into<String>>(name: S, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows: rows.into_iter().map(Row::new).collect(),
        }
    }
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// A row with no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<Sheet>> for Workbook {
    fn from(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }
}
