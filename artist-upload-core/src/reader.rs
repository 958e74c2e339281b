//! Spreadsheet loading: turns one sheet of a workbook into ordered [`Row`]s.
//!
//! The first sheet row is treated as the header. Any format `calamine` can
//! open (xlsx, xlsm, xlsb, xls, ods) is accepted.

use calamine::{open_workbook_auto, Data, Reader};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::contract::RowSource;
use crate::error::ReaderError;

/// Sheet read when none is given on the command line.
pub const DEFAULT_SHEET: &str = "Main Table";

/// A single raw cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    /// Trimmed text form of the cell, or `None` for empty, blank and "nan" cells.
    pub fn normalized_text(&self) -> Option<String> {
        let text = match self {
            Cell::Empty => return None,
            Cell::Text(s) => s.trim().to_string(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) if f.is_nan() => return None,
            Cell::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                (*f as i64).to_string()
            }
            Cell::Float(f) => f.to_string(),
            Cell::Bool(b) => b.to_string(),
        };
        if text.is_empty() || text.eq_ignore_ascii_case("nan") {
            None
        } else {
            Some(text)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized_text().is_none()
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Text(dt.to_string()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        }
    }
}

/// One data row of the sheet, keyed by header name in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    number: usize,
    cells: Vec<(String, Cell)>,
}

impl Row {
    /// `number` is the 1-based position of the row among the sheet's data rows.
    pub fn new(number: usize, cells: Vec<(String, Cell)>) -> Self {
        Self { number, cells }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Label used when a row fails before it has an author name.
    pub fn label(&self) -> String {
        format!("Row {}", self.number)
    }

    /// Cell under `column`. The first matching column wins.
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, cell)| cell)
    }

    pub fn columns(&self) -> Vec<String> {
        self.cells.iter().map(|(name, _)| name.clone()).collect()
    }
}

/// Reads artist rows from a named sheet of a workbook on disk.
#[derive(Debug, Clone)]
pub struct ExcelArtistReader {
    path: PathBuf,
    sheet: String,
}

impl ExcelArtistReader {
    /// Fails with [`ReaderError::NotFound`] when `path` does not exist.
    pub fn new<P: AsRef<Path>>(path: P, sheet: impl Into<String>) -> Result<Self, ReaderError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            error!(path = %path.display(), "Excel file not found");
            return Err(ReaderError::NotFound(path));
        }
        Ok(Self {
            path,
            sheet: sheet.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    fn read_error(&self, reason: impl ToString) -> ReaderError {
        ReaderError::Read {
            path: self.path.clone(),
            sheet: self.sheet.clone(),
            reason: reason.to_string(),
        }
    }
}

impl RowSource for ExcelArtistReader {
    fn read_rows(&self) -> Result<Vec<Row>, ReaderError> {
        debug!(path = %self.path.display(), sheet = %self.sheet, "Opening workbook");
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            error!(error = %e, path = %self.path.display(), "Failed to open workbook");
            self.read_error(e)
        })?;

        let range = workbook.worksheet_range(&self.sheet).map_err(|e| {
            error!(error = %e, sheet = %self.sheet, "Failed to read sheet");
            self.read_error(e)
        })?;

        let mut sheet_rows = range.rows();
        let headers: Vec<String> = match sheet_rows.next() {
            Some(header_row) => header_row
                .iter()
                .enumerate()
                .map(|(idx, cell)| match Cell::from(cell).normalized_text() {
                    Some(name) => name,
                    None => format!("Unnamed: {idx}"),
                })
                .collect(),
            None => {
                info!(sheet = %self.sheet, "Sheet is empty, no rows read");
                return Ok(Vec::new());
            }
        };

        let rows: Vec<Row> = sheet_rows
            .map(|cells| {
                headers
                    .iter()
                    .cloned()
                    .zip(cells.iter().map(Cell::from))
                    .collect::<Vec<_>>()
            })
            .filter(|cells| cells.iter().any(|(_, cell)| !cell.is_empty()))
            .enumerate()
            .map(|(idx, cells)| Row::new(idx + 1, cells))
            .collect();

        info!(rows = rows.len(), sheet = %self.sheet, "Read rows from sheet");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_text_drops_blank_and_nan() {
        assert_eq!(Cell::Empty.normalized_text(), None);
        assert_eq!(Cell::Text("   ".into()).normalized_text(), None);
        assert_eq!(Cell::Text(" NaN ".into()).normalized_text(), None);
        assert_eq!(Cell::Float(f64::NAN).normalized_text(), None);
        assert_eq!(
            Cell::Text("  hello ".into()).normalized_text().as_deref(),
            Some("hello")
        );
    }

    #[test]
    fn integral_floats_render_without_fraction() {
        assert_eq!(Cell::Float(3.0).normalized_text().as_deref(), Some("3"));
        assert_eq!(Cell::Float(2.5).normalized_text().as_deref(), Some("2.5"));
        assert_eq!(Cell::Int(-4).normalized_text().as_deref(), Some("-4"));
    }

    #[test]
    fn row_lookup_and_label() {
        let row = Row::new(
            3,
            vec![
                ("Author".into(), Cell::Text("A".into())),
                ("Tags".into(), Cell::Empty),
            ],
        );
        assert_eq!(row.label(), "Row 3");
        assert_eq!(row.get("Author"), Some(&Cell::Text("A".into())));
        assert_eq!(row.get("Photo"), None);
        assert_eq!(row.columns(), vec!["Author".to_string(), "Tags".to_string()]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = ExcelArtistReader::new("definitely/not/here.xlsx", DEFAULT_SHEET).unwrap_err();
        assert!(matches!(err, ReaderError::NotFound(_)));
        assert!(err.to_string().contains("Excel file not found"));
    }
}
