//! Read a generated workbook back for verification

use calamine::{Data, Range, Reader, Xlsx};
use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::error::{MappingError, Result};
use crate::export::layout::{Cell, CellRange};

pub struct ExcelWorkbook {
    inner: Xlsx<Cursor<Vec<u8>>>,
    pub sheets: Vec<String>,
}

/// Cell text of one worksheet, addressed 1-based like the layout code
#[derive(Debug, Clone)]
pub struct SheetData {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl ExcelWorkbook {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let inner: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| MappingError::Read(e.to_string()))?;
        let sheets = inner.sheet_names().to_owned();

        if sheets.is_empty() {
            return Err(MappingError::Read("Excel file contains no sheets".to_string()));
        }

        Ok(ExcelWorkbook { inner, sheets })
    }

    pub fn read_sheet(&mut self, sheet_name: &str) -> Result<SheetData> {
        let range = self
            .inner
            .worksheet_range(sheet_name)
            .map_err(|e| MappingError::Read(format!("Error reading sheet '{}': {}", sheet_name, e)))?;

        Ok(SheetData {
            name: sheet_name.to_string(),
            rows: absolute_rows(&range),
        })
    }

    /// Merged regions of `sheet_name`, 1-based, ordered top to bottom then left to right
    pub fn merged_ranges(&mut self, sheet_name: &str) -> Result<Vec<CellRange>> {
        self.inner
            .load_merged_regions()
            .map_err(|e| MappingError::Read(format!("Error reading merged cells: {}", e)))?;

        let mut ranges: Vec<CellRange> = self
            .inner
            .merged_regions_by_sheet(sheet_name)
            .into_iter()
            .map(|(_, _, dims)| {
                CellRange::new(
                    Cell::new(dims.start.0 + 1, dims.start.1 as u16 + 1),
                    Cell::new(dims.end.0 + 1, dims.end.1 as u16 + 1),
                )
            })
            .collect();
        ranges.sort_by_key(|r| (r.first.row, r.first.col));
        Ok(ranges)
    }
}

/// Rows from A1 onwards, so leading empty rows and columns keep their place
fn absolute_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((last_row, last_col)) = range.end() else {
        return Vec::new();
    };

    (0..=last_row)
        .map(|row| {
            (0..=last_col)
                .map(|col| {
                    range
                        .get_value((row, col))
                        .map(|cell| cell.to_string())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect()
}

impl SheetData {
    /// Text at 1-based `(row, col)`, empty when the cell is blank or missing
    pub fn cell(&self, row: u32, col: u16) -> &str {
        if row == 0 || col == 0 {
            return "";
        }
        self.rows
            .get(row as usize - 1)
            .and_then(|r| r.get(col as usize - 1))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows with at least one non-empty cell
    pub fn filled_row_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .count()
    }

    /// 1-based row of the first cell in column A with exactly `text`
    pub fn find_row(&self, text: &str) -> Option<u32> {
        self.rows
            .iter()
            .position(|row| row.first().is_some_and(|cell| cell == text))
            .map(|i| i as u32 + 1)
    }
}
