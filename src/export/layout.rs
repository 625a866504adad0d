//! 1-based cell coordinates and merge ranges
//!
//! Sheet layouts are described the way they read in Excel (row 1, column A),
//! while rust_xlsxwriter addresses cells 0-based. Everything that touches a
//! worksheet goes through these types so the off-by-one lives in one place.

use std::fmt;

/// A single cell, 1-based on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: u32,
    pub col: u16,
}

impl Cell {
    pub const fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// 0-based `(row, col)` pair for rust_xlsxwriter
    pub fn zero_based(self) -> (u32, u16) {
        (self.row.saturating_sub(1), self.col.saturating_sub(1))
    }

    /// Range spanning from this cell to `last` on the same row
    pub fn to_col(self, last_col: u16) -> CellRange {
        CellRange::new(self, Cell::new(self.row, last_col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.col), self.row)
    }
}

/// Rectangular region given by its two corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub first: Cell,
    pub last: Cell,
}

impl CellRange {
    pub fn new(first: Cell, last: Cell) -> Self {
        Self { first, last }
    }

    /// 0-based `(first_row, first_col, last_row, last_col)` for merge_range
    pub fn zero_based(self) -> (u32, u16, u32, u16) {
        let (r1, c1) = self.first.zero_based();
        let (r2, c2) = self.last.zero_based();
        (r1, c1, r2, c2)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.last)
    }
}

/// Spreadsheet column letters for a 1-based column number (1 -> A, 27 -> AA)
pub fn column_letters(col: u16) -> String {
    let mut n = col as u32;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// 1-based column number for spreadsheet letters, case-insensitive
pub fn column_number(letters: &str) -> Option<u16> {
    if letters.is_empty() {
        return None;
    }

    let mut n: u32 = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        n = n * 26 + (ch.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        if n > u16::MAX as u32 {
            return None;
        }
    }
    Some(n as u16)
}
