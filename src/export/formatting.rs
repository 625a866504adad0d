//! Style registry for the mapping spreadsheet
//!
//! Fills, fonts, alignments and column widths are fixed constants so every
//! generated workbook looks the same. They are never mutated at runtime.

use rust_xlsxwriter::{Color, Format, FormatAlign, Worksheet};

use super::layout::{Cell, CellRange, column_number};
use crate::error::Result;

/// Solid background fill, 0xRRGGBB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill(pub u32);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStyle {
    pub color: Option<u32>,
    pub bold: bool,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Centered horizontally and vertically
    Center,
    CenterHorizontal,
}

pub const HEADER_BLACK: Fill = Fill(0x000000);
pub const SUBHEADER_GREEN: Fill = Fill(0x6AA84F);
pub const SUBHEADER_PURPLE: Fill = Fill(0x9900FF);
// Not used by the current layouts
pub const SUBHEADER_YELLOW: Fill = Fill(0x93C47D);
pub const RED: Fill = Fill(0xFF0000);

pub const FONT_HEADER_WHITE: FontStyle = FontStyle { color: Some(0xFFFFFF), bold: true, size: 11.0 };
pub const FONT_HEADER_WHITE_LARGE: FontStyle = FontStyle { color: Some(0xFFFFFF), bold: true, size: 14.0 };
pub const FONT_NORMAL: FontStyle = FontStyle { color: None, bold: false, size: 10.0 };
pub const FONT_BOLD: FontStyle = FontStyle { color: None, bold: true, size: 10.0 };

/// Column widths for the "Movements to migrate" sheet
pub const COLUMN_WIDTHS_SUMMARY: &[(&str, f64)] = &[
    ("A", 5.0),  // ID
    ("B", 15.0), // Trigger Type
    ("C", 18.0), // Interval frequence
    ("D", 12.0), // Interval days
    ("E", 45.0), // Movement Name
    ("F", 15.0), // Source System
    ("G", 10.0), // Source Sandbox
    ("H", 12.0), // Source Credentials
    ("I", 15.0), // Target System
    ("J", 10.0), // Target Sandbox
    ("K", 12.0), // Target Credentials
    ("L", 15.0), // Customization
    ("M", 50.0), // Notes
    ("N", 8.0),  // No
    ("O", 15.0), // Email Alert
    ("P", 15.0), // Email Every
];

/// Column widths for every object map detail sheet
pub const COLUMN_WIDTHS_DETAIL: &[(&str, f64)] = &[
    ("A", 15.0),
    ("B", 15.0),
    ("C", 30.0),
    ("D", 30.0),
    ("E", 30.0),
    ("F", 15.0),
];

/// Optional fill, font and alignment applied together to one cell
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellStyle {
    pub fill: Option<Fill>,
    pub font: Option<FontStyle>,
    pub alignment: Option<Alignment>,
}

impl CellStyle {
    pub const fn new() -> Self {
        Self { fill: None, font: None, alignment: None }
    }

    pub const fn fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub const fn font(mut self, font: FontStyle) -> Self {
        self.font = Some(font);
        self
    }

    pub const fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn is_plain(&self) -> bool {
        self.fill.is_none() && self.font.is_none() && self.alignment.is_none()
    }

    pub fn to_format(&self) -> Format {
        let mut format = Format::new();

        if let Some(Fill(rgb)) = self.fill {
            format = format.set_background_color(Color::RGB(rgb));
        }

        if let Some(font) = self.font {
            if let Some(rgb) = font.color {
                format = format.set_font_color(Color::RGB(rgb));
            }
            if font.bold {
                format = format.set_bold();
            }
            format = format.set_font_size(font.size);
        }

        match self.alignment {
            Some(Alignment::Center) => {
                format = format
                    .set_align(FormatAlign::Center)
                    .set_align(FormatAlign::VerticalCenter);
            }
            Some(Alignment::CenterHorizontal) => {
                format = format.set_align(FormatAlign::Center);
            }
            None => {}
        }

        format
    }
}

/// Write `text` into `cell` with whatever parts of `style` are set
pub fn apply_header_style(
    sheet: &mut Worksheet,
    cell: Cell,
    text: &str,
    style: &CellStyle,
) -> Result<()> {
    let (row, col) = cell.zero_based();

    if style.is_plain() {
        sheet.write_string(row, col, text)?;
    } else if text.is_empty() {
        sheet.write_blank(row, col, &style.to_format())?;
    } else {
        sheet.write_string_with_format(row, col, text, &style.to_format())?;
    }

    Ok(())
}

/// Merge `range` and write `text` into it with `style`
pub fn apply_merged_style(
    sheet: &mut Worksheet,
    range: CellRange,
    text: &str,
    style: &CellStyle,
) -> Result<()> {
    let (r1, c1, r2, c2) = range.zero_based();
    sheet.merge_range(r1, c1, r2, c2, text, &style.to_format())?;
    log::trace!("Merged {} \"{}\"", range, text);
    Ok(())
}

pub fn set_column_widths(sheet: &mut Worksheet, widths: &[(&str, f64)]) -> Result<()> {
    for (letters, width) in widths {
        match column_number(letters) {
            Some(col) => {
                sheet.set_column_width(col - 1, *width)?;
            }
            None => log::warn!("Skipping width for invalid column '{}'", letters),
        }
    }
    Ok(())
}
