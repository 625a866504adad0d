//! "Movements to migrate" summary sheet

use rust_xlsxwriter::{Workbook, Worksheet};

use super::super::formatting::*;
use super::super::helpers::write_text;
use super::super::layout::Cell;
use crate::error::Result;
use crate::mapping::MappingExport;

pub const SUMMARY_SHEET_NAME: &str = "Movements to migrate";
pub const SUMMARY_TITLE: &str = "Vertify movements to migrate to Digibee";

const LAST_COL: u16 = 16;
/// First row holding an object map; everything above stays frozen
pub const FIRST_DATA_ROW: u32 = 7;

pub const SUMMARY_HEADERS: [&str; 16] = [
    "ID",
    "Trigger Type",
    "Interval frequence",
    "Interval days",
    "Movement Name",
    "System",
    "Sandbox",
    "Credentials",
    "System",
    "Sandbox",
    "Credentials",
    "Customization",
    "Notes",
    "No",
    "Email Alert",
    "Email Every",
];

// Placeholders for values the export does not carry
const UNKNOWN: &str = "?";
const NOT_AVAILABLE: &str = "N/A";
const TRIGGER_TYPE: &str = "Collect & Move? / Collect?";
const INTERVAL_FREQUENCY: &str = "at 00:00 AM";
const INTERVAL_DAYS: &str = "every ?";
const TRUE_FALSE: &str = "TRUE/FALSE";

pub fn create_summary_sheet(workbook: &mut Workbook, export: &MappingExport) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET_NAME)?;
    write_summary_sheet(sheet, export)
}

pub fn write_summary_sheet(sheet: &mut Worksheet, export: &MappingExport) -> Result<()> {
    let green_bold_center = CellStyle::new()
        .fill(SUBHEADER_GREEN)
        .font(FONT_BOLD)
        .align(Alignment::Center);
    let green_center = CellStyle::new().fill(SUBHEADER_GREEN).align(Alignment::Center);

    apply_merged_style(
        sheet,
        Cell::new(1, 1).to_col(LAST_COL),
        SUMMARY_TITLE,
        &CellStyle::new()
            .fill(HEADER_BLACK)
            .font(FONT_HEADER_WHITE_LARGE)
            .align(Alignment::Center),
    )?;

    write_text(sheet, Cell::new(2, 1), "Customer:")?;
    write_text(sheet, Cell::new(2, 2), UNKNOWN)?;
    write_text(sheet, Cell::new(3, 1), "Key Documents:")?;
    write_text(sheet, Cell::new(3, 2), UNKNOWN)?;

    apply_merged_style(sheet, Cell::new(4, 1).to_col(LAST_COL), "Vertify", &green_bold_center)?;

    apply_merged_style(sheet, Cell::new(5, 6).to_col(8), "Source System", &green_center)?;
    apply_merged_style(sheet, Cell::new(5, 9).to_col(12), "Target System", &green_center)?;

    for (col, header) in (1u16..).zip(SUMMARY_HEADERS) {
        apply_header_style(sheet, Cell::new(6, col), header, &green_bold_center)?;
    }

    let mut row = FIRST_DATA_ROW;
    for (index, obj) in export.indexed() {
        let (r, _) = Cell::new(row, 1).zero_based();
        sheet.write_number(r, 0, index as f64)?;

        let values = [
            TRIGGER_TYPE,
            INTERVAL_FREQUENCY,
            INTERVAL_DAYS,
            obj.name().unwrap_or(NOT_AVAILABLE),
            obj.source_system().unwrap_or(NOT_AVAILABLE),
            TRUE_FALSE,
            TRUE_FALSE,
            obj.target_system().unwrap_or(NOT_AVAILABLE),
            TRUE_FALSE,
            TRUE_FALSE,
            // Customization has no source field either
            TRUE_FALSE,
        ];
        for (col, value) in (2u16..).zip(values) {
            write_text(sheet, Cell::new(row, col), value)?;
        }
        row += 1;
    }

    set_column_widths(sheet, COLUMN_WIDTHS_SUMMARY)?;

    let freeze_at = Cell::new(FIRST_DATA_ROW, 1);
    let (freeze_row, freeze_col) = freeze_at.zero_based();
    sheet.set_freeze_panes(freeze_row, freeze_col)?;

    log::debug!(
        "Summary sheet written with {} object maps, frozen at {}",
        export.len(),
        freeze_at
    );
    Ok(())
}
