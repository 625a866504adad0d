//! Per object map detail sheets
//!
//! A detail sheet stacks four sections: API Request, Merge, Filter and Field
//! Mapping. Each section builder takes the row it starts on and returns the
//! first row after it, so sections can be composed and tested on their own.

use rust_xlsxwriter::{Workbook, Worksheet};

use super::super::formatting::*;
use super::super::helpers::write_text;
use super::super::layout::Cell;
use crate::error::Result;
use crate::mapping::{MergeField, ObjectMap, RuleType, Transformation};

const LAST_COL: u16 = 6;
/// Blank rows left after the API Request and Merge sections
pub const SECTION_GAP: u32 = 2;

pub const MIGRATION_SYSTEM: &str = "MIGRATION SYTEM: VERTIFY";
pub const API_REQUEST_HEADERS: [&str; 6] = [
    "system",
    "type",
    "path/connection string",
    "request example",
    "response example",
    "notes",
];
pub const FILTER_HEADERS_VERTIFY: [&str; 3] = ["path.field", "condition", "value"];
pub const FILTER_HEADERS_DIGIBEE: [&str; 3] = ["path/table/alias", "field", "query relation"];
pub const FIELD_MAPPING_HEADERS: [&str; 6] = [
    "move",
    "type",
    "details",
    "source path.field",
    "target path.field",
    "notes",
];

const API_TYPE: &str = "REST";
const NO_MERGE: &str = "No merge";
const NO_FILTER: &str = "No filter";

pub fn create_detail_sheet(workbook: &mut Workbook, sheet_name: &str, obj: &ObjectMap) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;
    write_detail_sheet(sheet, obj)?;
    log::debug!("Detail sheet '{}' written", sheet_name);
    Ok(())
}

pub fn write_detail_sheet(sheet: &mut Worksheet, obj: &ObjectMap) -> Result<u32> {
    let mut row = 1;
    row = add_api_request_section(sheet, obj, row)? + SECTION_GAP;
    row = add_merge_section(sheet, obj, row)? + SECTION_GAP;
    row = add_filter_section(sheet, obj, row)?;
    row = add_field_mapping_section(sheet, obj, row)?;

    set_column_widths(sheet, COLUMN_WIDTHS_DETAIL)?;
    Ok(row)
}

fn section_header(sheet: &mut Worksheet, row: u32, title: &str, fill: Fill) -> Result<()> {
    apply_merged_style(
        sheet,
        Cell::new(row, 1).to_col(LAST_COL),
        title,
        &CellStyle::new().fill(fill).font(FONT_HEADER_WHITE).align(Alignment::Center),
    )
}

/// "Vertify" over A:C and "Digibee" over D:F
fn platform_split_header(sheet: &mut Worksheet, row: u32) -> Result<()> {
    apply_merged_style(
        sheet,
        Cell::new(row, 1).to_col(3),
        "Vertify",
        &CellStyle::new().fill(SUBHEADER_GREEN).align(Alignment::CenterHorizontal),
    )?;
    apply_merged_style(
        sheet,
        Cell::new(row, 4).to_col(LAST_COL),
        "Digibee",
        &CellStyle::new().fill(SUBHEADER_PURPLE).align(Alignment::CenterHorizontal),
    )
}

fn column_headers(sheet: &mut Worksheet, row: u32, first_col: u16, headers: &[&str], fill: Fill) -> Result<()> {
    let style = CellStyle::new().fill(fill);
    for (col, header) in (first_col..).zip(headers) {
        apply_header_style(sheet, Cell::new(row, col), header, &style)?;
    }
    Ok(())
}

pub fn add_api_request_section(sheet: &mut Worksheet, obj: &ObjectMap, start_row: u32) -> Result<u32> {
    let mut row = start_row;

    section_header(sheet, row, "API Request", RED)?;
    row += 1;

    apply_merged_style(
        sheet,
        Cell::new(row, 1).to_col(LAST_COL),
        MIGRATION_SYSTEM,
        &CellStyle::new().fill(SUBHEADER_GREEN).align(Alignment::Center),
    )?;
    row += 1;

    column_headers(sheet, row, 1, &API_REQUEST_HEADERS, SUBHEADER_GREEN)?;
    row += 1;

    // Path, examples and notes are filled in by hand
    for system in [obj.source_system(), obj.target_system()] {
        write_text(sheet, Cell::new(row, 1), system.unwrap_or_default())?;
        write_text(sheet, Cell::new(row, 2), API_TYPE)?;
        row += 1;
    }

    Ok(row)
}

pub fn add_merge_section(sheet: &mut Worksheet, obj: &ObjectMap, start_row: u32) -> Result<u32> {
    let mut row = start_row;

    section_header(sheet, row, "Merge", SUBHEADER_GREEN)?;
    row += 1;

    platform_split_header(sheet, row)?;
    row += 1;

    apply_header_style(sheet, Cell::new(row, 1), "rules", &CellStyle::new().fill(SUBHEADER_GREEN))?;
    apply_header_style(sheet, Cell::new(row, 4), "rules", &CellStyle::new().fill(SUBHEADER_PURPLE))?;
    row += 1;

    write_text(sheet, Cell::new(row, 1), &merge_rules_text(obj))?;
    // Digibee-side merge rules cannot be derived from the export
    write_text(sheet, Cell::new(row, 4), "N/A")?;

    Ok(row + 1)
}

pub fn add_filter_section(sheet: &mut Worksheet, obj: &ObjectMap, start_row: u32) -> Result<u32> {
    let mut row = start_row;

    section_header(sheet, row, "Filter", HEADER_BLACK)?;
    row += 1;

    platform_split_header(sheet, row)?;
    row += 1;

    apply_header_style(sheet, Cell::new(row, 1), "FILTER", &CellStyle::new().fill(SUBHEADER_GREEN))?;
    apply_merged_style(
        sheet,
        Cell::new(row, 4).to_col(LAST_COL),
        "",
        &CellStyle::new().fill(SUBHEADER_PURPLE).align(Alignment::CenterHorizontal),
    )?;
    row += 1;

    column_headers(sheet, row, 1, &FILTER_HEADERS_VERTIFY, SUBHEADER_GREEN)?;
    column_headers(sheet, row, 4, &FILTER_HEADERS_DIGIBEE, SUBHEADER_PURPLE)?;
    row += 1;

    if obj.objects_map_filter.is_empty() {
        write_text(sheet, Cell::new(row, 1), NO_FILTER)?;
        return Ok(row + 1);
    }

    for filter in &obj.objects_map_filter {
        write_text(sheet, Cell::new(row, 1), filter.source_property_name.as_deref().unwrap_or_default())?;
        write_text(sheet, Cell::new(row, 2), filter.filter_operator.as_deref().unwrap_or_default())?;
        write_text(sheet, Cell::new(row, 3), filter.value.as_deref().unwrap_or_default())?;
        row += 1;
    }

    Ok(row)
}

pub fn add_field_mapping_section(sheet: &mut Worksheet, obj: &ObjectMap, start_row: u32) -> Result<u32> {
    let mut row = start_row;

    section_header(sheet, row, "Field Mapping", HEADER_BLACK)?;
    row += 1;

    apply_merged_style(
        sheet,
        Cell::new(row, 1).to_col(LAST_COL),
        MIGRATION_SYSTEM,
        &CellStyle::new().fill(SUBHEADER_GREEN).align(Alignment::CenterHorizontal),
    )?;
    row += 1;

    column_headers(sheet, row, 1, &FIELD_MAPPING_HEADERS, SUBHEADER_GREEN)?;
    row += 1;

    for prop in &obj.properties_map {
        let transformation = prop.first_transformation();
        let details = transformation.map(transformation_details).unwrap_or_default();
        let source = transformation.map(Transformation::source_property).unwrap_or_default();

        write_text(sheet, Cell::new(row, 1), prop.move_action())?;
        write_text(sheet, Cell::new(row, 2), prop.mapping_type())?;
        write_text(sheet, Cell::new(row, 3), &details)?;
        write_text(sheet, Cell::new(row, 4), source)?;
        write_text(sheet, Cell::new(row, 5), prop.target_property())?;
        row += 1;
    }

    Ok(row)
}

/// Merge rules as one line per field, or "No merge"
pub fn merge_rules_text(obj: &ObjectMap) -> String {
    let fields = obj.active_merge_fields();
    if fields.is_empty() {
        return NO_MERGE.to_string();
    }

    fields.iter().map(merge_field_line).collect::<Vec<_>>().join("\n")
}

fn merge_field_line(field: &MergeField) -> String {
    format!(
        "{}: {} -> {}",
        field.merge_field.as_deref().unwrap_or_default(),
        field.source_property_name.as_deref().unwrap_or_default(),
        field.target_property_name.as_deref().unwrap_or_default()
    )
}

/// Short description of a transformation rule; unknown rule types yield ""
pub fn transformation_details(transformation: &Transformation) -> String {
    match transformation.rule_type() {
        RuleType::Value => format!("Value: {}", transformation.value.as_deref().unwrap_or_default()),
        RuleType::Convert => format!(
            "Convert List: {}",
            transformation.project_convert_list_name.as_deref().unwrap_or_default()
        ),
        RuleType::Condition => "Conditional Logic".to_string(),
        RuleType::Date => format!(
            "Date Format: {}",
            transformation.date_format.as_deref().unwrap_or_default()
        ),
        RuleType::Other(_) => String::new(),
    }
}
