//! Excel export of a Vertify mapping export

pub mod formatting;
pub mod helpers;
pub mod layout;
pub mod sheets;

use rust_xlsxwriter::Workbook;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{MappingError, Result};
use crate::mapping::MappingExport;
use helpers::{detail_sheet_name, try_open_file};
use sheets::*;

/// MIME type to use when serving the generated bytes
pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Builds the mapping workbook: one summary sheet plus one sheet per object map
pub struct MappingExporter;

impl MappingExporter {
    /// Generate the workbook and return it as xlsx bytes
    pub fn generate_to_bytes(export: &MappingExport) -> Result<Vec<u8>> {
        // Resolve names first so a collision fails before any sheet is built
        let sheet_names = detail_sheet_names(export)?;

        let mut workbook = Workbook::new();
        create_summary_sheet(&mut workbook, export)?;

        for ((_, obj), sheet_name) in export.indexed().zip(&sheet_names) {
            create_detail_sheet(&mut workbook, sheet_name, obj)?;
        }

        let buffer = workbook.save_to_buffer()?;
        log::info!(
            "Generated mapping workbook with {} sheets ({} bytes)",
            sheet_names.len() + 1,
            buffer.len()
        );
        Ok(buffer)
    }

    /// Generate the workbook and write it to `file_path`
    pub fn export_to_file(export: &MappingExport, file_path: &Path) -> Result<()> {
        let bytes = Self::generate_to_bytes(export)?;
        fs::write(file_path, bytes)?;
        log::info!("Excel file exported to: {}", file_path.display());
        Ok(())
    }

    /// Export to file and try to open it afterwards
    pub fn export_and_open(export: &MappingExport, file_path: &Path) -> Result<()> {
        Self::export_to_file(export, file_path)?;
        try_open_file(file_path);
        Ok(())
    }
}

/// Worksheet names for every object map, in input order
///
/// Excel compares sheet names case-insensitively, so two names that only
/// differ in case are reported as a collision.
pub fn detail_sheet_names(export: &MappingExport) -> Result<Vec<String>> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(export.len());

    for (index, obj) in export.indexed() {
        let name = detail_sheet_name(index, obj.name().unwrap_or("Unknown"));
        if let Some(&first) = seen.get(&name.to_lowercase()) {
            return Err(MappingError::DuplicateSheetName {
                name,
                first,
                second: index,
            });
        }
        seen.insert(name.to_lowercase(), index);
        names.push(name);
    }

    Ok(names)
}

/// Shorthand for [`MappingExporter::generate_to_bytes`]
pub fn generate_to_bytes(export: &MappingExport) -> Result<Vec<u8>> {
    MappingExporter::generate_to_bytes(export)
}
