//! Helper functions for the mapping export

use rust_xlsxwriter::Worksheet;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::layout::Cell;
use crate::error::Result;

/// Excel refuses worksheet names longer than this
pub const MAX_SHEET_NAME_LEN: usize = 31;
/// Characters kept from the object map name when a sheet name must be shortened
const TRUNCATED_NAME_LEN: usize = 22;
const ELLIPSIS: &str = "...";

/// Replacements for characters Excel does not allow in sheet names, applied in order
const SHEET_NAME_REPLACEMENTS: &[(&str, &str)] = &[
    (":", " "),
    (">>", "to"),
    ("\\", " "),
    ("/", " "),
    ("?", ""),
    ("*", ""),
    ("[", "("),
    ("]", ")"),
];

/// Replace characters Excel rejects in sheet names
///
/// Excel also refuses a name that ends with an apostrophe, so trailing ones are
/// dropped. A leading one cannot occur once the index prefix is added.
pub fn sanitize_sheet_name(name: &str) -> String {
    let replaced = SHEET_NAME_REPLACEMENTS
        .iter()
        .fold(name.to_string(), |acc, (from, to)| acc.replace(from, to));
    replaced.trim_end_matches('\'').to_string()
}

/// Worksheet name for the object map at 1-based `index`
///
/// Names over the Excel limit keep the index and the first 22 characters of
/// the sanitized name followed by "...". Very large indices shorten the kept
/// part further so the result still fits.
pub fn detail_sheet_name(index: usize, name: &str) -> String {
    let sanitized = sanitize_sheet_name(name);
    let full = format!("{} - {}", index, sanitized);
    if full.chars().count() <= MAX_SHEET_NAME_LEN {
        return full;
    }

    let prefix = format!("{} - ", index);
    let budget = MAX_SHEET_NAME_LEN
        .saturating_sub(prefix.chars().count() + ELLIPSIS.len())
        .min(TRUNCATED_NAME_LEN);
    let kept: String = sanitized.chars().take(budget).collect();
    format!("{}{}{}", prefix, kept, ELLIPSIS)
}

/// Output file name for an input export: `export.json` -> `export_MAPPINGS.xlsx`
pub fn output_file_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mappings".to_string());
    input.with_file_name(format!("{}_MAPPINGS.xlsx", stem))
}

/// Write a plain value, leaving the cell untouched when there is nothing to show
pub fn write_text(sheet: &mut Worksheet, cell: Cell, text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    let (row, col) = cell.zero_based();
    sheet.write_string(row, col, text)?;
    Ok(())
}

/// Try to open the spreadsheet with the platform's default application
pub fn try_open_file(file_path: &Path) {
    let result = if cfg!(target_os = "windows") {
        // Empty string after start is the window title
        Command::new("cmd")
            .arg("/c")
            .arg("start")
            .arg("")
            .arg(file_path)
            .spawn()
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(file_path).spawn()
    } else {
        Command::new("libreoffice")
            .arg("--calc")
            .arg(file_path)
            .spawn()
            .or_else(|_| Command::new("xdg-open").arg(file_path).spawn())
    };

    match result {
        Ok(_) => log::info!("Opened spreadsheet: {}", file_path.display()),
        Err(e) => log::warn!(
            "Could not auto-open file: {}. Please open manually: {}",
            e,
            file_path.display()
        ),
    }
}
