use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::path::PathBuf;

use crate::inspect::ExcelWorkbook;

#[derive(Args)]
pub struct InspectArgs {
    /// Spreadsheet to read
    pub file: PathBuf,

    /// Also list the merged cell ranges of every sheet
    #[arg(long)]
    pub merges: bool,
}

pub fn handle_inspect_command(args: InspectArgs) -> Result<()> {
    let mut workbook = ExcelWorkbook::open(&args.file)
        .with_context(|| format!("Failed to open spreadsheet: {}", args.file.display()))?;

    println!("📊 {} ({} sheets)", args.file.display().to_string().cyan(), workbook.sheets.len());

    for name in workbook.sheets.clone() {
        let sheet = workbook.read_sheet(&name)?;
        let merged = workbook.merged_ranges(&name)?;
        println!(
            "  {} {}",
            sheet.name.bold(),
            format!("{} rows, {} merged ranges", sheet.filled_row_count(), merged.len()).dimmed()
        );

        if args.merges {
            for range in &merged {
                println!("    {}", range);
            }
        }
    }

    Ok(())
}
