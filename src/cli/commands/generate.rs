//! Generate command: JSON export to mapping spreadsheet

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::path::PathBuf;

use super::load_export;
use super::stats::print_statistics;
use crate::config::Config;
use crate::export::MappingExporter;
use crate::mapping::get_statistics;

#[derive(Args)]
pub struct GenerateArgs {
    /// Mapping JSON exported from Vertify
    pub input: PathBuf,

    /// Output spreadsheet path (defaults to <input>_MAPPINGS.xlsx)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Open the spreadsheet once it has been written
    #[arg(long)]
    pub open: bool,
}

pub fn handle_generate_command(args: GenerateArgs, config: &Config) -> Result<()> {
    let export = load_export(&args.input)?;

    print_statistics(&get_statistics(&export));
    println!();

    let output = args
        .output
        .unwrap_or_else(|| config.output_path_for(&args.input));

    println!("🔄 {}", "Generating spreadsheet...".dimmed());
    let open_after = args.open || config.export.open_after_export;
    let result = if open_after {
        MappingExporter::export_and_open(&export, &output)
    } else {
        MappingExporter::export_to_file(&export, &output)
    };
    result.with_context(|| format!("Failed to save Excel file: {}", output.display()))?;

    println!(
        "{} Spreadsheet generated: {}",
        "✓".bright_green().bold(),
        output.display().to_string().bright_green().bold()
    );

    Ok(())
}
