use super::commands::generate::GenerateArgs;
use super::commands::inspect::InspectArgs;
use super::commands::preview::PreviewArgs;
use super::commands::stats::StatsArgs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vertify-mappings")]
#[command(about = "Convert Vertify mapping JSON exports into formatted Excel spreadsheets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Show full error details
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the mapping spreadsheet from a JSON export
    Generate(GenerateArgs),
    /// Show object map, property and filter counts
    Stats(StatsArgs),
    /// List the object maps in a JSON export
    Preview(PreviewArgs),
    /// List the sheets of a generated spreadsheet
    Inspect(InspectArgs),
}
