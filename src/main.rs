use anyhow::Result;
use clap::Parser;
use colored::*;
use log::info;
use std::path::Path;
use std::process::ExitCode;

use vertify_mappings::MappingError;
use vertify_mappings::cli::{self, Cli};

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(path) = log_file {
        // Truncate on each run
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn report_error(err: &anyhow::Error, verbose: bool) {
    let headline = match err.downcast_ref::<MappingError>() {
        Some(e) if e.is_input_error() => format!("Error reading JSON: {}", e),
        Some(e) => format!("Error generating spreadsheet: {}", e),
        None => format!("Unexpected error: {}", err),
    };
    eprintln!("{} {}", "❌".bright_red(), headline.bright_red().bold());

    if verbose {
        eprintln!();
        eprintln!("{}", "Error details:".bold());
        for cause in err.chain() {
            eprintln!("  {}", cause.to_string().dimmed());
        }
    } else {
        eprintln!("{}", "Run with --verbose for details.".dimmed());
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Failed to open log file: {}", e);
        return ExitCode::FAILURE;
    }
    info!("Starting vertify-mappings");

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:?}", e);
            report_error(&e, verbose);
            ExitCode::FAILURE
        }
    }
}
