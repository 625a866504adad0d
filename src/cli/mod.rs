//! Command-line interface

pub mod app;
pub mod commands;

pub use app::{Cli, Commands};

use anyhow::Result;

use crate::config::Config;

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate(args) => commands::generate::handle_generate_command(args, &config),
        Commands::Stats(args) => commands::stats::handle_stats_command(args),
        Commands::Preview(args) => commands::preview::handle_preview_command(args),
        Commands::Inspect(args) => commands::inspect::handle_inspect_command(args),
    }
}
