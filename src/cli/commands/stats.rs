use anyhow::Result;
use clap::Args;
use colored::*;
use std::path::PathBuf;

use super::load_export;
use crate::mapping::{MappingStatistics, get_statistics};

#[derive(Args)]
pub struct StatsArgs {
    /// Mapping JSON exported from Vertify
    pub input: PathBuf,
}

pub fn handle_stats_command(args: StatsArgs) -> Result<()> {
    let export = load_export(&args.input)?;
    print_statistics(&get_statistics(&export));
    Ok(())
}

pub fn print_statistics(stats: &MappingStatistics) {
    println!("📋 ObjectMaps:        {}", stats.object_map_count.to_string().bright_cyan().bold());
    println!("🔄 Total Properties:  {}", stats.total_properties.to_string().bright_cyan().bold());
    println!("🔍 Total Filters:     {}", stats.total_filters.to_string().bright_cyan().bold());
}
