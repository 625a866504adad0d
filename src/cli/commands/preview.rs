//! Preview table of the object maps in an export

use anyhow::Result;
use clap::Args;
use colored::*;
use std::path::PathBuf;

use super::load_export;
use crate::mapping::{ObjectMapPreview, preview};

#[derive(Args)]
pub struct PreviewArgs {
    /// Mapping JSON exported from Vertify
    pub input: PathBuf,
}

const HEADERS: [&str; 6] = ["ID", "Name", "Source", "Target", "Properties", "Filters"];

pub fn handle_preview_command(args: PreviewArgs) -> Result<()> {
    let export = load_export(&args.input)?;
    let rows = preview(&export);

    if rows.is_empty() {
        println!("  {}", "⚠️  No ObjectMap found in JSON".bright_yellow().bold());
        return Ok(());
    }

    let table: Vec<[String; 6]> = rows.iter().map(preview_cells).collect();
    let widths: Vec<usize> = (0..HEADERS.len())
        .map(|i| {
            table
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(HEADERS[i].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line = HEADERS
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<w$}", h, w = *w))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header_line.bold());

    for row in &table {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line);
    }

    Ok(())
}

fn preview_cells(row: &ObjectMapPreview) -> [String; 6] {
    [
        row.id.to_string(),
        row.name.clone(),
        row.source.clone(),
        row.target.clone(),
        row.properties.to_string(),
        row.filters.to_string(),
    ]
}
