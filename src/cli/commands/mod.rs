pub mod generate;
pub mod inspect;
pub mod preview;
pub mod stats;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::mapping::MappingExport;

/// Read and parse a mapping export from disk
pub fn load_export(path: &Path) -> Result<MappingExport> {
    if !path.is_file() {
        anyhow::bail!("Input file does not exist: {}", path.display());
    }

    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    let export = MappingExport::from_slice(&bytes)?;
    log::info!("Loaded {} object maps from {}", export.len(), path.display());
    Ok(export)
}
