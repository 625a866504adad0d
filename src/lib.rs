//! Convert Vertify mapping JSON exports into migration spreadsheets
//!
//! ```no_run
//! use vertify_mappings::{MappingExport, MappingExporter, get_statistics};
//!
//! let export: MappingExport = std::fs::read_to_string("export.json")?.parse()?;
//! println!("{:?}", get_statistics(&export));
//! let bytes = MappingExporter::generate_to_bytes(&export)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod inspect;
pub mod mapping;

pub use error::MappingError;
pub use export::{MappingExporter, XLSX_MIME_TYPE, generate_to_bytes};
pub use mapping::{MappingExport, MappingStatistics, get_statistics};
