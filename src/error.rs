//! Error types for mapping parsing and spreadsheet generation

use thiserror::Error;

/// Errors surfaced by the mapping parser and the spreadsheet exporter
#[derive(Debug, Error)]
pub enum MappingError {
    /// Input is not valid JSON at all
    #[error("Invalid file: could not read JSON ({0})")]
    MalformedJson(#[source] serde_json::Error),

    /// Input is valid JSON but does not have the shape of a mapping export
    #[error("Unexpected mapping structure: {0}")]
    InvalidStructure(String),

    /// Two object maps sanitize to the same worksheet name
    #[error("Duplicate sheet name '{name}' for object maps {first} and {second}")]
    DuplicateSheetName {
        name: String,
        first: usize,
        second: usize,
    },

    /// The xlsx writer rejected an operation or failed to serialize
    #[error("Failed to generate spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Reading a workbook back failed
    #[error("Failed to read spreadsheet: {0}")]
    Read(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MappingError {
    /// True when the failure came from unreadable input rather than generation
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MappingError::MalformedJson(_) | MappingError::InvalidStructure(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MappingError>;
