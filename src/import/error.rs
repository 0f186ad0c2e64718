//! Error types for table import

use thiserror::Error;

use crate::models::TableError;

/// Errors that can occur while building a table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    /// Delimited text needs a header line and at least one data line
    #[error("Table format error: expected a header and at least one data line, found {records} line(s)")]
    TableFormat { records: usize },

    /// The delimited text could not be parsed
    #[error("CSV parsing error: {0}")]
    Csv(String),

    /// The assembled table violated a table invariant
    #[error("Invalid table: {0}")]
    InvalidTable(#[from] TableError),
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv(e.to_string())
    }
}
