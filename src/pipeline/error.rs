//! Error types for series computation
//!
//! Errors chain the module errors they wrap and offer user-friendly messages
//! for CLI output.

use thiserror::Error;

use crate::charts::ChartError;
use crate::encoding::{AdvisoryError, EncodingError};
use crate::import::ImportError;

/// Errors that can occur while computing a renderable series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Building the table failed
    #[error(transparent)]
    Import(#[from] ImportError),

    /// The chart type is not registered
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// The encoding does not fit the table or template
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// An advisory proposal was not accepted
    #[error(transparent)]
    Advisory(#[from] AdvisoryError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

impl PipelineError {
    /// Whether the caller can keep its previous state and carry on
    pub fn is_recoverable(&self) -> bool {
        match self {
            PipelineError::Import(_) => false,
            PipelineError::Chart(err) => err.is_recoverable(),
            PipelineError::Encoding(err) => err.is_recoverable(),
            PipelineError::Advisory(_) => true,
        }
    }

    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::Import(ImportError::TableFormat { .. }) => {
                format!(
                    "{self}\n\nHint: The input needs a header line followed by at least one data line."
                )
            }
            PipelineError::Import(ImportError::Csv(_)) => {
                format!("{self}\n\nHint: Check the delimiter and quoting of the input file.")
            }
            PipelineError::Chart(ChartError::UnsupportedChartType(_)) => {
                format!("{self}\n\nHint: Supported chart types are scatter, bar, line, pie and area.")
            }
            PipelineError::Encoding(EncodingError::InvalidChannel { available, .. }) => {
                format!("{self}\n\nHint: Pick one of: {}.", available.join(", "))
            }
            PipelineError::Encoding(EncodingError::UnsupportedChannel { chart_type, .. }) => {
                format!("{self}\n\nHint: Run `vizspec templates` to see the channels {chart_type} accepts.")
            }
            PipelineError::Advisory(AdvisoryError::Rejected(errors)) => {
                let mut message = String::from("Advisory proposal rejected:");
                for err in errors {
                    message.push_str(&format!("\n  - {err}"));
                }
                message
            }
            _ => self.to_string(),
        }
    }
}
