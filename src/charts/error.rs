//! Error types for chart templates

use thiserror::Error;

/// Errors raised by the template registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// The requested chart type has no registered template
    #[error("Unsupported chart type: '{0}'")]
    UnsupportedChartType(String),
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

impl ChartError {
    /// Whether the caller can continue, e.g. by falling back to a default template
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ChartError::UnsupportedChartType(_))
    }
}
