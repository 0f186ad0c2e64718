//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

use vizspec_sdk::cardinality::PolicyConfigError;
use vizspec_sdk::charts::ChartError;
use vizspec_sdk::encoding::{AdvisoryError, EncodingError};
use vizspec_sdk::import::ImportError;
use vizspec_sdk::pipeline::PipelineError;

/// Errors surfaced by CLI commands
#[derive(Error, Debug)]
pub enum CliError {
    /// A command-line argument is malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An input file could not be read
    #[error("Failed to read {}: {}", .0.display(), .1)]
    FileReadError(PathBuf, String),

    /// An output file could not be written
    #[error("Failed to write {}: {}", .0.display(), .1)]
    FileWriteError(PathBuf, String),

    /// Policy options could not be loaded
    #[error(transparent)]
    Config(#[from] PolicyConfigError),

    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Table building, encoding or series computation failed
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl CliError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CliError::Pipeline(err) => err.user_message(),
            CliError::FileReadError(path, _) => {
                format!(
                    "{self}\n\nHint: Check that {} exists and is readable, or pass '-' to read stdin.",
                    path.display()
                )
            }
            CliError::Config(_) => {
                format!("{self}\n\nHint: Policy files use camelCase keys, e.g. `topN = 5`.")
            }
            _ => self.to_string(),
        }
    }
}

impl From<ImportError> for CliError {
    fn from(err: ImportError) -> Self {
        CliError::Pipeline(err.into())
    }
}

impl From<ChartError> for CliError {
    fn from(err: ChartError) -> Self {
        CliError::Pipeline(err.into())
    }
}

impl From<EncodingError> for CliError {
    fn from(err: EncodingError) -> Self {
        CliError::Pipeline(err.into())
    }
}

impl From<AdvisoryError> for CliError {
    fn from(err: AdvisoryError) -> Self {
        CliError::Pipeline(err.into())
    }
}
