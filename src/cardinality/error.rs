//! Error types for loading policy options

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading policy options from a file
#[derive(Error, Debug)]
pub enum PolicyConfigError {
    /// Failed to read the options file
    #[error("Failed to read policy options file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The options file is not valid TOML of the expected shape
    #[error("Failed to parse policy options: {0}")]
    Parse(String),
}
