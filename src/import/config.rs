//! Configuration for table import

use serde::{Deserialize, Serialize};

use crate::inference::InferenceConfig;

/// Row cap applied to uploaded datasets before charting
pub const UPLOAD_PREVIEW_ROWS: usize = 100;

/// Configuration for building tables from raw input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportConfig {
    /// Field delimiter for delimited text (ASCII)
    pub delimiter: char,
    /// Trim whitespace around header names and cells
    pub trim: bool,
    /// Keep at most this many data rows (None = all)
    pub max_rows: Option<usize>,
    /// Column type inference settings
    pub inference: InferenceConfig,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            trim: true,
            max_rows: None,
            inference: InferenceConfig::default(),
        }
    }
}

impl ImportConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Config matching the upload convention: only the first 100 rows are kept
    pub fn upload_preview() -> Self {
        Self::default().with_max_rows(Some(UPLOAD_PREVIEW_ROWS))
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable/disable whitespace trimming
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set the row cap
    pub fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Set the inference configuration
    pub fn with_inference(mut self, inference: InferenceConfig) -> Self {
        self.inference = inference;
        self
    }
}
