//! Options for the cardinality policy

use serde::{Deserialize, Serialize};

use crate::charts::ChartType;

/// Options for the categorical chart policy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyOptions {
    /// Keep only the first N entries after sorting and bucketing (0 = off)
    pub top_n: usize,
    /// More distinct categories than this switches to `fallback_chart`
    pub fallback_threshold: usize,
    /// More distinct categories than this buckets the tail into one entry
    pub bucket_threshold: usize,
    /// Name of the synthetic bucket entry
    pub other_label: String,
    /// Chart type suggested when there are too many categories
    pub fallback_chart: ChartType,
    /// Let the pipeline switch to `fallback_chart` itself
    pub auto_fallback: bool,
}

impl Default for PolicyOptions {
    fn default() -> Self {
        Self {
            top_n: 0,
            fallback_threshold: 20,
            bucket_threshold: 12,
            other_label: "Other".to_string(),
            fallback_chart: ChartType::Bar,
            auto_fallback: false,
        }
    }
}

impl PolicyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top-N limit (0 = off)
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the fallback threshold
    pub fn with_fallback_threshold(mut self, threshold: usize) -> Self {
        self.fallback_threshold = threshold;
        self
    }

    /// Set the bucketing threshold
    pub fn with_bucket_threshold(mut self, threshold: usize) -> Self {
        self.bucket_threshold = threshold;
        self
    }

    /// Set the label of the bucket entry
    pub fn with_other_label(mut self, label: impl Into<String>) -> Self {
        self.other_label = label.into();
        self
    }

    /// Set the fallback chart type
    pub fn with_fallback_chart(mut self, chart_type: ChartType) -> Self {
        self.fallback_chart = chart_type;
        self
    }

    /// Enable/disable automatic fallback in the pipeline
    pub fn with_auto_fallback(mut self, enabled: bool) -> Self {
        self.auto_fallback = enabled;
        self
    }
}

#[cfg(feature = "config-file")]
mod file {
    use std::path::Path;

    use super::PolicyOptions;
    use crate::cardinality::error::PolicyConfigError;

    impl PolicyOptions {
        /// Parse options from TOML text; missing keys keep their defaults
        pub fn from_toml_str(text: &str) -> Result<Self, PolicyConfigError> {
            toml::from_str(text).map_err(|e| PolicyConfigError::Parse(e.to_string()))
        }

        /// Load options from a TOML file
        pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PolicyConfigError> {
            let path = path.as_ref();
            let text = std::fs::read_to_string(path).map_err(|source| PolicyConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_toml_str(&text)
        }
    }
}
