//! Configuration for column type inference

use serde::{Deserialize, Serialize};

/// Configuration for column type inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceConfig {
    /// Maximum number of non-null sample values to keep
    pub max_samples: usize,

    /// Upper bound of distinct values for a column to count as categorical
    pub categorical_max_distinct: usize,

    /// Detect date-time columns (otherwise mixed date/time columns fall back to String)
    pub detect_datetime: bool,

    /// Treat empty and whitespace-only strings as missing
    pub blank_as_null: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_samples: 5,
            categorical_max_distinct: 10,
            detect_datetime: true,
            blank_as_null: true,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the number of sample values collected per column
    pub fn max_samples(mut self, max: usize) -> Self {
        self.config.max_samples = max;
        self
    }

    /// Set the categorical distinct-value bound (at least 1)
    pub fn categorical_max_distinct(mut self, max: usize) -> Self {
        self.config.categorical_max_distinct = max.max(1);
        self
    }

    /// Enable or disable date-time detection
    pub fn detect_datetime(mut self, detect: bool) -> Self {
        self.config.detect_datetime = detect;
        self
    }

    /// Set whether blank strings count as missing
    pub fn blank_as_null(mut self, blank: bool) -> Self {
        self.config.blank_as_null = blank;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}
