//! Column model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::Type;

/// A named, single-typed value sequence within a table
///
/// `values` is aligned 1:1 with the owning table's rows. Columns are only ever
/// created by the table builder or through [`crate::models::Table::try_new`],
/// which checks that alignment.
///
/// # Example
///
/// ```rust
/// use vizspec_sdk::models::{Column, Type};
/// use serde_json::json;
///
/// let col = Column::new("sales", Type::Number, vec![json!("10"), json!("12")]);
/// assert_eq!(col.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column name, unique within its table
    pub name: String,
    /// Inferred semantic type
    #[serde(rename = "type")]
    pub data_type: Type,
    /// Confidence of the inference that produced `data_type` (0.0 - 1.0)
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    /// Raw cell values in row order
    pub values: Vec<Value>,
    /// First non-missing values seen by inference
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sample_values: Vec<Value>,
}

fn default_confidence() -> f64 {
    1.0
}

impl Column {
    /// Create a column with full confidence in its type
    pub fn new(name: impl Into<String>, data_type: Type, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            data_type,
            confidence: 1.0,
            values,
            sample_values: Vec::new(),
        }
    }

    /// Set the inference confidence
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Keep the sample values reported by inference
    pub fn with_sample_values(mut self, samples: Vec<Value>) -> Self {
        self.sample_values = samples;
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of null cells
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }
}
