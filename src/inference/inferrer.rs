//! Column type inference engine

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::InferenceConfig;
use super::formats::{is_date, is_datetime, parse_number};
use crate::models::Type;

/// Confidence for date, date-time and boolean columns
pub const TEMPORAL_CONFIDENCE: f64 = 0.9;
/// Confidence for numeric columns
pub const NUMBER_CONFIDENCE: f64 = 0.8;
/// Confidence for low-cardinality text columns
pub const CATEGORICAL_CONFIDENCE: f64 = 0.7;
/// Confidence for free-text columns
pub const TEXT_CONFIDENCE: f64 = 0.6;

/// Result of inferring a column's type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInference {
    /// Inferred semantic type
    #[serde(rename = "type")]
    pub data_type: Type,
    /// Confidence in the inferred type (0.0 - 1.0)
    pub confidence: f64,
    /// First non-null values, in input order
    pub sample_values: Vec<Value>,
}

impl TypeInference {
    fn new(data_type: Type, confidence: f64, sample_values: Vec<Value>) -> Self {
        Self {
            data_type,
            confidence,
            sample_values,
        }
    }

    /// Whether the column looks categorical rather than free text
    pub fn is_categorical(&self) -> bool {
        self.data_type == Type::String && self.confidence >= CATEGORICAL_CONFIDENCE
    }
}

/// Column type inference engine
///
/// Inference is a best-effort heuristic and never fails: an input with no
/// usable values degrades to `String` with zero confidence.
#[derive(Debug, Clone, Default)]
pub struct TypeInferencer {
    config: InferenceConfig,
}

impl TypeInferencer {
    /// Create an inferencer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inferencer with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer the semantic type of a raw value sequence
    ///
    /// Rules are checked in priority order over the non-null values: all dates,
    /// all dates with at least one time component, all booleans, all numbers,
    /// few distinct values, and finally free text.
    pub fn infer(&self, values: &[Value]) -> TypeInference {
        let present: Vec<&Value> = values.iter().filter(|v| !self.is_missing(v)).collect();
        let samples: Vec<Value> = present
            .iter()
            .take(self.config.max_samples)
            .map(|v| (*v).clone())
            .collect();

        if present.is_empty() {
            return TypeInference::new(Type::String, 0.0, samples);
        }

        if present.iter().all(|v| as_trimmed_str(v).is_some_and(is_date)) {
            return TypeInference::new(Type::Date, TEMPORAL_CONFIDENCE, samples);
        }

        if self.config.detect_datetime && Self::all_temporal_with_time(&present) {
            return TypeInference::new(Type::DateTime, TEMPORAL_CONFIDENCE, samples);
        }

        if present.iter().all(|v| is_boolean(v)) {
            return TypeInference::new(Type::Boolean, TEMPORAL_CONFIDENCE, samples);
        }

        if present.iter().all(|v| is_numeric(v)) {
            return TypeInference::new(Type::Number, NUMBER_CONFIDENCE, samples);
        }

        let distinct: HashSet<String> = present.iter().map(|v| coerce_to_string(v)).collect();
        if (1..=self.config.categorical_max_distinct).contains(&distinct.len()) {
            return TypeInference::new(Type::String, CATEGORICAL_CONFIDENCE, samples);
        }

        TypeInference::new(Type::String, TEXT_CONFIDENCE, samples)
    }

    fn is_missing(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => self.config.blank_as_null && s.trim().is_empty(),
            _ => false,
        }
    }

    fn all_temporal_with_time(values: &[&Value]) -> bool {
        let mut has_time = false;
        for value in values {
            match as_trimmed_str(value) {
                Some(s) if is_datetime(s) => has_time = true,
                Some(s) if is_date(s) => {}
                _ => return false,
            }
        }
        has_time
    }
}

/// Infer a column type with the default configuration
pub fn infer_type(values: &[Value]) -> TypeInference {
    TypeInferencer::new().infer(values)
}

fn as_trimmed_str(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim)
}

fn is_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::String(s) => matches!(s.trim(), "true" | "false"),
        _ => false,
    }
}

fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => parse_number(s).is_some(),
        _ => false,
    }
}

/// String form of a raw value used for distinct counting
pub(crate) fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
