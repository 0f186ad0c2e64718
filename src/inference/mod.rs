//! Column type inference
//!
//! Estimates a semantic [`Type`](crate::models::Type) for a raw, untyped column
//! of cell values, together with a confidence score and a few sample values.
//!
//! ## Features
//!
//! - **Pattern detection** - Recognize dates, date-times, booleans and numbers in raw text
//! - **Type inference** - Assign one type per column with a confidence score
//! - **Categorical detection** - Distinguish low-cardinality text from free text
//!
//! ## Example
//!
//! ```rust,ignore
//! use vizspec_sdk::inference::{InferenceConfig, TypeInferencer};
//! use serde_json::json;
//!
//! let inferencer = TypeInferencer::with_config(InferenceConfig::default());
//! let result = inferencer.infer(&[json!("2023-01-01"), json!("2023-02-01")]);
//! println!("{} ({:.1})", result.data_type, result.confidence);
//! ```

mod config;
mod formats;
mod inferrer;

pub use config::{InferenceConfig, InferenceConfigBuilder};
pub use formats::{Pattern, detect_pattern, is_date, is_datetime, parse_number, parse_temporal};
pub(crate) use inferrer::coerce_to_string;
pub use inferrer::{
    CATEGORICAL_CONFIDENCE, NUMBER_CONFIDENCE, TEMPORAL_CONFIDENCE, TEXT_CONFIDENCE,
    TypeInference, TypeInferencer, infer_type,
};
