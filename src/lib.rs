//! vizspec SDK - chart encoding and type-inference engine
//!
//! Provides unified interfaces for:
//! - Column type inference over raw, untyped values
//! - Building typed tables from delimited text or row records
//! - The chart template catalog and per-template row transforms
//! - Resolving channel encodings (and advisory proposals) against a table
//! - The cardinality policy for categorical charts
//! - Computing renderer-ready series
//!
//! Every operation is synchronous and pure; callers own all state.

pub mod aggregate;
pub mod cardinality;
pub mod charts;
pub mod encoding;
pub mod import;
pub mod inference;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use cardinality::{CardinalityPolicy, PolicyOptions, PolicyOutcome};
pub use charts::{
    Aggregate, ChannelRole, ChartChannel, ChartConfig, ChartEncoding, ChartError, ChartTemplate,
    ChartType,
};
pub use encoding::{AdvisoryProposal, EncodingError, EncodingResolver};
pub use import::{ImportConfig, ImportError, TableBuilder};
pub use inference::{InferenceConfig, TypeInference, TypeInferencer};
pub use pipeline::{PipelineError, RenderableSeries, compute, compute_named};

// Re-export models
pub use models::{Column, Row, Table, TableError, Type};
