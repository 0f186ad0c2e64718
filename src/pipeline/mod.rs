//! Renderable series pipeline
//!
//! An explicit, synchronous computation from a table, an encoding, a template
//! and policy options to a renderer-ready series. Nothing is recomputed
//! implicitly; callers decide when to run it and may memoize on
//! `(Table::id, encoding, template, options)`.
//!
//! # Example
//!
//! ```rust,ignore
//! use vizspec_sdk::cardinality::PolicyOptions;
//! use vizspec_sdk::pipeline::compute_named;
//!
//! let series = compute_named(&table, &encoding, "pie", &PolicyOptions::default())?;
//! if let Some(fallback) = series.fallback {
//!     println!("{}", series.notices.join("\n"));
//! }
//! ```
//!
//! # Steps
//!
//! 1. **Validate**: every bound field must name a column
//! 2. **Aggregate**: group and reduce channels that declare an aggregate
//! 3. **Post-process**: project rows for the template
//! 4. **Policy**: sort, bucket or fall back for categorical templates

mod compute;
mod error;

pub use compute::{RenderableSeries, compute, compute_named};
pub use error::{PipelineError, PipelineResult};
