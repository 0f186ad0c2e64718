//! Cardinality policy for categorical charts
//!
//! Sorts pie rows by magnitude, buckets a long tail into a single "Other"
//! entry and signals a fallback chart type when there are too many
//! categories to read as slices.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vizspec_sdk::cardinality::{CardinalityPolicy, PolicyOptions};
//! use vizspec_sdk::charts::ChartType;
//!
//! let policy = CardinalityPolicy::new(PolicyOptions::default().with_top_n(5));
//! let outcome = policy.apply(ChartType::Pie, &rows);
//! if let Some(fallback) = outcome.fallback {
//!     println!("switch to {fallback}: {}", outcome.notice.unwrap_or_default());
//! }
//! ```

mod config;
#[cfg(feature = "config-file")]
mod error;
mod policy;

pub use config::PolicyOptions;
#[cfg(feature = "config-file")]
pub use error::PolicyConfigError;
pub use policy::{CardinalityPolicy, PolicyOutcome, apply_policy};
