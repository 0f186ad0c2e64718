//! Chart templates
//!
//! The fixed catalog of chart templates (scatter, bar, line, pie, area), the
//! channel and encoding value types bound to them, and the per-template
//! row transforms that turn table rows into renderer-ready records.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vizspec_sdk::charts::{self, ChartType};
//!
//! let template = charts::get("line")?;
//! let rows = template.post_process(table.rows(), &encoding);
//! ```

mod channels;
mod config;
mod error;
mod postprocess;
mod templates;
mod types;

pub use channels::{ChannelAssignment, ChartChannel, ChartEncoding};
pub use config::{ChartConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH, Margin};
pub use error::{ChartError, ChartResult};
pub use postprocess::{SortKey, post_process};
pub use templates::{
    ChartTemplate, Recommendation, RecommendationWarning, all, check_recommendations, get, lookup,
};
pub use types::{Aggregate, ChannelRole, ChartType};
