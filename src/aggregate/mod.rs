//! Aggregation of rows by encoding
//!
//! Channels may declare an aggregate (`sum`, `average`, `count`, `min`,
//! `max`). When any bound channel does, rows are grouped by the fields of all
//! unaggregated bound channels and each aggregated field is reduced per
//! group. Post-processing stays row-level and runs on the grouped rows with
//! the encoding returned alongside them.
//!
//! ```rust,ignore
//! let grouped = aggregate(table.rows(), &encoding);
//! let rows = post_process(ChartType::Bar, &grouped.rows, &grouped.encoding);
//! ```

mod reducer;

pub use reducer::{Aggregation, aggregate, aggregate_rows};
