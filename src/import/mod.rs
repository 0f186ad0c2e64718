//! Table import
//!
//! Builds typed [`Table`](crate::models::Table)s from raw input:
//! - Delimited text (CSV and friends), header line first
//! - Pre-parsed row records (e.g. rows decoded from JSON)
//!
//! Every column is typed by the [`TypeInferencer`](crate::inference::TypeInferencer)
//! and duplicate header names are resolved deterministically.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vizspec_sdk::import::{ImportConfig, TableBuilder};
//!
//! let builder = TableBuilder::with_config(ImportConfig::upload_preview());
//! let table = builder.build_from_delimited_text("region,sales\nnorth,10\nsouth,12")?;
//! assert_eq!(table.row_count(), 2);
//! ```

mod builder;
mod config;
mod error;
mod headers;

pub use builder::{TableBuilder, build_from_delimited_text, build_from_rows};
pub use config::{ImportConfig, UPLOAD_PREVIEW_ROWS};
pub use error::{ImportError, ImportResult};
pub use headers::dedupe_column_names;
