//! Models module
//!
//! Defines the typed table the engine operates on: semantic column types,
//! columns, row records and the table itself.

pub mod column;
pub mod enums;
pub mod table;

pub use column::Column;
pub use enums::Type;
pub use table::{Row, Table, TableError};
