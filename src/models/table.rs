//! Table model

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use super::column::Column;

/// A row record: column name -> raw cell value, in column order
pub type Row = Map<String, Value>;

/// Violations of the table invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Two columns share a name
    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// A row's keys differ from the column names
    #[error("Row {row} keys do not match the table columns: {details}")]
    RowKeyMismatch { row: usize, details: String },

    /// A column's values are not aligned with the rows
    #[error("Column '{column}' has {values} values but the table has {rows} rows")]
    MisalignedColumn {
        column: String,
        values: usize,
        rows: usize,
    },

    /// A column value differs from the row record it belongs to
    #[error("Column '{column}' value at row {row} differs from the row record")]
    ValueMismatch { column: String, row: usize },

    /// A serialized id does not match the table content
    #[error("Table id {found} does not match its content (expected {expected})")]
    IdMismatch { expected: Uuid, found: Uuid },
}

/// An immutable, typed collection of named columns and aligned rows
///
/// Every row has exactly the keys `columns.map(name)`, in column order. Tables
/// are never mutated after construction; a new dataset produces a new table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "RawTable")]
pub struct Table {
    id: Uuid,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

/// Serialized table shape, checked through [`Table::try_new`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTable {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    columns: Vec<Column>,
    #[serde(default)]
    rows: Vec<Row>,
}

impl TryFrom<RawTable> for Table {
    type Error = TableError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        let table = Table::try_new(raw.columns, raw.rows)?;
        match raw.id {
            Some(found) if found != table.id => Err(TableError::IdMismatch {
                expected: table.id,
                found,
            }),
            _ => Ok(table),
        }
    }
}

impl Table {
    /// Build a table from columns and rows, checking the invariants
    ///
    /// Row keys are reordered to follow the column order.
    pub fn try_new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(TableError::DuplicateColumn(column.name.clone()));
            }
        }

        let mut ordered_rows = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TableError::RowKeyMismatch {
                    row: index,
                    details: format!("expected {} keys, found {}", columns.len(), row.len()),
                });
            }
            let mut ordered = Row::new();
            for column in &columns {
                let value = row.get(&column.name).ok_or_else(|| TableError::RowKeyMismatch {
                    row: index,
                    details: format!("missing key '{}'", column.name),
                })?;
                ordered.insert(column.name.clone(), value.clone());
            }
            ordered_rows.push(ordered);
        }

        for column in &columns {
            if column.values.len() != ordered_rows.len() {
                return Err(TableError::MisalignedColumn {
                    column: column.name.clone(),
                    values: column.values.len(),
                    rows: ordered_rows.len(),
                });
            }
            for (index, (value, row)) in column.values.iter().zip(&ordered_rows).enumerate() {
                if row.get(&column.name) != Some(value) {
                    return Err(TableError::ValueMismatch {
                        column: column.name.clone(),
                        row: index,
                    });
                }
            }
        }

        let id = Self::generate_id(&columns, &ordered_rows);
        Ok(Self {
            id,
            columns,
            rows: ordered_rows,
        })
    }

    /// An empty table (no columns, no rows)
    pub fn empty() -> Self {
        Self {
            id: Self::generate_id(&[], &[]),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Deterministic identity derived from the table content
    ///
    /// Two tables with the same column names and rows share the same id, so the
    /// id can key a memoization cache.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a column by exact name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in canonical display order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Generate a deterministic UUID v5 from column names and rows
    fn generate_id(columns: &[Column], rows: &[Row]) -> Uuid {
        let mut key = String::new();
        for column in columns {
            key.push_str(&column.name);
            key.push('\u{1f}');
        }
        key.push('\u{1e}');
        for row in rows {
            for value in row.values() {
                key.push_str(&value.to_string());
                key.push('\u{1f}');
            }
            key.push('\u{1e}');
        }
        Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes())
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Type;
    use serde_json::json;

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_try_new_reorders_row_keys() {
        let columns = vec![
            Column::new("a", Type::Number, vec![json!("1")]),
            Column::new("b", Type::String, vec![json!("x")]),
        ];
        let rows = vec![row(&[("b", json!("x")), ("a", json!("1"))])];
        let table = Table::try_new(columns, rows).unwrap();
        let keys: Vec<&String> = table.rows()[0].keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_try_new_rejects_duplicate_columns() {
        let columns = vec![
            Column::new("a", Type::Number, vec![]),
            Column::new("a", Type::Number, vec![]),
        ];
        let err = Table::try_new(columns, vec![]).unwrap_err();
        assert_eq!(err, TableError::DuplicateColumn("a".to_string()));
    }

    #[test]
    fn test_try_new_rejects_missing_key() {
        let columns = vec![Column::new("a", Type::Number, vec![json!(1)])];
        let rows = vec![row(&[("b", json!(1))])];
        assert!(matches!(
            Table::try_new(columns, rows),
            Err(TableError::RowKeyMismatch { row: 0, .. })
        ));
    }

    #[test]
    fn test_try_new_rejects_misaligned_values() {
        let columns = vec![Column::new("a", Type::Number, vec![])];
        let rows = vec![row(&[("a", json!(1))])];
        assert!(matches!(
            Table::try_new(columns, rows),
            Err(TableError::MisalignedColumn { .. })
        ));
    }

    #[test]
    fn test_id_is_content_derived() {
        let make = || {
            Table::try_new(
                vec![Column::new("a", Type::Number, vec![json!(1)])],
                vec![row(&[("a", json!(1))])],
            )
            .unwrap()
        };
        assert_eq!(make().id(), make().id());
        assert_ne!(make().id(), Table::empty().id());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let table = Table::try_new(
            vec![Column::new("a", Type::Number, vec![json!("1")])],
            vec![row(&[("a", json!("1"))])],
        )
        .unwrap();
        let text = serde_json::to_string(&table).unwrap();
        let parsed: Table = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_deserialize_rejects_broken_invariants() {
        let duplicate = json!({
            "columns": [
                {"name": "a", "type": "number", "values": [1]},
                {"name": "a", "type": "number", "values": [1]}
            ],
            "rows": [{"zzz": 1}]
        });
        let err = serde_json::from_value::<Table>(duplicate).unwrap_err();
        assert!(err.to_string().contains("Duplicate column name 'a'"));

        let stray_key = json!({
            "columns": [{"name": "a", "type": "number", "values": [1]}],
            "rows": [{"zzz": 1}]
        });
        assert!(serde_json::from_value::<Table>(stray_key).is_err());
    }

    #[test]
    fn test_deserialize_rejects_forged_id() {
        let forged = json!({
            "id": Uuid::nil(),
            "columns": [{"name": "a", "type": "number", "values": [1]}],
            "rows": [{"a": 1}]
        });
        let err = serde_json::from_value::<Table>(forged).unwrap_err();
        assert!(err.to_string().contains("does not match its content"));

        let without_id = json!({
            "columns": [{"name": "a", "type": "number", "values": [1]}],
            "rows": [{"a": 1}]
        });
        let table: Table = serde_json::from_value(without_id).unwrap();
        assert_eq!(table.row_count(), 1);
    }
}
