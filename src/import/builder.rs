//! Table construction from raw input

use serde_json::Value;
use tracing::{debug, info};

use super::config::ImportConfig;
use super::error::{ImportError, ImportResult};
use super::headers::dedupe_column_names;
use crate::inference::TypeInferencer;
use crate::models::{Column, Row, Table};

/// Builds typed tables from delimited text or pre-parsed row records
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    config: ImportConfig,
    inferencer: TypeInferencer,
}

impl TableBuilder {
    /// Create a builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with custom configuration
    pub fn with_config(config: ImportConfig) -> Self {
        let inferencer = TypeInferencer::with_config(config.inference.clone());
        Self { config, inferencer }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Build a table from delimited text
    ///
    /// The first non-blank line is the header; every following line is a data
    /// row split positionally. Missing trailing cells become null and surplus
    /// cells are dropped. Cells are kept as raw strings.
    pub fn build_from_delimited_text(&self, text: &str) -> ImportResult<Table> {
        let records = self.read_records(text)?;
        if records.len() < 2 {
            return Err(ImportError::TableFormat {
                records: records.len(),
            });
        }

        let mut records = records.into_iter();
        let header = records.next().unwrap_or_default();
        let names = dedupe_column_names(&header);

        let mut data: Vec<Vec<String>> = records.collect();
        if let Some(max_rows) = self.config.max_rows {
            data.truncate(max_rows);
        }

        let rows: Vec<Vec<Value>> = data
            .into_iter()
            .map(|cells| {
                let mut cells = cells.into_iter();
                names
                    .iter()
                    .map(|_| cells.next().map(Value::String).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        self.assemble(names, rows)
    }

    /// Build a table from pre-parsed row records
    ///
    /// Column names are the union of the row keys in order of first appearance;
    /// a row without a key gets null for it. No rows gives a valid empty table.
    pub fn build_from_rows(&self, rows: &[Row]) -> ImportResult<Table> {
        let rows = match self.config.max_rows {
            Some(max_rows) if rows.len() > max_rows => &rows[..max_rows],
            _ => rows,
        };

        if rows.is_empty() {
            info!(rows = 0, columns = 0, "Built empty table");
            return Ok(Table::empty());
        }

        let mut names: Vec<String> = Vec::new();
        for row in rows {
            for key in row.keys() {
                if !names.contains(key) {
                    names.push(key.clone());
                }
            }
        }

        let cells: Vec<Vec<Value>> = rows
            .iter()
            .map(|row| {
                names
                    .iter()
                    .map(|name| row.get(name).map(scalar_cell).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        self.assemble(names, cells)
    }

    fn read_records(&self, text: &str) -> ImportResult<Vec<Vec<String>>> {
        if !self.config.delimiter.is_ascii() {
            return Err(ImportError::Csv(format!(
                "delimiter '{}' is not an ASCII character",
                self.config.delimiter
            )));
        }

        let trim = if self.config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.config.delimiter as u8)
            .trim(trim)
            .from_reader(text.trim_matches(['\r', '\n']).as_bytes());

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.len() == 1 && record[0].trim().is_empty() {
                continue;
            }
            records.push(record.iter().map(str::to_string).collect());
        }
        Ok(records)
    }

    /// Infer column types and assemble the table
    fn assemble(&self, names: Vec<String>, rows: Vec<Vec<Value>>) -> ImportResult<Table> {
        let mut columns = Vec::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            let values: Vec<Value> = rows.iter().map(|row| row[index].clone()).collect();
            let inference = self.inferencer.infer(&values);
            debug!(
                column = %name,
                data_type = %inference.data_type,
                confidence = inference.confidence,
                "Inferred column type"
            );
            columns.push(
                Column::new(name.clone(), inference.data_type, values)
                    .with_confidence(inference.confidence)
                    .with_sample_values(inference.sample_values),
            );
        }

        let records: Vec<Row> = rows
            .into_iter()
            .map(|cells| names.iter().cloned().zip(cells).collect())
            .collect();

        let table = Table::try_new(columns, records)?;
        info!(
            rows = table.row_count(),
            columns = table.column_count(),
            "Built table"
        );
        Ok(table)
    }
}

/// Arrays and objects are stored as their JSON text
fn scalar_cell(value: &Value) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) => Value::String(value.to_string()),
        other => other.clone(),
    }
}

/// Build a table from delimited text with the default configuration
pub fn build_from_delimited_text(text: &str) -> ImportResult<Table> {
    TableBuilder::new().build_from_delimited_text(text)
}

/// Build a table from row records with the default configuration
pub fn build_from_rows(rows: &[Row]) -> ImportResult<Table> {
    TableBuilder::new().build_from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Type;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_single_line_is_format_error() {
        let err = build_from_delimited_text("a,b,c").unwrap_err();
        assert_eq!(err, ImportError::TableFormat { records: 1 });
    }

    #[test]
    fn test_empty_text_is_format_error() {
        let err = build_from_delimited_text("").unwrap_err();
        assert_eq!(err, ImportError::TableFormat { records: 0 });
    }

    #[test]
    fn test_header_and_blank_lines_is_format_error() {
        let err = build_from_delimited_text("a,b\n\n   \n").unwrap_err();
        assert!(matches!(err, ImportError::TableFormat { .. }));
    }

    #[test]
    fn test_header_plus_one_row() {
        let table = build_from_delimited_text("name,value\nalpha,3").unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_names(), vec!["name", "value"]);
        assert_eq!(table.column("value").unwrap().data_type, Type::Number);
        assert_eq!(table.rows()[0]["value"], json!("3"));
    }

    #[test]
    fn test_ragged_rows() {
        let table = build_from_delimited_text("a,b,c\n1,2\n4,5,6,7").unwrap();
        assert_eq!(table.rows()[0]["c"], Value::Null);
        assert_eq!(table.rows()[1]["c"], json!("6"));
        assert_eq!(table.rows()[1].len(), 3);
    }

    #[test]
    fn test_duplicate_headers() {
        let table = build_from_delimited_text("a,a,b,a\n1,2,3,4").unwrap();
        assert_eq!(table.column_names(), vec!["a", "a_1", "b", "a_2"]);
        assert_eq!(table.rows()[0]["a_2"], json!("4"));
    }

    #[test]
    fn test_quoted_fields_and_delimiter() {
        let builder = TableBuilder::with_config(ImportConfig::new().with_delimiter(';'));
        let table = builder
            .build_from_delimited_text("city;note\n\"Paris\";\"a;b\"")
            .unwrap();
        assert_eq!(table.rows()[0]["note"], json!("a;b"));
    }

    #[test]
    fn test_max_rows() {
        let builder = TableBuilder::with_config(ImportConfig::new().with_max_rows(Some(2)));
        let table = builder
            .build_from_delimited_text("n\n1\n2\n3\n4")
            .unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_trailing_empty_cell_is_kept() {
        let builder = TableBuilder::with_config(ImportConfig::new().with_delimiter('\t'));
        let table = builder.build_from_delimited_text("a\tb\n1\t\n").unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0]["b"], json!(""));

        let table = build_from_delimited_text("\n  \na,b\n1,\n\n").unwrap();
        assert_eq!(table.rows()[0]["b"], json!(""));
    }

    #[test]
    fn test_columns_keep_inference_samples() {
        let table = build_from_delimited_text("n,m\n,x\n1,y\n2,z").unwrap();
        let column = table.column("n").unwrap();
        assert_eq!(column.sample_values, vec![json!("1"), json!("2")]);
    }

    #[test]
    fn test_build_from_rows_union_of_keys() {
        let rows = vec![row(json!({"a": 1, "b": "x"})), row(json!({"c": true, "a": 2}))];
        let table = build_from_rows(&rows).unwrap();
        assert_eq!(table.column_names(), vec!["a", "b", "c"]);
        assert_eq!(table.rows()[1]["b"], Value::Null);
        assert_eq!(table.column("a").unwrap().data_type, Type::Number);
        assert_eq!(table.column("c").unwrap().data_type, Type::Boolean);
    }

    #[test]
    fn test_build_from_rows_empty() {
        let table = build_from_rows(&[]).unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_build_from_rows_stringifies_nested() {
        let rows = vec![row(json!({"tags": ["a", "b"]}))];
        let table = build_from_rows(&rows).unwrap();
        assert_eq!(table.rows()[0]["tags"], json!("[\"a\",\"b\"]"));
    }

    #[test]
    fn test_identity_is_stable() {
        let text = "x,y\n1,2\n3,4";
        let a = build_from_delimited_text(text).unwrap();
        let b = build_from_delimited_text(text).unwrap();
        assert_eq!(a.id(), b.id());
    }
}
