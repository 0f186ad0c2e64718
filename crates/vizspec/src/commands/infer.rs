//! Infer command implementation

use super::DataArgs;
use crate::error::CliError;
use crate::output::{self, ColumnSummary, OutputFormat};
use vizspec_sdk::models::Table;

/// Arguments for the infer command
#[derive(Debug, Clone)]
pub struct InferArgs {
    pub data: DataArgs,
    pub format: OutputFormat,
}

/// Handle the infer command
pub fn handle_infer(args: &InferArgs) -> Result<(), CliError> {
    let table = args.data.load_table()?;
    let columns = summarize(&table);

    let text = match args.format {
        OutputFormat::Table => output::format_columns(&columns, table.row_count()),
        format => output::serialize(&columns, format)?,
    };
    output::write_output(&text, None)
}

/// Summarize each column with its type, confidence and sample values
pub(crate) fn summarize(table: &Table) -> Vec<ColumnSummary> {
    table
        .columns()
        .iter()
        .map(|column| ColumnSummary {
            name: column.name.clone(),
            data_type: column.data_type.to_string(),
            confidence: column.confidence,
            null_count: column.null_count(),
            sample_values: column.sample_values.clone(),
        })
        .collect()
}
