//! CLI command implementations

pub mod advise;
pub mod infer;
pub mod render;
pub mod templates;

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CliError;
use vizspec_sdk::cardinality::PolicyOptions;
use vizspec_sdk::import::{ImportConfig, TableBuilder};
use vizspec_sdk::models::Table;

/// Load input content from file or stdin
pub(crate) fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Delimited-text options shared by every data-reading command
#[derive(Debug, Clone)]
pub struct DataArgs {
    /// Input file path, or "-" for stdin
    pub input: String,
    pub delimiter: char,
    pub max_rows: Option<usize>,
}

impl DataArgs {
    pub(crate) fn import_config(&self) -> ImportConfig {
        ImportConfig::new()
            .with_delimiter(self.delimiter)
            .with_max_rows(self.max_rows)
    }

    /// Read the input and build a typed table from it
    pub(crate) fn load_table(&self) -> Result<Table, CliError> {
        let content = load_input(&self.input)?;
        debug!(
            input = %self.source_name(),
            delimiter = %self.delimiter,
            bytes = content.len(),
            "Read delimited input"
        );
        eprintln!("Building table from {}", self.source_name());
        let table = TableBuilder::with_config(self.import_config()).build_from_delimited_text(&content)?;
        eprintln!(
            "Loaded {} row(s) and {} column(s)",
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }

    fn source_name(&self) -> &str {
        if self.input == "-" { "stdin" } else { &self.input }
    }
}

/// Cardinality policy overrides shared by `render` and `advise`
#[derive(Debug, Clone, Default)]
pub struct PolicyArgs {
    /// TOML file with policy options
    pub config: Option<PathBuf>,
    pub top_n: Option<usize>,
    pub auto_fallback: bool,
}

impl PolicyArgs {
    /// Resolve policy options: file first, then command-line overrides
    pub(crate) fn options(&self) -> Result<PolicyOptions, CliError> {
        let mut options = match &self.config {
            Some(path) => load_policy_file(path)?,
            None => PolicyOptions::default(),
        };
        if let Some(top_n) = self.top_n {
            options = options.with_top_n(top_n);
        }
        if self.auto_fallback {
            options = options.with_auto_fallback(true);
        }
        Ok(options)
    }
}

fn load_policy_file(path: &Path) -> Result<PolicyOptions, CliError> {
    let options = PolicyOptions::from_toml_file(path)?;
    eprintln!("Loaded policy options from {}", path.display());
    Ok(options)
}
