//! Output formatting for CLI

use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::CliError;
use vizspec_sdk::charts::ChartTemplate;
use vizspec_sdk::pipeline::RenderableSeries;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Table,
    Json,
    Yaml,
}

/// Column summary printed by `infer`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub confidence: f64,
    pub null_count: usize,
    pub sample_values: Vec<serde_json::Value>,
}

/// Serialize a value as JSON or YAML
pub fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| CliError::Serialization(e.to_string()))
        }
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(value)
            .map_err(|e| CliError::Serialization(e.to_string())),
    }
}

/// Format inferred columns as text
pub fn format_columns(columns: &[ColumnSummary], rows: usize) -> String {
    let width = columns.iter().map(|c| c.name.len()).max().unwrap_or(4).max(4);
    let mut output = String::new();
    output.push_str(&format!("{} rows, {} columns\n\n", rows, columns.len()));
    output.push_str(&format!(
        "{:<width$}  {:<8}  {:>10}  {:>5}  Samples\n",
        "Name", "Type", "Confidence", "Nulls"
    ));
    output.push_str(&format!("{}\n", "-".repeat(width + 40)));
    for column in columns {
        let samples: Vec<String> = column.sample_values.iter().map(display_value).collect();
        output.push_str(&format!(
            "{:<width$}  {:<8}  {:>10.1}  {:>5}  {}\n",
            column.name,
            column.data_type,
            column.confidence,
            column.null_count,
            samples.join(", ")
        ));
    }
    output
}

/// Format the template catalog as text
pub fn format_templates(templates: &[ChartTemplate]) -> String {
    let mut output = String::new();
    output.push_str("Chart Templates\n");
    output.push_str(&format!("{}\n", "=".repeat(50)));
    for template in templates {
        output.push_str(&format!(
            "\n{} ({})\n  {}\n",
            template.name, template.chart_type, template.description
        ));
        let channels: Vec<&str> = template
            .supported_channels
            .iter()
            .map(|role| role.as_str())
            .collect();
        output.push_str(&format!("  Channels: {}\n", channels.join(", ")));
        for recommendation in template.recommended_data_types {
            let types: Vec<&str> = recommendation.types.iter().map(|t| t.as_str()).collect();
            output.push_str(&format!(
                "  Recommended {}: {}\n",
                recommendation.role,
                types.join(" | ")
            ));
        }
    }
    output
}

/// Format a series as text, one row per line
pub fn format_series(series: &RenderableSeries) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Chart: {}{}\n",
        series.chart_type,
        if series.ready { "" } else { " (not ready: bind x and y)" }
    ));
    for notice in &series.notices {
        output.push_str(&format!("Notice: {notice}\n"));
    }
    for warning in &series.warnings {
        output.push_str(&format!("Warning: {warning}\n"));
    }
    output.push('\n');
    for row in &series.rows {
        output.push_str(&serde_json::Value::Object(row.clone()).to_string());
        output.push('\n');
    }
    output
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Write output to a file, or to stdout when no path is given
pub fn write_output(output: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(path) => {
            std::fs::write(path, output)
                .map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string()))?;
            eprintln!("Output written to: {}", path.display());
        }
        None => println!("{}", output.trim_end()),
    }
    Ok(())
}
