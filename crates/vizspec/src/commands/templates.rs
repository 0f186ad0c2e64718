//! Templates command implementation

use crate::error::CliError;
use crate::output::{self, OutputFormat};
use vizspec_sdk::charts;

/// Handle the templates command
pub fn handle_templates(format: OutputFormat) -> Result<(), CliError> {
    let templates = charts::all();
    let text = match format {
        OutputFormat::Table => output::format_templates(templates),
        format => output::serialize(&templates, format)?,
    };
    output::write_output(&text, None)
}
