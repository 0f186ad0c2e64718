//! Advise command implementation

use std::path::PathBuf;

use super::{DataArgs, PolicyArgs, load_input};
use crate::error::CliError;
use crate::output::{self, OutputFormat};
use vizspec_sdk::encoding::{AdvisoryProposal, validate_proposal};
use vizspec_sdk::pipeline::compute;

/// Arguments for the advise command
#[derive(Debug, Clone)]
pub struct AdviseArgs {
    pub data: DataArgs,
    pub policy: PolicyArgs,
    /// Proposal JSON file
    pub proposal: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Handle the advise command
///
/// Validates an advisory proposal against the data and, when accepted,
/// computes the series for it.
pub fn handle_advise(args: &AdviseArgs) -> Result<(), CliError> {
    if args.proposal == "-" && args.data.input == "-" {
        return Err(CliError::InvalidArgument(
            "Data and proposal cannot both be read from stdin".to_string(),
        ));
    }

    let table = args.data.load_table()?;
    let proposal = AdvisoryProposal::from_json(&load_input(&args.proposal)?)?;
    let options = args.policy.options()?;

    let accepted = validate_proposal(&table, &proposal)?;
    eprintln!("Accepted proposal for a {} chart", accepted.chart_type);
    for warning in &accepted.warnings {
        eprintln!("Warning: {}", warning);
    }

    let series = compute(&table, &accepted.encoding, accepted.template, &options)?;
    for notice in &series.notices {
        eprintln!("Notice: {}", notice);
    }

    let text = match args.format {
        OutputFormat::Table => output::format_series(&series),
        format => output::serialize(&series, format)?,
    };
    output::write_output(&text, args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use vizspec_sdk::encoding::AdvisoryError;
    use vizspec_sdk::pipeline::PipelineError;

    fn file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn args(data: &NamedTempFile, proposal: &NamedTempFile, output: PathBuf) -> AdviseArgs {
        AdviseArgs {
            data: DataArgs {
                input: data.path().to_string_lossy().to_string(),
                delimiter: ',',
                max_rows: None,
            },
            policy: PolicyArgs::default(),
            proposal: proposal.path().to_string_lossy().to_string(),
            format: OutputFormat::Json,
            output: Some(output),
        }
    }

    #[test]
    fn test_accepted_proposal_writes_series() {
        let data = file("region,sales\nnorth,10\nsouth,12\nnorth,5\n");
        let proposal = file(
            r#"{"chartType": "pie", "encoding": {"x": "region", "y": {"field": "sales", "aggregate": "sum"}}}"#,
        );
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("series.json");

        handle_advise(&args(&data, &proposal, out.clone())).unwrap();

        let series: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(series["chartType"], "pie");
        assert_eq!(series["rows"][0]["name"], "north");
        assert_eq!(series["rows"][0]["value"], 15.0);
    }

    #[test]
    fn test_rejected_proposal() {
        let data = file("region,sales\nnorth,10\n");
        let proposal = file(r#"{"chartType": "bar", "encoding": {"x": "country"}}"#);
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("series.json");

        let err = handle_advise(&args(&data, &proposal, out.clone())).unwrap_err();
        assert!(matches!(
            err,
            CliError::Pipeline(PipelineError::Advisory(AdvisoryError::Rejected(_)))
        ));
        assert!(!out.exists());
    }
}
