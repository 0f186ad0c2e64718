//! Render command implementation

use std::path::PathBuf;

use super::{DataArgs, PolicyArgs};
use crate::error::CliError;
use crate::output::{self, OutputFormat};
use vizspec_sdk::charts::{
    Aggregate, ChannelAssignment, ChannelRole, ChartEncoding, ChartTemplate, get,
};
use vizspec_sdk::encoding::{EncodingError, EncodingResolver};
use vizspec_sdk::models::Table;
use vizspec_sdk::pipeline::compute;

/// Arguments for the render command
#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub data: DataArgs,
    pub policy: PolicyArgs,
    pub chart: String,
    pub x: Option<String>,
    pub y: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub tooltip: Vec<String>,
    /// `ROLE=AGGREGATE` pairs, e.g. `y=sum`
    pub aggregate: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Handle the render command
pub fn handle_render(args: &RenderArgs) -> Result<(), CliError> {
    let template = get(&args.chart)?;
    let table = args.data.load_table()?;
    let options = args.policy.options()?;

    let encoding = build_encoding(&table, template, args)?;
    eprintln!(
        "Computing {} series with {} bound channel(s)",
        template.name,
        encoding.bound_channels().len()
    );

    let series = compute(&table, &encoding, template, &options)?;
    for notice in &series.notices {
        eprintln!("Notice: {}", notice);
    }
    for warning in &series.warnings {
        eprintln!("Warning: {}", warning);
    }

    let text = match args.format {
        OutputFormat::Table => output::format_series(&series),
        format => output::serialize(&series, format)?,
    };
    output::write_output(&text, args.output.as_deref())
}

/// Bind the requested fields to a fresh encoding for the template
pub(crate) fn build_encoding(
    table: &Table,
    template: &ChartTemplate,
    args: &RenderArgs,
) -> Result<ChartEncoding, CliError> {
    let resolver = EncodingResolver::new();
    let mut encoding = ChartEncoding::new();

    let singles = [
        (ChannelRole::X, &args.x),
        (ChannelRole::Y, &args.y),
        (ChannelRole::Color, &args.color),
        (ChannelRole::Size, &args.size),
    ];
    for (role, field) in singles {
        if let Some(field) = field {
            encoding = resolver.assign(table, template, &encoding, role, field)?;
        }
    }

    if !args.tooltip.is_empty() {
        if !template.supports(ChannelRole::Tooltip) {
            return Err(EncodingError::UnsupportedChannel {
                role: ChannelRole::Tooltip,
                chart_type: template.chart_type,
            }
            .into());
        }
        let mut channels = Vec::with_capacity(args.tooltip.len());
        for field in &args.tooltip {
            if let ChannelAssignment::Tooltip(resolved) =
                resolver.resolve(table, ChannelRole::Tooltip, field)?
            {
                channels.extend(resolved);
            }
        }
        encoding = encoding.apply(ChannelAssignment::Tooltip(channels));
    }

    for pair in &args.aggregate {
        let (role, aggregate) = parse_aggregate(pair)?;
        encoding = encoding.with_aggregate(role, Some(aggregate));
    }
    Ok(encoding)
}

/// Parse a `ROLE=AGGREGATE` pair
pub(crate) fn parse_aggregate(pair: &str) -> Result<(ChannelRole, Aggregate), CliError> {
    let (role, aggregate) = pair.split_once('=').ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "Expected ROLE=AGGREGATE (e.g. y=sum), got '{}'",
            pair
        ))
    })?;
    let role: ChannelRole = role
        .trim()
        .parse()
        .map_err(|_| EncodingError::UnknownRole(role.trim().to_string()))?;
    let aggregate: Aggregate = aggregate
        .trim()
        .parse()
        .map_err(|_| EncodingError::UnknownAggregate(aggregate.trim().to_string()))?;
    Ok((role, aggregate))
}
