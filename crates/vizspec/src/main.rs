//! vizspec command-line interface
//!
//! Infers column types for delimited data, lists the chart template catalog,
//! and computes renderer-ready series for an encoding or an advisory proposal.

mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::advise::{AdviseArgs, handle_advise};
use commands::infer::{InferArgs, handle_infer};
use commands::render::{RenderArgs, handle_render};
use commands::templates::handle_templates;
use commands::{DataArgs, PolicyArgs};
use error::CliError;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "vizspec")]
#[command(about = "Chart encoding and column type inference", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer column types of a delimited file
    Infer {
        #[command(flatten)]
        data: DataOpts,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// List the chart templates
    Templates {
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Compute a chart series from field bindings
    Render {
        #[command(flatten)]
        data: DataOpts,

        /// Chart type (scatter, bar, line, pie, area)
        #[arg(long)]
        chart: String,

        #[arg(long)]
        x: Option<String>,

        #[arg(long)]
        y: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        size: Option<String>,

        /// Tooltip field (repeatable)
        #[arg(long)]
        tooltip: Vec<String>,

        /// Aggregate for a channel as ROLE=AGGREGATE, e.g. y=sum (repeatable)
        #[arg(long)]
        aggregate: Vec<String>,

        #[command(flatten)]
        policy: PolicyOpts,

        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write the series to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate an advisory proposal and compute its series
    Advise {
        #[command(flatten)]
        data: DataOpts,

        /// Proposal JSON file ({"chartType": ..., "encoding": {...}})
        #[arg(long)]
        proposal: String,

        #[command(flatten)]
        policy: PolicyOpts,

        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write the series to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct DataOpts {
    /// Input file path (use '-' for stdin)
    input: String,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Read at most this many data rows
    #[arg(long)]
    max_rows: Option<usize>,
}

impl From<DataOpts> for DataArgs {
    fn from(opts: DataOpts) -> Self {
        DataArgs {
            input: opts.input,
            delimiter: opts.delimiter,
            max_rows: opts.max_rows,
        }
    }
}

#[derive(Args)]
struct PolicyOpts {
    /// TOML file with cardinality policy options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep only the N largest categories
    #[arg(long)]
    top_n: Option<usize>,

    /// Switch to the fallback chart when a pie has too many categories
    #[arg(long)]
    auto_fallback: bool,
}

impl From<PolicyOpts> for PolicyArgs {
    fn from(opts: PolicyOpts) -> Self {
        PolicyArgs {
            config: opts.config,
            top_n: opts.top_n,
            auto_fallback: opts.auto_fallback,
        }
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Infer { data, format } => handle_infer(&InferArgs {
            data: data.into(),
            format,
        }),
        Commands::Templates { format } => handle_templates(format),
        Commands::Render {
            data,
            chart,
            x,
            y,
            color,
            size,
            tooltip,
            aggregate,
            policy,
            format,
            output,
        } => handle_render(&RenderArgs {
            data: data.into(),
            policy: policy.into(),
            chart,
            x,
            y,
            color,
            size,
            tooltip,
            aggregate,
            format,
            output,
        }),
        Commands::Advise {
            data,
            proposal,
            policy,
            format,
            output,
        } => handle_advise(&AdviseArgs {
            data: data.into(),
            policy: policy.into(),
            proposal,
            format,
            output,
        }),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("Warning: logging disabled: {err:#}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err.user_message());
            ExitCode::FAILURE
        }
    }
}
