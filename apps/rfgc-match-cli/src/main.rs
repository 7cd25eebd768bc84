use clap::{ArgAction, Parser};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod error;
mod report;

use error::CliResult;
use report::OutputFormat;

#[derive(Parser)]
#[command(name = "rfgc-match")]
#[command(about = "Match cost calculator - revenue, discounts and volunteer rosters from a registration export")]
#[command(version)]
struct Cli {
    /// Registration CSV exported from the match registration site
    #[arg(short, long)]
    filepath: PathBuf,

    /// Match fee charged to each paid registrant [default: 30]
    #[arg(long)]
    match_fee: Option<String>,

    /// Whether the USPSA classifier fee applies [default: true]
    #[arg(long, action = ArgAction::Set)]
    classifier_fee: Option<bool>,

    /// YAML fee schedule; command-line flags take precedence over it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the refund list to this CSV file
    #[arg(long)]
    refunds_out: Option<PathBuf>,
}

/// Logs go to stderr so stdout carries only the report.
/// Use RUST_LOG to change the level (e.g. RUST_LOG=debug).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    let config = config::resolve_report_config(
        cli.config.as_deref(),
        cli.match_fee.as_deref(),
        cli.classifier_fee,
    )?;

    report::execute(cli.filepath, config, cli.format, cli.refunds_out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
