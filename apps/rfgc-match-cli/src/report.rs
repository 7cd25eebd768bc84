use crate::error::CliResult;
use clap::ValueEnum;
use rfgc_match_csvs::{read_registration_csv, write_refund_csv};
use rfgc_match_report::{build_report, render_text, ReportConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled summary lines followed by the roster lists
    Text,
    /// The full report as pretty-printed JSON
    Json,
}

/// Compute the match report for one registration sheet and print it
pub fn execute(
    registrations_csv_in: PathBuf,
    config: ReportConfig,
    format: OutputFormat,
    refunds_csv_out: Option<PathBuf>,
) -> CliResult<()> {
    info!(path = %registrations_csv_in.display(), "Reading registrations");
    let sheet = read_registration_csv(&registrations_csv_in)?;

    let report = build_report(&sheet, &config)?;

    match format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(path) = refunds_csv_out {
        write_refund_csv(&path, &report.refunds)?;
        info!(
            path = %path.display(),
            refunds = report.refunds.len(),
            "Wrote refund list"
        );
    }

    Ok(())
}
