mod args;
mod entry;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use confdata_core::BatchConfig;
use confdata_observe::{
    LoggerConfig, LoggerFormat, LoggerLevel, LoggerTimeZone, init_local_offset, init_logger,
};

use crate::args::{Cli, ReportFormat};
use crate::entry::{RawEntry, read_entries};
use crate::report::Report;

fn main() -> ExitCode {
    // Log timestamp offset detection only works before any thread exists.
    init_local_offset();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(true)` when every entry is valid.
fn run(cli: Cli) -> Result<bool> {
    let logger = LoggerConfig {
        format: cli.log_format.parse::<LoggerFormat>()?,
        level: LoggerLevel::new(cli.log_level.as_str())?,
        tz: LoggerTimeZone::Local,
        ..Default::default()
    };
    init_logger(&logger)?;

    let mut entries = cli
        .entries
        .iter()
        .map(|arg| RawEntry::parse(arg))
        .collect::<Result<Vec<_>>>()?;
    if let Some(path) = &cli.input {
        entries.extend(read_entries(path)?);
    }
    if entries.is_empty() {
        anyhow::bail!("no entries given (pass KEY:TYPE=VALUE arguments or --input FILE)");
    }

    let batch = match cli.max_concurrency {
        Some(n) => BatchConfig::with_max_concurrency(n),
        None => BatchConfig::default(),
    };
    let anchor = cli.convert.then_some(cli.anchor);
    debug!(entries = entries.len(), limit = batch.effective_concurrency(), "checking entries");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(Report::build(entries, &batch, anchor))?;

    match cli.format {
        ReportFormat::Text => print!("{}", report.render_text()),
        ReportFormat::Json => println!("{}", report.render_json()?),
    }

    let clean = report.is_clean();
    info!(clean, "check finished");
    Ok(clean)
}
