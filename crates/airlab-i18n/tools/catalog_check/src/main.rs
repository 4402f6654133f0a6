#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]
//! CLI entrypoint for the catalog check tool.
//!
//! # Design
//! Delegates to the library implementation, surfaces errors via `anyhow`, and
//! exits with status 1 when the audit finds issues.

use std::io;
use std::process::ExitCode;

use airlab_telemetry::{LogFormat, LoggingConfig, init_logging};
use anyhow::{Context, Result};
use catalog_check::Cli;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig {
        level: &cli.log_level,
        format: LogFormat::from_name(&cli.log_format),
    })
    .context("failed to initialise logging")?;

    let mut stdout = io::stdout().lock();
    let report = catalog_check::run(&cli, &mut stdout).context("catalog check failed")?;
    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
