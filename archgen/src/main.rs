//! archgen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::Context;
use archgen::observability::{self, LoggingConfig};
use archgen::Cli;
use clap::Parser;
use console::style;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = observability::init(&LoggingConfig::new(cli.verbose))
        .context("Failed to initialise logging")
    {
        eprintln!("{} {err:#}", style("warning:").yellow().bold());
    }

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("{} {err}", style("error:").red().bold());
            if err.is_usage() {
                println!("{}", archgen::cli::usage());
            }
            ExitCode::FAILURE
        }
    }
}
