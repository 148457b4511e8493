//! # perfchart - Main Entry Point
//!
//! Supports two operational modes:
//! - **Interactive** (default): full-screen terminal chart
//! - **Headless** (`--headless`): text report on stdout, for CI or pipes
//!
//! `--export FILE` writes the parsed data as JSON in either mode.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter};

use perfchart::analysis::compare;
use perfchart::cli::Args;
use perfchart::export::JsonExporter;
use perfchart::perf_log::PerfLog;
use perfchart::{report, tui};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            EXIT_ERROR
        }
    });
}

fn run() -> Result<()> {
    // clap exits with status 2 on usage errors
    let args = Args::parse();

    let log = PerfLog::from_file(&args.log)
        .with_context(|| format!("Failed to read performance log {}", args.log.display()))?;
    info!("{} CPU rows, {} GPU rows", log.cpu.len(), log.gpu.len());

    let comparison = compare(&log);

    if let Some(ref export_path) = args.export {
        let file = File::create(export_path)
            .with_context(|| format!("Failed to create {}", export_path.display()))?;
        JsonExporter::new(&log, &comparison)
            .export(BufWriter::new(file))
            .context("Failed to export chart data")?;
        if !args.quiet {
            println!("saved: {}", export_path.display());
        }
    }

    if args.headless {
        if !args.quiet {
            report::write_report(io::stdout().lock(), &log, &comparison)
                .context("Failed to write report")?;
        }
        return Ok(());
    }

    let source = args.log.display().to_string();
    tui::run(&source, &log, &comparison).context("Terminal UI failed")?;

    Ok(())
}
