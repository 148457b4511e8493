//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

use crate::perf_log::DEFAULT_LOG_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "perfchart",
    version,
    about = "Chart CPU vs GPU timings from a Voronoi benchmark log",
    after_help = "\
EXAMPLES:
    perfchart                                 Chart Release/performance.txt
    perfchart runs/performance2.txt           Chart another log
    perfchart --headless --export perf.json   Print a report and write JSON"
)]
pub struct Args {
    /// Performance log: one `<tag> <sites> <seconds>` row per run (tag 1 = CPU, 2 = GPU)
    #[arg(value_name = "LOG", default_value = DEFAULT_LOG_PATH)]
    pub log: PathBuf,

    /// Write the parsed series and speedup table as JSON
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Print a text report instead of opening the interactive chart
    #[arg(long)]
    pub headless: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
