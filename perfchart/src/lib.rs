//! # perfchart - CPU vs GPU Benchmark Charts
//!
//! perfchart reads the performance log written by the Voronoi diagram
//! benchmark and draws one line chart comparing CPU and GPU run times
//! across site counts.
//!
//! ## Pipeline
//!
//! ```text
//! performance.txt ──► perf_log (parse) ──► analysis (speedup)
//!                                │                 │
//!                                ▼                 ▼
//!                     tui (chart) / report (--headless) / export (--export)
//! ```
//!
//! ## Log Format
//!
//! One run per line, whitespace separated, no header:
//!
//! ```text
//! 1 2 0.031      CPU, 2 sites, 0.031 s
//! 2 2 0.004      GPU, 2 sites, 0.004 s
//! ```
//!
//! Rows with any other tag are ignored. A missing column or a non-numeric
//! value fails the whole run with the offending line number.
//!
//! ## Module Structure
//!
//! - [`perf_log`]: Parse the log into CPU and GPU [`perf_log::Series`]
//! - [`analysis`]: Per-size speedup and series summaries
//! - [`tui`]: Interactive terminal chart
//! - [`report`]: Plain-text output for `--headless`
//! - [`export`]: JSON output for `--export`
//! - [`cli`]: Command-line argument parsing
//! - [`domain`]: Core types (`DeviceKind`, `SiteCount`, `PerfRecord`) and errors
//!
//! ## Typical Usage
//!
//! ```bash
//! # Chart the default log
//! perfchart
//!
//! # CI: print the speedup table and keep the data
//! perfchart Release/performance.txt --headless --export perf.json
//! ```

pub mod analysis;
pub mod cli;
pub mod domain;
pub mod export;
pub mod perf_log;
pub mod report;
pub mod tui;

/// Chart title
pub const CHART_TITLE: &str = "Number of Sites vs Time (GPU and CPU)";
/// X axis label
pub const X_AXIS_LABEL: &str = "Number of Sites";
/// Y axis label
pub const Y_AXIS_LABEL: &str = "Time (seconds)";
