//! Plain-text report for `--headless` runs

use std::io::{self, Write};

use crate::analysis::{Comparison, SeriesSummary};
use crate::perf_log::PerfLog;

fn write_summary<W: Write>(w: &mut W, summary: &SeriesSummary) -> io::Result<()> {
    let max_sites = summary.max_sites.map_or_else(|| "-".to_string(), |s| s.to_string());
    writeln!(
        w,
        "{:<4} {:>5} runs  max sites {:>6}  total {:.4}s",
        summary.device.label(),
        summary.runs,
        max_sites,
        summary.total_secs
    )
}

/// Write every record in log form, the series summaries and the per-size
/// comparison table.
///
/// # Errors
/// Propagates write failures.
pub fn write_report<W: Write>(mut w: W, log: &PerfLog, comparison: &Comparison) -> io::Result<()> {
    writeln!(w, "{}", crate::CHART_TITLE)?;
    for record in log.records() {
        writeln!(w, "{record}")?;
    }
    writeln!(w)?;

    write_summary(&mut w, &comparison.cpu)?;
    write_summary(&mut w, &comparison.gpu)?;

    if log.is_empty() {
        writeln!(w, "no CPU or GPU rows found")?;
        return Ok(());
    }

    writeln!(w)?;
    writeln!(w, "{:>8}  {:>10}  {:>10}  {:>9}", "Sites", "CPU (s)", "GPU (s)", "Speedup")?;
    for row in &comparison.rows {
        let speedup = row.speedup.map_or_else(|| "-".to_string(), |s| format!("{s:.2}x"));
        writeln!(
            w,
            "{:>8}  {:>10.4}  {:>10.4}  {:>9}",
            row.sites, row.cpu_secs, row.gpu_secs, speedup
        )?;
    }

    if let Some(best) = comparison.best() {
        writeln!(w)?;
        writeln!(w, "best speedup: {:.2}x at {} sites", best.speedup.unwrap_or(0.0), best.sites)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compare;

    fn render(text: &str) -> String {
        let log: PerfLog = text.parse().unwrap();
        let comparison = compare(&log);
        let mut out = Vec::new();
        write_report(&mut out, &log, &comparison).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_layout() {
        let out = render("1 2 0.031\n2 2 0.004\n1 4 0.062\n2 4 0.004\n");
        let expected = r"Number of Sites vs Time (GPU and CPU)
1 2 0.031
1 4 0.062
2 2 0.004
2 4 0.004

CPU      2 runs  max sites      4  total 0.0930s
GPU      2 runs  max sites      4  total 0.0080s

   Sites     CPU (s)     GPU (s)    Speedup
       2      0.0310      0.0040      7.75x
       4      0.0620      0.0040     15.50x

best speedup: 15.50x at 4 sites
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_report_lists_shared_sizes() {
        let out = render("1 2 0.4\n1 4 0.8\n2 2 0.1\n2 4 0.1\n");
        assert!(out.starts_with("Number of Sites vs Time (GPU and CPU)"));
        assert!(out.contains("4.00x"));
        assert!(out.contains("8.00x"));
        assert!(out.contains("best speedup: 8.00x at 4 sites"));
    }

    #[test]
    fn test_report_empty_log() {
        let out = render("9 1 1\n");
        assert!(out.contains("no CPU or GPU rows found"));
        assert!(!out.contains("best speedup"));
    }
}
