//! CPU vs GPU comparison for a parsed performance log.
//!
//! The benchmark opens its log in append mode, so a file may hold several
//! sweeps. Timings are aggregated per site count (mean of all runs at that
//! size) before the two devices are compared.
//!
//! ```text
//!  Sites     CPU (s)    GPU (s)   Speedup
//!      2      0.0310     0.0040     7.75x
//!   8192     91.2000     0.3100   294.19x
//! ```

// Averages intentionally convert counts to f64
#![allow(clippy::cast_precision_loss)]

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::{DeviceKind, SiteCount};
use crate::perf_log::{PerfLog, Series};

/// One site count measured on both devices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedupRow {
    pub sites: SiteCount,
    /// Mean CPU seconds at this size
    pub cpu_secs: f64,
    /// Mean GPU seconds at this size
    pub gpu_secs: f64,
    /// `cpu_secs / gpu_secs`; `None` when the GPU time rounds to zero.
    pub speedup: Option<f64>,
}

/// Aggregate figures for one series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub device: DeviceKind,
    pub runs: usize,
    pub max_sites: Option<SiteCount>,
    pub total_secs: f64,
}

impl SeriesSummary {
    #[must_use]
    pub fn of(series: &Series) -> Self {
        Self {
            device: series.device,
            runs: series.len(),
            max_sites: series.points.iter().map(|&(sites, _)| sites).max(),
            total_secs: series.points.iter().map(|&(_, secs)| secs).sum(),
        }
    }
}

/// Result of [`compare`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub cpu: SeriesSummary,
    pub gpu: SeriesSummary,
    /// Sorted by site count ascending
    pub rows: Vec<SpeedupRow>,
}

impl Comparison {
    /// Row with the largest finite speedup
    #[must_use]
    pub fn best(&self) -> Option<&SpeedupRow> {
        self.rows
            .iter()
            .filter(|row| row.speedup.is_some_and(f64::is_finite))
            .max_by(|a, b| a.speedup.unwrap_or(0.0).total_cmp(&b.speedup.unwrap_or(0.0)))
    }
}

/// Mean elapsed seconds per site count
fn mean_by_sites(series: &Series) -> BTreeMap<SiteCount, f64> {
    let mut sums: BTreeMap<SiteCount, (f64, usize)> = BTreeMap::new();
    for &(sites, secs) in &series.points {
        let entry = sums.entry(sites).or_insert((0.0, 0));
        entry.0 += secs;
        entry.1 += 1;
    }
    sums.into_iter().map(|(sites, (sum, n))| (sites, sum / n as f64)).collect()
}

/// Compare both devices at every site count present in both series.
#[must_use]
pub fn compare(log: &PerfLog) -> Comparison {
    let cpu = mean_by_sites(&log.cpu);
    let gpu = mean_by_sites(&log.gpu);

    let rows = cpu
        .iter()
        .filter_map(|(&sites, &cpu_secs)| {
            let &gpu_secs = gpu.get(&sites)?;
            let speedup = (gpu_secs > 0.0).then(|| cpu_secs / gpu_secs);
            Some(SpeedupRow { sites, cpu_secs, gpu_secs, speedup })
        })
        .collect();

    Comparison { cpu: SeriesSummary::of(&log.cpu), gpu: SeriesSummary::of(&log.gpu), rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(text: &str) -> PerfLog {
        text.parse().expect("valid log")
    }

    #[test]
    fn test_only_shared_site_counts_are_compared() {
        let comparison = compare(&log("1 2 1.0\n1 4 2.0\n1 8 4.0\n2 4 0.5\n2 8 0.5\n2 16 1.0\n"));
        let sites: Vec<u64> = comparison.rows.iter().map(|r| r.sites.0).collect();
        assert_eq!(sites, vec![4, 8]);
        assert!((comparison.rows[1].speedup.unwrap() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_sweeps_are_averaged() {
        let comparison = compare(&log("1 2 1.0\n2 2 0.5\n1 2 3.0\n2 2 1.5\n"));
        assert_eq!(comparison.rows.len(), 1);
        let row = comparison.rows[0];
        assert!((row.cpu_secs - 2.0).abs() < 1e-9);
        assert!((row.gpu_secs - 1.0).abs() < 1e-9);
        assert_eq!(comparison.cpu.runs, 2);
    }

    #[test]
    fn test_zero_gpu_time_has_no_speedup() {
        let comparison = compare(&log("1 2 0.01\n2 2 0\n1 4 0.04\n2 4 0.01\n"));
        assert_eq!(comparison.rows[0].speedup, None);
        let best = comparison.best().unwrap();
        assert_eq!(best.sites, SiteCount(4));
    }

    #[test]
    fn test_summary() {
        let comparison = compare(&log("1 2 0.5\n1 64 1.5\n"));
        assert_eq!(comparison.cpu.max_sites, Some(SiteCount(64)));
        assert!((comparison.cpu.total_secs - 2.0).abs() < 1e-9);
        assert_eq!(comparison.gpu.runs, 0);
        assert_eq!(comparison.gpu.max_sites, None);
        assert!(comparison.best().is_none());
    }
}
