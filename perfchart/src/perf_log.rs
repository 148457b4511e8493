//! Performance log parsing
//!
//! The benchmark appends one whitespace-separated row per run:
//!
//! ```text
//! <tag> <sites> <seconds>
//! 1 2 0.031
//! 2 2 0.004
//! ```
//!
//! Tag `1` rows go to the CPU series and tag `2` rows to the GPU series,
//! both in file order. Rows with any other tag are dropped. There is no
//! recovery: the first malformed row aborts the parse.

use log::{debug, trace};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::domain::errors::{FIELD_ELAPSED, FIELD_SITES, FIELD_TAG};
use crate::domain::{DeviceKind, LogError, PerfRecord, SiteCount};

/// Input path used when none is given on the command line
pub const DEFAULT_LOG_PATH: &str = "Release/performance.txt";

impl PerfRecord {
    /// Parse one log row. `line_no` is 1-based and only used for errors.
    ///
    /// Returns `Ok(None)` for rows whose tag is neither CPU nor GPU; their
    /// remaining columns are not inspected. Tokens past the third are ignored.
    ///
    /// # Errors
    /// Returns [`LogError`] when a column is missing or does not parse.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Self>, LogError> {
        let mut tokens = line.split_whitespace();

        let tag = tokens.next().ok_or(LogError::MissingField { line: line_no, field: FIELD_TAG })?;
        let Some(device) = DeviceKind::from_tag(tag) else {
            trace!("line {line_no}: skipping unknown tag {tag:?}");
            return Ok(None);
        };

        let sites_tok =
            tokens.next().ok_or(LogError::MissingField { line: line_no, field: FIELD_SITES })?;
        let elapsed_tok =
            tokens.next().ok_or(LogError::MissingField { line: line_no, field: FIELD_ELAPSED })?;

        let sites = sites_tok.parse::<u64>().map_err(|source| LogError::InvalidSiteCount {
            line: line_no,
            value: sites_tok.to_string(),
            source,
        })?;
        let elapsed_secs = elapsed_tok.parse::<f64>().map_err(|source| LogError::InvalidElapsed {
            line: line_no,
            value: elapsed_tok.to_string(),
            source,
        })?;

        Ok(Some(PerfRecord { device, sites: SiteCount(sites), elapsed_secs }))
    }
}

/// Axis ranges covering a set of points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    fn of_point(x: f64, y: f64) -> Self {
        Self { x_min: x, x_max: x, y_min: y, y_max: y }
    }

    fn include(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Smallest bounds covering both
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

/// Timings for one device, in the order they appear in the log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub device: DeviceKind,
    pub points: Vec<(SiteCount, f64)>,
}

impl Series {
    #[must_use]
    pub fn new(device: DeviceKind) -> Self {
        Self { device, points: Vec::new() }
    }

    pub fn push(&mut self, sites: SiteCount, elapsed_secs: f64) {
        self.points.push((sites, elapsed_secs));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Site counts (x-values)
    #[must_use]
    pub fn xs(&self) -> Vec<SiteCount> {
        self.points.iter().map(|&(sites, _)| sites).collect()
    }

    /// Elapsed seconds (y-values)
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, secs)| secs).collect()
    }

    /// Points as `(x, y)` floats for plotting
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64_points(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|&(sites, secs)| (sites.0 as f64, secs)).collect()
    }

    /// `None` for an empty series
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.as_f64_points().into_iter();
        let (x, y) = points.next()?;
        let mut bounds = Bounds::of_point(x, y);
        for (x, y) in points {
            bounds.include(x, y);
        }
        Some(bounds)
    }
}

/// Both series parsed from one log file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerfLog {
    pub cpu: Series,
    pub gpu: Series,
}

impl Default for PerfLog {
    fn default() -> Self {
        Self { cpu: Series::new(DeviceKind::Cpu), gpu: Series::new(DeviceKind::Gpu) }
    }
}

impl PerfLog {
    /// Read and parse a log file
    ///
    /// # Errors
    /// Returns [`LogError::Io`] if the file cannot be read, or the first row error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();
        debug!("reading performance log {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse rows from any buffered reader
    ///
    /// # Errors
    /// Returns the first [`LogError`] encountered.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, LogError> {
        let mut log = Self::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(record) = PerfRecord::parse_line(&line, idx + 1)? {
                debug!("{record}");
                log.push(record);
            }
        }
        debug!("parsed {} CPU and {} GPU rows", log.cpu.len(), log.gpu.len());
        Ok(log)
    }

    /// Append a record to the series for its device
    pub fn push(&mut self, record: PerfRecord) {
        match record.device {
            DeviceKind::Cpu => self.cpu.push(record.sites, record.elapsed_secs),
            DeviceKind::Gpu => self.gpu.push(record.sites, record.elapsed_secs),
        }
    }

    /// Rows back in log form: the CPU series, then the GPU series
    pub fn records(&self) -> impl Iterator<Item = PerfRecord> + '_ {
        self.series().into_iter().flat_map(|series| {
            series.points.iter().map(move |&(sites, elapsed_secs)| PerfRecord {
                device: series.device,
                sites,
                elapsed_secs,
            })
        })
    }

    #[must_use]
    pub fn series(&self) -> [&Series; 2] {
        [&self.cpu, &self.gpu]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty() && self.gpu.is_empty()
    }

    /// Combined bounds of both series, `None` when both are empty
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        match (self.cpu.bounds(), self.gpu.bounds()) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        }
    }
}

impl FromStr for PerfLog {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_cpu_and_gpu() {
        let cpu = PerfRecord::parse_line("1 64 0.5", 1).unwrap().unwrap();
        assert_eq!(cpu.device, DeviceKind::Cpu);
        assert_eq!(cpu.sites, SiteCount(64));
        assert!((cpu.elapsed_secs - 0.5).abs() < f64::EPSILON);

        let gpu = PerfRecord::parse_line("2\t64   0.01", 2).unwrap().unwrap();
        assert_eq!(gpu.device, DeviceKind::Gpu);
    }

    #[test]
    fn test_parse_line_unknown_tag_is_skipped() {
        assert!(PerfRecord::parse_line("3 64 0.5", 1).unwrap().is_none());
        // Columns of unknown rows are never inspected
        assert!(PerfRecord::parse_line("# header", 1).unwrap().is_none());
    }

    #[test]
    fn test_parse_line_ignores_extra_columns() {
        let rec = PerfRecord::parse_line("1 8 1e-3 trailing", 1).unwrap().unwrap();
        assert!((rec.elapsed_secs - 0.001).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_line_empty_fails() {
        let err = PerfRecord::parse_line("   ", 4).unwrap_err();
        assert!(matches!(err, LogError::MissingField { line: 4, field: FIELD_TAG }));
    }

    #[test]
    fn test_parse_line_missing_elapsed() {
        let err = PerfRecord::parse_line("1 128", 9).unwrap_err();
        assert!(matches!(err, LogError::MissingField { line: 9, field: FIELD_ELAPSED }));
    }

    #[test]
    fn test_parse_line_non_numeric() {
        let err = PerfRecord::parse_line("2 many 0.1", 1).unwrap_err();
        assert!(matches!(err, LogError::InvalidSiteCount { .. }));

        let err = PerfRecord::parse_line("1 16 slow", 1).unwrap_err();
        assert!(matches!(err, LogError::InvalidElapsed { .. }));
    }

    #[test]
    fn test_counts_match_rows() {
        let log: PerfLog = "1 2 0.1\n1 4 0.2\n1 8 0.4\n2 2 0.01\n2 4 0.02\n".parse().unwrap();
        assert_eq!(log.cpu.len(), 3);
        assert_eq!(log.gpu.len(), 2);
    }

    #[test]
    fn test_cpu_xs_in_file_order() {
        let log: PerfLog = "1 8 0.4\n2 2 0.01\n1 2 0.1\n1 4 0.2\n".parse().unwrap();
        assert_eq!(log.cpu.xs(), vec![SiteCount(8), SiteCount(2), SiteCount(4)]);
        assert_eq!(log.gpu.xs(), vec![SiteCount(2)]);
    }

    #[test]
    fn test_bounds_union() {
        let log: PerfLog = "1 2 0.5\n1 16 4.0\n2 4 0.25\n2 32 1.0\n".parse().unwrap();
        let b = log.bounds().unwrap();
        assert!((b.x_min - 2.0).abs() < f64::EPSILON);
        assert!((b.x_max - 32.0).abs() < f64::EPSILON);
        assert!((b.y_min - 0.25).abs() < f64::EPSILON);
        assert!((b.y_max - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_records_cpu_then_gpu() {
        let log: PerfLog = "2 2 0.01\n1 2 0.1\n1 4 0.2\n".parse().unwrap();
        let rows: Vec<String> = log.records().map(|r| r.to_string()).collect();
        assert_eq!(rows, vec!["1 2 0.1", "1 4 0.2", "2 2 0.01"]);
    }

    #[test]
    fn test_empty_log_has_no_bounds() {
        let log: PerfLog = "".parse().unwrap();
        assert!(log.is_empty());
        assert!(log.bounds().is_none());
    }
}
