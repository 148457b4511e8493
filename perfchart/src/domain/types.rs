//! Domain types providing compile-time safety and self-documentation
//!
//! These newtype wrappers keep a site count from being mixed up with an
//! arbitrary integer, and make function signatures more expressive.

use serde::Serialize;
use std::fmt;

/// Which backend produced a timing measurement.
///
/// The log encodes this as the first column: `1` for CPU, `2` for GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Cpu,
    Gpu,
}

impl DeviceKind {
    /// Map a log tag to a device. Unknown tags return `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "1" => Some(Self::Cpu),
            "2" => Some(Self::Gpu),
            _ => None,
        }
    }

    /// Tag written in the first column of the log
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Cpu => "1",
            Self::Gpu => "2",
        }
    }

    /// Legend label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of Voronoi sites in one benchmark run (the problem size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SiteCount(pub u64);

impl fmt::Display for SiteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for SiteCount {
    fn from(n: u64) -> Self {
        SiteCount(n)
    }
}

/// One parsed row of the performance log
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfRecord {
    pub device: DeviceKind,
    pub sites: SiteCount,
    pub elapsed_secs: f64,
}

impl fmt::Display for PerfRecord {
    /// Same three-column form the benchmark appends to the log
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.device.tag(), self.sites, self.elapsed_secs)
    }
}
