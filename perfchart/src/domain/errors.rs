//! Structured error types for perfchart
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

use super::types::{DeviceKind, SiteCount};

/// Column names used in error messages
pub const FIELD_TAG: &str = "device tag";
pub const FIELD_SITES: &str = "site count";
pub const FIELD_ELAPSED: &str = "elapsed time";

#[derive(Error, Debug)]
pub enum LogError {
    #[error("line {line}: missing {field} column")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid site count {value:?}")]
    InvalidSiteCount {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: invalid elapsed time {value:?}")]
    InvalidElapsed {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// 1-based line number of the offending row, if the error came from a row
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MissingField { line, .. }
            | Self::InvalidSiteCount { line, .. }
            | Self::InvalidElapsed { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{device} value at {sites} sites is not finite; JSON cannot represent it")]
    NonFinite { device: DeviceKind, sites: SiteCount },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
