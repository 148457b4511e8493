//! Chart data export
//!
//! Writes the parsed series to JSON so the chart can be reproduced by other
//! plotting tools.

pub mod json;

pub use json::JsonExporter;
