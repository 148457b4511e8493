//! Analysis logic for performance logs
//!
//! Pure comparison logic, separated from the TUI and report presentation.

pub mod comparison;

pub use comparison::{compare, Comparison, SeriesSummary, SpeedupRow};
