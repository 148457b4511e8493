use serde::Serialize;
use std::io::Write;

use crate::analysis::Comparison;
use crate::domain::ExportError;
use crate::perf_log::{PerfLog, Series};

/// Top-level JSON document
#[derive(Debug, Serialize)]
struct ChartDocument<'a> {
    title: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    series: [&'a Series; 2],
    comparison: &'a Comparison,
}

/// Writes the parsed series and their comparison as pretty-printed JSON
pub struct JsonExporter<'a> {
    log: &'a PerfLog,
    comparison: &'a Comparison,
}

impl<'a> JsonExporter<'a> {
    #[must_use]
    pub fn new(log: &'a PerfLog, comparison: &'a Comparison) -> Self {
        Self { log, comparison }
    }

    /// JSON has no NaN or infinity; `serde_json` would silently write `null`
    fn check_finite(&self) -> Result<(), ExportError> {
        for series in self.log.series() {
            if let Some(&(sites, _)) = series.points.iter().find(|(_, secs)| !secs.is_finite()) {
                return Err(ExportError::NonFinite { device: series.device, sites });
            }
        }
        Ok(())
    }

    /// Serialize to `writer`
    ///
    /// # Errors
    /// Returns [`ExportError::NonFinite`] if an elapsed time is NaN or infinite,
    /// otherwise any serialization or write failure.
    pub fn export<W: Write>(&self, mut writer: W) -> Result<(), ExportError> {
        self.check_finite()?;
        let doc = ChartDocument {
            title: crate::CHART_TITLE,
            x_label: crate::X_AXIS_LABEL,
            y_label: crate::Y_AXIS_LABEL,
            series: self.log.series(),
            comparison: self.comparison,
        };
        serde_json::to_writer_pretty(&mut writer, &doc)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
