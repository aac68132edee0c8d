//! The per-run report and the sink it is handed to.

use crate::error::AuroraError;
use serde::Serialize;
use serde_json::json;
use std::io::Write;

/// The three derived values of one successful run. Built once, written once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuroraReport {
    /// Forecast likelihood of visible aurora at the grid cell, 0-100.
    pub probability: f64,
    pub observation_time_ms: i64,
    pub forecast_time_ms: i64,
}

/// Downstream consumer of the report. The core produces the values; what
/// "persisting" means is entirely the sink's business.
pub trait ReportSink {
    fn report(&mut self, report: &AuroraReport) -> Result<(), AuroraError>;
}

/// Writes each value as one JSON line (`id`, `val`, `ack`), the same shape
/// the host state store expects.
pub struct JsonLineSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(out: W) -> Self {
        JsonLineSink { out }
    }
}

impl<W: Write> ReportSink for JsonLineSink<W> {
    fn report(&mut self, report: &AuroraReport) -> Result<(), AuroraError> {
        let values = [
            json!({"id": "probability", "val": report.probability, "ack": true}),
            json!({"id": "observationTime", "val": report.observation_time_ms, "ack": true}),
            json!({"id": "forecastTime", "val": report.forecast_time_ms, "ack": true}),
        ];
        for value in values {
            serde_json::to_writer(&mut self.out, &value)?;
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
