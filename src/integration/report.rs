//! Accumulated speed records and CSV export.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

/// One reported speed measurement, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedRecord {
    /// Tracked object identity
    pub id: u64,
    /// Smoothed speed in distance units per hour, rounded to one decimal
    pub speed: f64,
    /// Observation timestamp in seconds
    pub timestamp: f64,
}

/// Errors raised while exporting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Csv(#[from] csv::Error),
}

/// Time-ordered accumulation of per-observation speed measurements.
#[derive(Debug, Clone, Default)]
pub struct SpeedReport {
    records: Vec<SpeedRecord>,
}

impl SpeedReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a measurement.
    pub fn push(&mut self, record: SpeedRecord) {
        self.records.push(record);
    }

    /// All accumulated records in arrival order.
    pub fn records(&self) -> &[SpeedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discard all accumulated records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Write all records as CSV with a `id,speed,timestamp` header row.
    ///
    /// The header is written even when no records have accumulated, so an
    /// empty session still exports a valid file.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(["id", "speed", "timestamp"])?;
        for record in &self.records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_format() {
        let mut report = SpeedReport::new();
        report.push(SpeedRecord {
            id: 1,
            speed: 5.0,
            timestamp: 1.0,
        });
        report.push(SpeedRecord {
            id: 2,
            speed: 42.5,
            timestamp: 1.0,
        });

        let mut buf = Vec::new();
        report.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,speed,timestamp"));
        assert_eq!(lines.next(), Some("1,5.0,1.0"));
        assert_eq!(lines.next(), Some("2,42.5,1.0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_report_exports_header_only() {
        let report = SpeedReport::new();
        let mut buf = Vec::new();
        report.write_csv(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,speed,timestamp"));
        assert_eq!(lines.next(), None);
    }
}
