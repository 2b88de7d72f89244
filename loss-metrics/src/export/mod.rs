//! Export of sweep results
//!
//! Exporters for the empirical-vs-analytic comparison table, one row per
//! arrival interval. The CSV output is the file downstream plotting scripts
//! consume; JSON serves programmatic consumers.

pub mod csv;
pub mod json;

use crate::error::MetricsError;
use crate::experiment::ComparisonRow;
use std::path::Path;

/// Trait for exporting sweep results to different formats
pub trait ResultsExporter {
    /// Export the rows to the configured destination
    fn export(&self, rows: &[ComparisonRow]) -> Result<(), MetricsError>;
}

/// Export sweep results as a semicolon-separated CSV table.
pub fn export_csv(rows: &[ComparisonRow], path: impl AsRef<Path>) -> Result<(), MetricsError> {
    csv::CsvExporter::new(path.as_ref()).export(rows)
}

/// Export sweep results as JSON.
pub fn export_json(
    rows: &[ComparisonRow],
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), MetricsError> {
    json::JsonExporter::new(path.as_ref(), pretty).export(rows)
}
