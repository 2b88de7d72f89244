//! JSON export for sweep results

use crate::error::MetricsError;
use crate::experiment::ComparisonRow;
use crate::export::ResultsExporter;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON exporter for the comparison table
#[derive(Debug)]
pub struct JsonExporter {
    path: PathBuf,
    pretty: bool,
}

impl JsonExporter {
    /// Create a new JSON exporter; `pretty` adds whitespace for readability.
    pub fn new(path: &Path, pretty: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            pretty,
        }
    }
}

impl ResultsExporter for JsonExporter {
    fn export(&self, rows: &[ComparisonRow]) -> Result<(), MetricsError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(rows)
        } else {
            serde_json::to_string(rows)
        }
        .map_err(|e| MetricsError::ExportError(format!("JSON serialization failed: {e}")))?;

        let mut file = File::create(&self.path)
            .map_err(|e| MetricsError::ExportError(format!("Failed to create file: {e}")))?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
