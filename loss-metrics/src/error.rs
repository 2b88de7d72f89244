//! Error types for report export

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Export error: {0}")]
    ExportError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
