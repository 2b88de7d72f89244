//! Reports and result export for the Erlang-B loss simulator.

pub mod error;
pub mod experiment;
pub mod export;

pub use error::MetricsError;
pub use experiment::{ComparisonRow, EmpiricalReport};
pub use export::{export_csv, export_json, ResultsExporter};
