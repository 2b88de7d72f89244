//! CSV export for sweep results
//!
//! One row per sweep point, semicolon-separated, empirical and theoretical
//! columns side by side so each quantity can be plotted as an
//! experiment-vs-theory pair over lambda.

use crate::error::MetricsError;
use crate::experiment::ComparisonRow;
use crate::export::ResultsExporter;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const HEADER: &str = "interval_ms;lambda;p0_emp;p0_theor;block_emp;block_theor;\
q_emp;q_theor;a_emp;a_theor;k_emp;k_theor";

/// CSV exporter for the comparison table
#[derive(Debug)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ResultsExporter for CsvExporter {
    fn export(&self, rows: &[ComparisonRow]) -> Result<(), MetricsError> {
        let mut file = File::create(&self.path)
            .map_err(|e| MetricsError::ExportError(format!("Failed to create file: {e}")))?;

        writeln!(file, "{HEADER}")?;
        for row in rows {
            let e = &row.empirical;
            let t = &row.analytic;
            writeln!(
                file,
                "{:.3};{:.6};{:.6};{:.6};{:.6};{:.6};{:.6};{:.6};{:.6};{:.6};{:.6};{:.6}",
                row.arrival_interval_ms,
                row.lambda,
                e.idle_probability,
                t.idle_probability,
                e.blocking_probability,
                t.blocking_probability,
                e.relative_throughput,
                t.relative_throughput,
                e.absolute_throughput,
                t.absolute_throughput,
                e.avg_occupied_channels,
                t.avg_occupied_channels,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::EmpiricalReport;
    use loss_core::AnalyticReport;

    fn sample_row(interval_ms: f64) -> ComparisonRow {
        let lambda = 1000.0 / interval_ms;
        ComparisonRow {
            arrival_interval_ms: interval_ms,
            lambda,
            empirical: EmpiricalReport {
                lambda,
                idle_probability: 0.1,
                blocking_probability: 0.25,
                relative_throughput: 0.75,
                absolute_throughput: lambda * 0.75,
                avg_occupied_channels: 3.2,
            },
            analytic: AnalyticReport::compute(lambda, 2.0, 5).unwrap(),
        }
    }

    #[test]
    fn writes_header_and_one_line_per_row() {
        let path = std::env::temp_dir().join("loss_sim_test_sweep.csv");
        let rows = vec![sample_row(50.0), sample_row(100.0)];
        CsvExporter::new(&path).export(&rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("interval_ms;lambda;p0_emp"));
        assert_eq!(lines[0].split(';').count(), 12);

        let first: Vec<&str> = lines[1].split(';').collect();
        assert_eq!(first.len(), 12);
        assert_eq!(first[0], "50.000");
        let lambda: f64 = first[1].parse().unwrap();
        assert!((lambda - 20.0).abs() < 1e-6);

        std::fs::remove_file(&path).ok();
    }
}
