//! Empirical experiment reports
//!
//! Final statistics of one simulation run, derived from the server's counter
//! snapshot and the sampler's observations, in the same shape as the analytic
//! report so the two pipelines can be compared column by column. The mean
//! busy-channel count deliberately uses the empirical formulation
//! `Q * lambda / mu`, which is numerically equivalent to the theoretical
//! `rho * Q` but derives from measured throughput.

use loss_core::{AnalyticReport, Counters, StateSampler};
use serde::Serialize;
use std::fmt;

/// Statistics measured from one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmpiricalReport {
    /// Arrival rate the run was driven with, in requests per second
    pub lambda: f64,
    /// Fraction of occupancy samples that saw an idle system
    pub idle_probability: f64,
    /// Rejected / submitted
    pub blocking_probability: f64,
    /// Processed / submitted
    pub relative_throughput: f64,
    /// `lambda * Q`, in requests per second
    pub absolute_throughput: f64,
    /// `Q * lambda / mu`
    pub avg_occupied_channels: f64,
}

impl EmpiricalReport {
    /// Build the report from final counters and sampler state.
    ///
    /// With zero submitted requests all ratios are reported as zero.
    pub fn from_observations(
        counters: Counters,
        sampler: &StateSampler,
        lambda: f64,
        mu: f64,
    ) -> Self {
        let (blocking, relative) = if counters.requests == 0 {
            (0.0, 0.0)
        } else {
            let total = counters.requests as f64;
            (
                counters.rejected as f64 / total,
                counters.processed as f64 / total,
            )
        };
        Self {
            lambda,
            idle_probability: sampler.idle_probability(),
            blocking_probability: blocking,
            relative_throughput: relative,
            absolute_throughput: lambda * relative,
            avg_occupied_channels: relative * (lambda / mu),
        }
    }
}

impl fmt::Display for EmpiricalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "idle probability (P0):      {:.4}", self.idle_probability)?;
        writeln!(f, "blocking probability:       {:.4}", self.blocking_probability)?;
        writeln!(f, "relative throughput (Q):    {:.4}", self.relative_throughput)?;
        writeln!(f, "absolute throughput (A):    {:.4} req/s", self.absolute_throughput)?;
        write!(f, "mean busy channels (k):     {:.4}", self.avg_occupied_channels)
    }
}

/// One sweep point: empirical and analytic results for the same parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Arrival interval this point was run with, in milliseconds
    pub arrival_interval_ms: f64,
    /// Arrival rate in requests per second
    pub lambda: f64,
    pub empirical: EmpiricalReport,
    pub analytic: AnalyticReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampler_with(observations: &[usize], capacity: usize) -> StateSampler {
        let mut sampler = StateSampler::new(capacity);
        for &active in observations {
            sampler.observe(active);
        }
        sampler
    }

    #[test]
    fn ratios_from_counters() {
        let counters = Counters {
            requests: 100,
            processed: 80,
            rejected: 20,
        };
        let sampler = sampler_with(&[0, 1, 2, 0], 2);
        let report = EmpiricalReport::from_observations(counters, &sampler, 20.0, 2.0);

        assert!((report.blocking_probability - 0.2).abs() < 1e-12);
        assert!((report.relative_throughput - 0.8).abs() < 1e-12);
        assert!((report.absolute_throughput - 16.0).abs() < 1e-12);
        // Q * lambda / mu = 0.8 * 10
        assert!((report.avg_occupied_channels - 8.0).abs() < 1e-12);
        assert!((report.idle_probability - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_run_reports_zeros() {
        let sampler = StateSampler::new(3);
        let report =
            EmpiricalReport::from_observations(Counters::default(), &sampler, 10.0, 1.0);
        assert_eq!(report.blocking_probability, 0.0);
        assert_eq!(report.relative_throughput, 0.0);
        assert_eq!(report.absolute_throughput, 0.0);
        assert_eq!(report.avg_occupied_channels, 0.0);
        assert_eq!(report.idle_probability, 0.0);
    }

    #[test]
    fn instantaneous_service_occupies_no_channels() {
        let counters = Counters {
            requests: 10,
            processed: 10,
            rejected: 0,
        };
        let sampler = sampler_with(&[0, 0], 2);
        // mu -> infinity for a zero service time
        let report =
            EmpiricalReport::from_observations(counters, &sampler, 20.0, f64::INFINITY);
        assert_eq!(report.avg_occupied_channels, 0.0);
    }

    #[test]
    fn comparison_row_serializes() {
        let analytic = AnalyticReport::compute(20.0, 2.0, 5).unwrap();
        let sampler = sampler_with(&[0, 1], 5);
        let empirical = EmpiricalReport::from_observations(
            Counters { requests: 2, processed: 2, rejected: 0 },
            &sampler,
            20.0,
            2.0,
        );
        let row = ComparisonRow {
            arrival_interval_ms: 50.0,
            lambda: 20.0,
            empirical,
            analytic,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["arrival_interval_ms"], 50.0);
        assert!(json["empirical"]["idle_probability"].is_number());
        assert!(json["analytic"]["blocking_probability"].is_number());
    }
}
