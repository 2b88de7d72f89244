//! Experiment configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for one simulation run.
///
/// The rates the analytic model needs are derived here: `lambda` from the
/// arrival interval, `mu` from the service time, and the offered load as
/// their ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Number of service channels
    pub channels: usize,
    /// Requests submitted over the run
    pub total_requests: u64,
    /// Gap between consecutive arrivals (mean gap for Poisson arrivals)
    pub arrival_interval: Duration,
    /// Fixed service time per accepted request
    pub service_time: Duration,
    /// Occupancy sampling cadence; should stay below the arrival interval
    pub sample_interval: Duration,
    /// Extra observation window after the last arrival
    pub drain_window: Duration,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            channels: 5,
            total_requests: 100,
            arrival_interval: Duration::from_millis(50),
            service_time: Duration::from_millis(500),
            sample_interval: Duration::from_millis(10),
            drain_window: Duration::from_millis(1000),
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channels == 0 {
            return Err(ConfigError::ZeroChannels);
        }
        if self.total_requests == 0 {
            return Err(ConfigError::NoRequests);
        }
        if self.arrival_interval.is_zero() {
            return Err(ConfigError::ZeroArrivalInterval);
        }
        if self.sample_interval.is_zero() {
            return Err(ConfigError::ZeroSampleInterval);
        }
        Ok(())
    }

    /// Arrival rate `lambda` in requests per second.
    pub fn lambda(&self) -> f64 {
        1.0 / self.arrival_interval.as_secs_f64()
    }

    /// Per-channel service rate `mu` in requests per second.
    ///
    /// Infinite for a zero service time (instantaneous service).
    pub fn mu(&self) -> f64 {
        1.0 / self.service_time.as_secs_f64()
    }

    /// Offered load `rho = lambda / mu`, computed as `lambda * E[S]` so a
    /// zero service time cleanly yields zero load.
    pub fn offered_load(&self) -> f64 {
        self.lambda() * self.service_time.as_secs_f64()
    }
}
