//! Occupancy sampling
//!
//! A polling estimator for the steady-state idle probability. The driver calls
//! [`StateSampler::poll`] at a fixed cadence, finer than the arrival interval
//! so the samples do not alias with the arrival period. Each poll reads the
//! server's occupancy through the synchronized read path and bumps the
//! observation counters.
//!
//! Beyond the idle/total pair the sampler keeps a per-occupancy histogram, so
//! the whole empirical state distribution can be held against the truncated
//! Poisson distribution the analytic model predicts, not just its first term.

use crate::server::Server;
use serde::Serialize;

/// Monotone observation counters for the idle-probability estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SampleAccumulator {
    /// Observations that found zero busy channels
    pub idle_observations: u64,
    /// Total observations
    pub total_observations: u64,
}

impl SampleAccumulator {
    /// Empirical idle probability; `0.0` before the first observation.
    pub fn idle_probability(&self) -> f64 {
        if self.total_observations == 0 {
            return 0.0;
        }
        self.idle_observations as f64 / self.total_observations as f64
    }
}

/// Discrete-time Monte-Carlo sampler of server occupancy.
#[derive(Debug, Clone)]
pub struct StateSampler {
    accumulator: SampleAccumulator,
    /// Observation counts per occupancy level, indices `0..=capacity`.
    occupancy_counts: Vec<u64>,
}

impl StateSampler {
    pub fn new(capacity: usize) -> Self {
        Self {
            accumulator: SampleAccumulator::default(),
            occupancy_counts: vec![0; capacity + 1],
        }
    }

    /// Take one sample from the server and return the occupancy it observed.
    pub fn poll(&mut self, server: &Server) -> usize {
        let active = server.active_channels();
        self.observe(active);
        active
    }

    /// Record an occupancy observation directly.
    pub fn observe(&mut self, active_channels: usize) {
        self.accumulator.total_observations += 1;
        if active_channels == 0 {
            self.accumulator.idle_observations += 1;
        }
        if let Some(count) = self.occupancy_counts.get_mut(active_channels) {
            *count += 1;
        }
    }

    pub fn accumulator(&self) -> SampleAccumulator {
        self.accumulator
    }

    /// Empirical idle probability; `0.0` before the first observation.
    pub fn idle_probability(&self) -> f64 {
        self.accumulator.idle_probability()
    }

    /// Observed fraction of time spent at each occupancy level.
    ///
    /// All zeros before the first observation.
    pub fn occupancy_distribution(&self) -> Vec<f64> {
        let total = self.accumulator.total_observations;
        if total == 0 {
            return vec![0.0; self.occupancy_counts.len()];
        }
        self.occupancy_counts
            .iter()
            .map(|&c| c as f64 / total as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn idle_probability_is_zero_without_observations() {
        let sampler = StateSampler::new(4);
        assert_eq!(sampler.idle_probability(), 0.0);
        assert!(sampler.occupancy_distribution().iter().all(|&p| p == 0.0));
    }

    #[test]
    fn counts_idle_and_total_observations() {
        let mut sampler = StateSampler::new(2);
        for active in [0, 1, 2, 0, 1, 0] {
            sampler.observe(active);
        }
        let acc = sampler.accumulator();
        assert_eq!(acc.total_observations, 6);
        assert_eq!(acc.idle_observations, 3);
        assert_eq!(sampler.idle_probability(), 0.5);

        let dist = sampler.occupancy_distribution();
        assert_eq!(dist.len(), 3);
        assert!((dist[0] - 0.5).abs() < 1e-12);
        assert!((dist[1] - 2.0 / 6.0).abs() < 1e-12);
        assert!((dist[2] - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn polls_see_the_server_occupancy() {
        let server = Server::new(2, Duration::from_millis(50));
        let mut sampler = StateSampler::new(server.capacity());

        assert_eq!(sampler.poll(&server), 0);
        server.submit(1);
        assert_eq!(sampler.poll(&server), 1);

        let acc = sampler.accumulator();
        assert_eq!(acc.total_observations, 2);
        assert_eq!(acc.idle_observations, 1);
        assert!(server.wait_idle(Duration::from_millis(5), Duration::from_secs(2)));
    }
}
