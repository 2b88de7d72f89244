//! Inter-arrival patterns for the request source
//!
//! The driver pulls the gap to the next arrival from an [`ArrivalPattern`].
//! The constant pattern reproduces a fixed send interval; the Poisson pattern
//! draws exponential gaps so the empirical run actually exercises the traffic
//! model the Erlang-B formulas assume.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::Exp;
use std::time::Duration;

/// Source of inter-arrival gaps.
pub trait ArrivalPattern: Send {
    /// Time to wait before the next request is submitted.
    fn next_arrival(&mut self) -> Duration;
}

/// Fixed inter-arrival time.
#[derive(Debug, Clone)]
pub struct ConstantArrivals {
    interval: Duration,
}

impl ConstantArrivals {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl ArrivalPattern for ConstantArrivals {
    fn next_arrival(&mut self) -> Duration {
        self.interval
    }
}

/// Poisson arrivals: exponentially distributed gaps with the given rate.
///
/// The generator is a seedable ChaCha stream so sweep runs can be reproduced
/// exactly.
pub struct PoissonArrivals {
    rate: f64,
    rng: ChaCha8Rng,
    dist: Exp<f64>,
}

impl PoissonArrivals {
    /// Create a Poisson arrival pattern with `rate` arrivals per second,
    /// seeded from entropy.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not positive.
    pub fn new(rate: f64) -> Self {
        Self::from_rng(rate, ChaCha8Rng::from_entropy())
    }

    /// Create a reproducible Poisson arrival pattern from a seed.
    pub fn with_seed(rate: f64, seed: u64) -> Self {
        Self::from_rng(rate, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rate: f64, rng: ChaCha8Rng) -> Self {
        assert!(rate > 0.0, "arrival rate must be positive");
        let dist = Exp::new(rate).expect("arrival rate must be positive");
        Self { rate, rng, dist }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl ArrivalPattern for PoissonArrivals {
    fn next_arrival(&mut self) -> Duration {
        let gap_seconds: f64 = self.rng.sample(self.dist);
        Duration::from_secs_f64(gap_seconds)
    }
}
