//! Analytic Erlang-B model
//!
//! Closed-form reference values for the loss system: the idle probability
//! `P0`, the blocking probability `B(rho, n)`, and the throughput/occupancy
//! quantities derived from them. These are pure functions with no state; the
//! simulation driver computes them independently of the empirical run and
//! compares the two.
//!
//! Out-of-domain inputs (negative load, negative channel count, and so on)
//! are reported as [`ModelError`] values rather than sentinels, but the guard
//! conditions themselves are exactly the classic ones.

use crate::error::ModelError;
use serde::Serialize;
use std::fmt;

/// Factorial of `n` as a double.
///
/// Returns an error for negative `n`; `factorial(0)` is `1`.
pub fn factorial(n: i32) -> Result<f64, ModelError> {
    if n < 0 {
        return Err(ModelError::NegativeFactorial(n));
    }
    Ok((1..=n).fold(1.0, |acc, i| acc * f64::from(i)))
}

/// Steady-state idle probability of an `n`-channel loss system under offered
/// load `rho`:
///
/// ```text
/// P0 = 1 / sum_{i=0}^{n} rho^i / i!
/// ```
///
/// The partial sums are built with the running-term recurrence
/// `term_{i} = term_{i-1} * rho / i` instead of separate power and factorial
/// evaluations, which keeps the terms finite for loads where `rho^i` alone
/// would overflow.
pub fn erlang_p0(rho: f64, n: i32) -> Result<f64, ModelError> {
    if rho < 0.0 {
        return Err(ModelError::NegativeLoad(rho));
    }
    if n < 0 {
        return Err(ModelError::NegativeChannels(n));
    }

    let mut term = 1.0; // rho^0 / 0!
    let mut sum = term;
    for i in 1..=n {
        term *= rho / f64::from(i);
        sum += term;
    }
    if sum == 0.0 {
        return Err(ModelError::ZeroDenominator);
    }
    Ok(1.0 / sum)
}

/// Blocking probability `B(rho, n) = (rho^n / n!) * P0`.
///
/// `p0` is taken as an argument so that callers computing both quantities
/// evaluate the denominator sum once; it must come from a successful
/// [`erlang_p0`] call.
pub fn erlang_blocking_probability(rho: f64, n: i32, p0: f64) -> Result<f64, ModelError> {
    if rho < 0.0 {
        return Err(ModelError::NegativeLoad(rho));
    }
    if n < 0 {
        return Err(ModelError::NegativeChannels(n));
    }
    if p0 < 0.0 {
        return Err(ModelError::NegativeIdleProbability(p0));
    }

    let mut term = 1.0;
    for i in 1..=n {
        term *= rho / f64::from(i);
    }
    Ok(term * p0)
}

/// Theoretical quantities for one parameter set, computed once per run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalyticReport {
    /// Offered load `rho = lambda / mu`
    pub rho: f64,
    /// Idle probability `P0`
    pub idle_probability: f64,
    /// Blocking probability `B(rho, n)`
    pub blocking_probability: f64,
    /// Relative throughput `Q = 1 - B`
    pub relative_throughput: f64,
    /// Absolute throughput `A = lambda * Q`, in requests per second
    pub absolute_throughput: f64,
    /// Mean number of busy channels `k = rho * Q`
    pub avg_occupied_channels: f64,
}

impl AnalyticReport {
    /// Evaluate the full model for an arrival rate `lambda`, a per-channel
    /// service rate `mu` (both per second), and `channels` service channels.
    pub fn compute(lambda: f64, mu: f64, channels: i32) -> Result<Self, ModelError> {
        if mu <= 0.0 {
            return Err(ModelError::NonPositiveServiceRate(mu));
        }
        let rho = lambda / mu;
        let p0 = erlang_p0(rho, channels)?;
        let blocking = erlang_blocking_probability(rho, channels, p0)?;
        let relative = 1.0 - blocking;
        let avg_occupied = rho * relative;
        // The carried load of a loss system is the mean of a distribution on
        // 0..=n, so it cannot exceed the channel count.
        debug_assert!(avg_occupied <= f64::from(channels) + 1e-9);
        Ok(Self {
            rho,
            idle_probability: p0,
            blocking_probability: blocking,
            relative_throughput: relative,
            absolute_throughput: lambda * relative,
            avg_occupied_channels: avg_occupied,
        })
    }
}

impl fmt::Display for AnalyticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "offered load (rho):         {:.4}", self.rho)?;
        writeln!(f, "idle probability (P0):      {:.4}", self.idle_probability)?;
        writeln!(f, "blocking probability:       {:.4}", self.blocking_probability)?;
        writeln!(f, "relative throughput (Q):    {:.4}", self.relative_throughput)?;
        writeln!(f, "absolute throughput (A):    {:.4} req/s", self.absolute_throughput)?;
        write!(f, "mean busy channels (k):     {:.4}", self.avg_occupied_channels)
    }
}
