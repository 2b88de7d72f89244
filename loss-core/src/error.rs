//! Error types for the loss-system core

use thiserror::Error;

/// Domain errors for the analytic Erlang-B model.
///
/// The model functions are pure numeric pipelines; the only failure class is
/// an out-of-domain input. Each variant corresponds to one guard condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("factorial is undefined for negative argument {0}")]
    NegativeFactorial(i32),

    #[error("offered load must be non-negative, got {0}")]
    NegativeLoad(f64),

    #[error("channel count must be non-negative, got {0}")]
    NegativeChannels(i32),

    #[error("idle probability must be non-negative, got {0}")]
    NegativeIdleProbability(f64),

    #[error("service rate must be positive, got {0}")]
    NonPositiveServiceRate(f64),

    #[error("denominator sum of the Erlang-B recurrence is zero")]
    ZeroDenominator,
}

/// Errors for invalid experiment configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("channel capacity must be positive")]
    ZeroChannels,

    #[error("an experiment needs at least one request")]
    NoRequests,

    #[error("arrival interval must be positive")]
    ZeroArrivalInterval,

    #[error("sample interval must be positive")]
    ZeroSampleInterval,
}
