//! Erlang-B loss-system core.
//!
//! This crate holds the simulation side and the analytic side of a loss
//! queueing system (n parallel channels, no waiting room, blocked requests
//! dropped):
//!
//! - [`Server`]: the concurrent admission-control server. One mutex guards
//!   the channel pool and the counters; accept-or-reject is a single atomic
//!   step and every occupancy read goes through the same lock.
//! - [`StateSampler`]: a polling estimator of the empirical idle probability
//!   and the occupancy distribution.
//! - [`erlang`]: the closed-form Erlang-B model the empirical results are
//!   validated against.
//! - [`arrivals`]: constant and Poisson inter-arrival patterns for the
//!   request source.
//!
//! # Basic usage
//!
//! ```rust
//! use loss_core::{Server, StateSampler};
//! use std::time::Duration;
//!
//! let server = Server::new(5, Duration::from_millis(500));
//! let mut sampler = StateSampler::new(server.capacity());
//!
//! server.submit(1);
//! sampler.poll(&server);
//!
//! let counters = server.counters();
//! assert_eq!(counters.requests, counters.processed + counters.rejected);
//! ```

pub mod arrivals;
pub mod config;
pub mod erlang;
pub mod error;
pub mod logging;
pub mod sampler;
pub mod server;

pub use arrivals::{ArrivalPattern, ConstantArrivals, PoissonArrivals};
pub use config::ExperimentConfig;
pub use erlang::{erlang_blocking_probability, erlang_p0, factorial, AnalyticReport};
pub use error::{ConfigError, ModelError};
pub use logging::{init_logging, init_logging_with_level};
pub use sampler::{SampleAccumulator, StateSampler};
pub use server::{AdmissionOutcome, Counters, Server};
