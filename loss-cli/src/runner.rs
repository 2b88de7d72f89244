//! Wall-clock experiment driver
//!
//! Submits requests at the configured cadence, polls the occupancy sampler in
//! the gaps between arrivals (sub-arrival granularity, so the samples do not
//! alias with the arrival period), and keeps observing through a drain window
//! after the last arrival.

use loss_core::{ArrivalPattern, ConfigError, Counters, ExperimentConfig, Server, StateSampler};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Raw observations of one finished run.
pub struct RunObservations {
    pub counters: Counters,
    pub sampler: StateSampler,
}

/// Run one experiment to completion.
pub fn run_experiment(
    config: &ExperimentConfig,
    arrivals: &mut dyn ArrivalPattern,
) -> Result<RunObservations, ConfigError> {
    config.validate()?;

    let server = Server::new(config.channels, config.service_time);
    let mut sampler = StateSampler::new(config.channels);

    info!(
        channels = config.channels,
        requests = config.total_requests,
        service_ms = config.service_time.as_millis() as u64,
        "starting run"
    );

    for id in 1..=config.total_requests {
        server.submit(id);
        pace(&server, &mut sampler, arrivals.next_arrival(), config.sample_interval);
    }
    pace(&server, &mut sampler, config.drain_window, config.sample_interval);

    // Let straggling service workers release their channels before reading
    // the final state.
    let settled = server.wait_idle(
        config.sample_interval,
        config.service_time + Duration::from_secs(1),
    );
    debug!(settled, "run finished");

    Ok(RunObservations {
        counters: server.counters(),
        sampler,
    })
}

/// Wait out `gap`, polling the sampler every `tick` along the way.
fn pace(server: &Server, sampler: &mut StateSampler, gap: Duration, tick: Duration) {
    let deadline = Instant::now() + gap;
    loop {
        sampler.poll(server);
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep(tick.min(deadline - now));
    }
}
