//! Command-line driver for the Erlang-B loss simulator.
//!
//! Runs a single experiment or a sweep over several arrival intervals, prints
//! the empirical and theoretical results side by side, and optionally exports
//! the comparison table as CSV (for plotting) or JSON.

use clap::{Args, Parser, Subcommand};
use loss_core::{
    init_logging_with_level, AnalyticReport, ArrivalPattern, ConstantArrivals, ExperimentConfig,
    PoissonArrivals,
};
use loss_metrics::{export_csv, export_json, ComparisonRow, EmpiricalReport};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

mod runner;

use runner::run_experiment;

/// Erlang-B loss-system simulator
///
/// Simulates an n-channel loss system (no waiting room, blocked requests are
/// dropped) and validates the measured statistics against the closed-form
/// Erlang-B model.
#[derive(Parser)]
#[command(name = "loss-sim", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one experiment at a fixed arrival interval
    Run {
        /// Arrival interval in milliseconds
        #[arg(long, default_value_t = 50)]
        interval_ms: u64,

        #[command(flatten)]
        params: RunParams,

        #[command(flatten)]
        output: OutputParams,
    },

    /// Repeat the experiment across several arrival intervals
    Sweep {
        /// Arrival intervals to sweep, in milliseconds
        #[arg(
            long,
            value_delimiter = ',',
            default_value = "20,30,40,50,75,100,150,200"
        )]
        intervals_ms: Vec<u64>,

        #[command(flatten)]
        params: RunParams,

        #[command(flatten)]
        output: OutputParams,
    },
}

#[derive(Args)]
struct RunParams {
    /// Number of service channels
    #[arg(short = 'n', long, default_value_t = 5)]
    channels: usize,

    /// Requests to submit per run
    #[arg(short = 'r', long, default_value_t = 100)]
    requests: u64,

    /// Service time per request in milliseconds
    #[arg(long, default_value_t = 500)]
    service_ms: u64,

    /// Occupancy sampling interval in milliseconds
    #[arg(long, default_value_t = 10)]
    sample_ms: u64,

    /// Observation window after the last arrival, in milliseconds
    #[arg(long, default_value_t = 1000)]
    drain_ms: u64,

    /// Draw exponential inter-arrival gaps instead of a fixed interval
    #[arg(long)]
    poisson: bool,

    /// Seed for Poisson arrivals (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct OutputParams {
    /// Write the comparison table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the comparison table to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

impl RunParams {
    fn config(&self, interval_ms: u64) -> ExperimentConfig {
        ExperimentConfig {
            channels: self.channels,
            total_requests: self.requests,
            arrival_interval: Duration::from_millis(interval_ms),
            service_time: Duration::from_millis(self.service_ms),
            sample_interval: Duration::from_millis(self.sample_ms),
            drain_window: Duration::from_millis(self.drain_ms),
        }
    }

    fn arrivals(&self, config: &ExperimentConfig, point: u64) -> Box<dyn ArrivalPattern> {
        if self.poisson {
            let rate = config.lambda();
            match self.seed {
                Some(seed) => Box::new(PoissonArrivals::with_seed(rate, seed.wrapping_add(point))),
                None => Box::new(PoissonArrivals::new(rate)),
            }
        } else {
            Box::new(ConstantArrivals::new(config.arrival_interval))
        }
    }
}

fn run_point(params: &RunParams, interval_ms: u64, point: u64) -> anyhow::Result<ComparisonRow> {
    let config = params.config(interval_ms);
    let lambda = config.lambda();
    let mu = config.mu();

    println!("channels:             {}", config.channels);
    println!("requests:             {}", config.total_requests);
    println!("arrival interval:     {} ms", interval_ms);
    println!("service time:         {} ms", params.service_ms);
    println!("lambda:               {:.4} req/s", lambda);
    println!("mu:                   {:.4} req/s", mu);

    let mut arrivals = params.arrivals(&config, point);
    let observations = run_experiment(&config, arrivals.as_mut())?;

    let counters = observations.counters;
    println!("\nsubmitted:            {}", counters.requests);
    println!("processed:            {}", counters.processed);
    println!("rejected:             {}", counters.rejected);

    let empirical =
        EmpiricalReport::from_observations(counters, &observations.sampler, lambda, mu);
    let analytic = AnalyticReport::compute(lambda, mu, config.channels as i32)?;

    println!("\n--- experimental ---\n{empirical}");
    println!("\n--- theoretical ----\n{analytic}\n");

    Ok(ComparisonRow {
        arrival_interval_ms: interval_ms as f64,
        lambda,
        empirical,
        analytic,
    })
}

fn write_outputs(rows: &[ComparisonRow], output: &OutputParams) -> anyhow::Result<()> {
    if let Some(path) = &output.csv {
        export_csv(rows, path)?;
        info!(path = %path.display(), "wrote CSV results");
    }
    if let Some(path) = &output.json {
        export_json(rows, path, true)?;
        info!(path = %path.display(), "wrote JSON results");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_with_level(&cli.log_level);

    match &cli.command {
        Commands::Run {
            interval_ms,
            params,
            output,
        } => {
            let row = run_point(params, *interval_ms, 0)?;
            write_outputs(&[row], output)?;
        }
        Commands::Sweep {
            intervals_ms,
            params,
            output,
        } => {
            let mut rows = Vec::with_capacity(intervals_ms.len());
            for (point, interval_ms) in intervals_ms.iter().enumerate() {
                println!("=== sweep point {} of {} ===", point + 1, intervals_ms.len());
                rows.push(run_point(params, *interval_ms, point as u64)?);
            }
            write_outputs(&rows, output)?;
        }
    }
    Ok(())
}
