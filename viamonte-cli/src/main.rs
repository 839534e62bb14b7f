//! Command-line front end: reads a scenario, runs the simulation and
//! prints the ranked routes.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use viamonte_core::prelude::*;

/// Monte Carlo travel-time estimation between two points of a street
/// network with uncertain traffic speeds
#[derive(Parser, Debug)]
#[command(name = "viamonte", version)]
struct Args {
    /// Scenario file; read from stdin when omitted
    input: Option<PathBuf>,

    /// Number of independent trials
    #[arg(long, default_value_t = 100)]
    trials: usize,

    /// Run trials one by one instead of on the worker pool
    #[arg(long)]
    sequential: bool,

    /// Worker threads of the parallel pool
    #[arg(long, default_value_t = 8)]
    workers: usize,

    /// Minimum number of trials handed to a worker at once
    #[arg(long, default_value_t = 10)]
    batch_size: usize,

    /// Sample the street's maximum speed alongside the recorded ones
    #[arg(long)]
    include_max_speed: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        tracing::error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<(), Error> {
    let scenario = match &args.input {
        Some(path) => read_scenario(BufReader::new(File::open(path)?))?,
        None => read_scenario(io::stdin().lock())?,
    };

    let execution = if args.sequential {
        Execution::Sequential
    } else {
        Execution::Parallel {
            workers: args.workers,
            batch: args.batch_size,
        }
    };
    let sampling = if args.include_max_speed {
        SpeedSampling::RecordedWithMax
    } else {
        SpeedSampling::Recorded
    };
    let config = SimulationConfig {
        trials: args.trials,
        execution,
        sampling,
    };

    let ranked = run_simulation(
        scenario.network.graph(),
        &scenario.source,
        &scenario.destination,
        &config,
    )?;

    for result in ranked {
        println!("{:.1}", result.mean_minutes);
        println!("{}", result.path.join(" "));
    }

    Ok(())
}
