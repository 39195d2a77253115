//! cpugrind - bounded-duration CPU load generator
//!
//! Saturates every available processor for a configured time window with a
//! selected CPU-bound algorithm and reports per-worker throughput.

use std::io::Write;

use anyhow::Result;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use cpugrind::config::{CliArgs, RunConfig};
use cpugrind::engine;

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // diagnostics go to stderr; stdout carries the report
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn run() -> Result<()> {
    let args = CliArgs::parse_args();

    setup_logging(args.verbose, args.quiet);

    let config = RunConfig::from_cli(&args)?;

    let mut out = std::io::stdout();
    for algorithm in &config.algorithms {
        engine::run(
            config.data_size,
            config.timeout_secs,
            config.workers,
            algorithm.as_str(),
            &mut out,
        )?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(2);
    }
}
