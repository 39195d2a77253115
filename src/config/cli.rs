//! Command-line argument parsing

use clap::Parser;

/// Bounded-duration CPU load generator
///
/// Saturates every worker for a fixed time window with a chosen CPU-bound
/// algorithm and reports per-worker throughput.
#[derive(Parser, Debug, Clone)]
#[command(name = "cpugrind")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Data size in bytes for generated buffers
    #[arg(
        short = 's',
        long = "data-size",
        default_value_t = 65536,
        allow_negative_numbers = true
    )]
    pub data_size: i64,

    /// Run duration in seconds
    #[arg(
        short = 't',
        long = "timeout",
        default_value_t = 10,
        allow_negative_numbers = true
    )]
    pub timeout: i64,

    /// Algorithm to run: sha256, md5, gzip, or all
    #[arg(short = 'a', long = "algorithm", default_value = "sha256")]
    pub algorithm: String,

    /// Number of worker threads (0 = one per available processor)
    #[arg(long = "threads", default_value_t = 0)]
    pub threads: usize,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse CLI arguments from the command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get effective number of worker threads (0 = auto-detect)
    pub fn effective_threads(&self) -> usize {
        if self.threads == 0 {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        } else {
            self.threads
        }
    }
}
