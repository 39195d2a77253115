//! Run statistics and report formatting
//!
//! The report layout is tab-aligned plain text scraped by downstream
//! tooling; literal spacing is part of the contract.

use std::io::Write;

use crate::workload::Algorithm;

/// Aggregate throughput statistics derived from a frozen result table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub total: u64,
    pub elapsed_secs: u64,
    pub workers: usize,
    pub avg_per_second: u64,
    pub avg_per_processor: u64,
    pub avg_per_proc_second: u64,
}

impl RunReport {
    /// Compute the report from per-worker counts and the configured
    /// duration.
    ///
    /// Averages are rounded to the nearest integer for display. Callers
    /// guarantee a non-empty table and a positive duration.
    pub fn from_table(counts: &[u64], elapsed_secs: u64) -> Self {
        let total: u64 = counts.iter().sum();
        let workers = counts.len();
        let avg_per_second = total as f64 / elapsed_secs as f64;
        let avg_per_processor = total as f64 / workers as f64;
        let avg_per_proc_second = avg_per_second / workers as f64;
        Self {
            total,
            elapsed_secs,
            workers,
            avg_per_second: avg_per_second.round() as u64,
            avg_per_processor: avg_per_processor.round() as u64,
            avg_per_proc_second: avg_per_proc_second.round() as u64,
        }
    }
}

/// Write the run header.
///
/// The trailing dot opens the progress row; the flush makes it visible on
/// line-buffered sinks.
pub fn write_header<W: Write>(
    out: &mut W,
    workers: usize,
    algorithm: Algorithm,
    data_size: usize,
    timeout_secs: u64,
) -> std::io::Result<()> {
    writeln!(out, "\nProcessors\t{}", workers)?;
    writeln!(out, "Op. system\t{}", std::env::consts::OS)?;
    writeln!(out, "Architecture\t{}", std::env::consts::ARCH)?;
    writeln!(out, "Algorithm\t{}", algorithm)?;
    writeln!(out, "Data size\t{} bytes", data_size)?;
    write!(out, "Duration\t{} seconds\n.", timeout_secs)?;
    out.flush()
}

/// Write the per-worker table and the aggregate statistics.
pub fn write_summary<W: Write>(
    out: &mut W,
    counts: &[u64],
    report: &RunReport,
) -> std::io::Result<()> {
    writeln!(out, "\nResults")?;
    for (id, count) in counts.iter().enumerate() {
        writeln!(out, "Worker {}\t{}", id + 1, count)?;
    }
    writeln!(out, "---\nTotal\t\t\t{}", report.total)?;
    writeln!(out, "Avg per second\t\t{}", report.avg_per_second)?;
    writeln!(out, "Avg per processor\t{}", report.avg_per_processor)?;
    writeln!(out, "Avg per proc/second\t{}", report.avg_per_proc_second)
}
