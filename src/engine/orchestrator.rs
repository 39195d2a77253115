//! Run orchestration
//!
//! Wires the dispatcher, worker pool, and collector together and holds the
//! shutdown order: the deadline closes the distribution channel, draining
//! workers drop their completion senders as they exit, and the collector
//! returns the frozen table once the completion channel closes.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::bounded;

use super::{collector, dispatcher, worker, ResultTable, WorkUnit};
use crate::report::{write_header, write_summary, RunReport};
use crate::utils::{ConfigError, GrindError, Result};
use crate::workload::Algorithm;

/// Run one bounded load-generation session.
///
/// Resolves the algorithm, writes the header, drives `num_workers` workers
/// for `timeout_secs` seconds, and writes the per-worker summary. The sink
/// also receives one progress dot per second. The first sink error becomes
/// the run's result and suppresses the summary.
///
/// A unit in flight at the deadline instant completes and is counted;
/// workers react only to channel closure, never to the timer, so the run
/// ends within the deadline plus one unit's worst-case duration.
pub fn run<W: Write + Send>(
    data_size: usize,
    timeout_secs: u64,
    num_workers: usize,
    algorithm: &str,
    out: &mut W,
) -> Result<()> {
    let algorithm = Algorithm::parse(algorithm)
        .ok_or_else(|| ConfigError::UnknownAlgorithm(algorithm.to_string()))?;
    if num_workers == 0 {
        return Err(ConfigError::NonPositiveWorkers(num_workers).into());
    }

    write_header(out, num_workers, algorithm, data_size, timeout_secs)?;

    let (unit_tx, unit_rx) = bounded::<WorkUnit>(0);
    let (done_tx, done_rx) = bounded::<usize>(0);
    let deadline = Instant::now() + Duration::from_secs(timeout_secs);

    let (table, sink_result) =
        thread::scope(|s| -> Result<(ResultTable, std::io::Result<()>)> {
            let collector_handle = thread::Builder::new()
                .name("collector".to_string())
                .spawn_scoped(s, move || collector::collect(done_rx, num_workers))?;

            let mut workers = Vec::with_capacity(num_workers);
            for id in 0..num_workers {
                let units = unit_rx.clone();
                let completions = done_tx.clone();
                let handle = thread::Builder::new()
                    .name(format!("worker-{}", id))
                    .spawn_scoped(s, move || worker::work(id, units, completions, algorithm))?;
                workers.push(handle);
            }
            // the workers now hold the only completion senders; the
            // channel closes when the last of them exits
            drop(done_tx);
            drop(unit_rx);

            let sink = &mut *out;
            let dispatcher_handle = thread::Builder::new()
                .name("dispatcher".to_string())
                .spawn_scoped(s, move || {
                    dispatcher::dispatch(unit_tx, deadline, data_size, sink)
                })?;

            let sink_result = dispatcher_handle
                .join()
                .map_err(|_| GrindError::Worker("dispatcher thread panicked".to_string()))?;
            for (id, handle) in workers.into_iter().enumerate() {
                handle
                    .join()
                    .map_err(|_| GrindError::Worker(format!("worker {} panicked", id)))?;
            }
            let table = collector_handle
                .join()
                .map_err(|_| GrindError::Worker("collector thread panicked".to_string()))?;
            Ok((table, sink_result))
        })?;

    sink_result?;

    let report = RunReport::from_table(&table, timeout_secs);
    write_summary(out, &table, &report)?;
    Ok(())
}
