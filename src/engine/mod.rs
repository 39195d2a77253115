//! Concurrent workload engine
//!
//! Fan-out/fan-in pipeline. A dispatcher produces work units and feeds a
//! fixed pool of workers over a rendezvous channel until a wall-clock
//! deadline fires. Workers apply the configured algorithm and acknowledge
//! each completion, and a collector folds the acknowledgements into
//! per-worker counts.

mod collector;
mod dispatcher;
mod orchestrator;
mod worker;

pub use orchestrator::run;

/// Owned byte buffer handed from the dispatcher to exactly one worker
pub type WorkUnit = Vec<u8>;

/// Completion counts indexed by worker identity
pub type ResultTable = Vec<u64>;
