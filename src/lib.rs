//! cpugrind library
//!
//! Bounded-duration CPU load generator: a dispatcher feeds randomized
//! buffers to a fixed pool of workers running a CPU-bound algorithm until
//! a wall-clock deadline, and the per-worker completion counts become a
//! throughput report.

pub mod config;
pub mod engine;
pub mod report;
pub mod utils;
pub mod workload;

pub use engine::run;
pub use utils::{ConfigError, GrindError, Result};
