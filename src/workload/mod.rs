//! Workload generation and CPU-bound transforms

pub mod algorithm;
pub mod generator;
pub mod transforms;

pub use algorithm::Algorithm;
pub use generator::{generate, SIZE_SPREAD};
