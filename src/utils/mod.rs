//! Utility modules

pub mod error;

pub use error::{ConfigError, GrindError, Result};
