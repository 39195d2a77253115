//! Error types for cpugrind

use std::io;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum GrindError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Worker error: {0}")]
    Worker(String),
}

/// Parameter validation errors
///
/// The messages are part of the tool's contract; downstream tooling matches
/// them verbatim, including the quoted offending value.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("size must be positive, but value is '{0}'")]
    NonPositiveSize(i64),

    #[error("timeout must be positive, but value is '{0}'")]
    NonPositiveTimeout(i64),

    #[error("processor count must be positive, but value is '{0}'")]
    NonPositiveWorkers(usize),

    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, GrindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::NonPositiveSize(-3).to_string(),
            "size must be positive, but value is '-3'"
        );
        assert_eq!(
            ConfigError::NonPositiveTimeout(0).to_string(),
            "timeout must be positive, but value is '0'"
        );
        assert_eq!(
            ConfigError::NonPositiveWorkers(0).to_string(),
            "processor count must be positive, but value is '0'"
        );
        assert_eq!(
            ConfigError::UnknownAlgorithm("bad".into()).to_string(),
            "unknown algorithm 'bad'"
        );
    }

    #[test]
    fn test_top_level_wraps_config() {
        let err = GrindError::from(ConfigError::UnknownAlgorithm("x".into()));
        assert_eq!(err.to_string(), "Configuration error: unknown algorithm 'x'");
    }
}
