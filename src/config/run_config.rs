//! Validated run configuration

use super::CliArgs;
use crate::utils::ConfigError;
use crate::workload::Algorithm;

/// Check size, timeout, and the algorithm selector, resolving the "all"
/// literal to every production algorithm in fixed order.
pub fn validate(size: i64, timeout: i64, algorithm: &str) -> Result<Vec<Algorithm>, ConfigError> {
    if size < 1 {
        return Err(ConfigError::NonPositiveSize(size));
    }
    if timeout < 1 {
        return Err(ConfigError::NonPositiveTimeout(timeout));
    }
    if algorithm == "all" {
        return Ok(Algorithm::PRODUCTION.to_vec());
    }
    match Algorithm::parse(algorithm) {
        Some(a) => Ok(vec![a]),
        None => Err(ConfigError::UnknownAlgorithm(algorithm.to_string())),
    }
}

/// Validated parameters for one load-generation session
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Buffer size in bytes for generated work units
    pub data_size: usize,
    /// Wall-clock duration of each run
    pub timeout_secs: u64,
    /// Worker pool size
    pub workers: usize,
    /// Algorithms to run, one session each
    pub algorithms: Vec<Algorithm>,
}

impl RunConfig {
    /// Build from parsed CLI arguments, applying the validation rules
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        let algorithms = validate(args.data_size, args.timeout, &args.algorithm)?;
        Ok(Self {
            data_size: args.data_size as usize,
            timeout_secs: args.timeout as u64,
            workers: args.effective_threads(),
            algorithms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_rejects_non_positive_size() {
        let err = validate(0, 0, "").unwrap_err();
        assert_eq!(err.to_string(), "size must be positive, but value is '0'");
    }

    #[test]
    fn test_rejects_non_positive_timeout() {
        let err = validate(1, 0, "").unwrap_err();
        assert_eq!(err.to_string(), "timeout must be positive, but value is '0'");
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        let err = validate(1, 1, "bad").unwrap_err();
        assert_eq!(err.to_string(), "unknown algorithm 'bad'");
    }

    #[test]
    fn test_all_resolves_to_sorted_production_set() {
        let algorithms = validate(10, 10, "all").unwrap();
        let names: Vec<&str> = algorithms.iter().map(|a| a.as_str()).collect();
        assert_eq!(names, vec!["gzip", "md5", "sha256"]);
    }

    #[test]
    fn test_single_algorithm_selection() {
        assert_eq!(validate(1, 1, "md5").unwrap(), vec![Algorithm::Md5]);
        assert_eq!(validate(1, 1, "test").unwrap(), vec![Algorithm::Test]);
    }

    #[test]
    fn test_size_checked_before_timeout() {
        let err = validate(-2, -3, "bad").unwrap_err();
        assert_eq!(err.to_string(), "size must be positive, but value is '-2'");
    }

    #[test]
    fn test_from_cli_maps_arguments() {
        let args = CliArgs::parse_from(["cpugrind", "-s", "512", "-t", "2", "-a", "all", "--threads", "3"]);
        let config = RunConfig::from_cli(&args).unwrap();
        assert_eq!(config.data_size, 512);
        assert_eq!(config.timeout_secs, 2);
        assert_eq!(config.workers, 3);
        assert_eq!(config.algorithms.len(), 3);
    }

    #[test]
    fn test_from_cli_rejects_invalid_args() {
        let args = CliArgs::parse_from(["cpugrind", "-t", "-5"]);
        assert!(RunConfig::from_cli(&args).is_err());
    }
}
