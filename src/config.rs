//! Benchmark configuration.
//!
//! The benchmark takes no command-line arguments; parameters come from an
//! optional `flowbench.toml` in the working directory, falling back to the
//! defaults of the reference workload (200 copy stages, 20 million samples,
//! entropy-seeded generator).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default number of copy stages
pub const DEFAULT_N_COPY: usize = 200;

/// Default number of samples pushed through the chain
pub const DEFAULT_N_SAMPLES: usize = 20_000_000;

/// Config filename looked up in the working directory
pub const CONFIG_FILE: &str = "flowbench.toml";

/// Errors while loading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Benchmark parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Number of pass-through stages in the chain (must be >= 1).
    pub n_copy: usize,
    /// Number of samples generated and pushed through the chain.
    pub n_samples: usize,
    /// Optional RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            n_copy: DEFAULT_N_COPY,
            n_samples: DEFAULT_N_SAMPLES,
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Load `flowbench.toml` from the working directory if present, falling
    /// back to defaults (with a warning on unreadable/invalid files).
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", CONFIG_FILE, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_workload() {
        let config = BenchConfig::default();
        assert_eq!(config.n_copy, 200);
        assert_eq!(config.n_samples, 20_000_000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "n_copy = 8\nn_samples = 1024\nseed = 3").unwrap();

        let config = BenchConfig::load(file.path()).unwrap();
        assert_eq!(config.n_copy, 8);
        assert_eq!(config.n_samples, 1024);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "n_copy = 4").unwrap();

        let config = BenchConfig::load(file.path()).unwrap();
        assert_eq!(config.n_copy, 4);
        assert_eq!(config.n_samples, DEFAULT_N_SAMPLES);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(matches!(
            BenchConfig::load("/nonexistent/flowbench.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
