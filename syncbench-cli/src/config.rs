//! Configuration loading from syncbench.toml
//!
//! Settings can be specified in a `syncbench.toml` file in the project root,
//! discovered by walking up from the current directory. CLI flags override
//! file values.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// SyncBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BenchConfig {
    /// Dataset generation parameters
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Execution parameters
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Dataset generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Number of elements to generate
    #[serde(default = "default_len")]
    pub len: usize,
    /// Lower bound of the value range (inclusive)
    #[serde(default)]
    pub min_value: i32,
    /// Upper bound of the value range (inclusive)
    #[serde(default = "default_max_value")]
    pub max_value: i32,
    /// RNG seed; omit for a fresh dataset every invocation
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            len: default_len(),
            min_value: 0,
            max_value: default_max_value(),
            seed: None,
        }
    }
}

fn default_len() -> usize {
    10_000_000
}
fn default_max_value() -> i32 {
    10_000
}

/// Execution parameters for the parallel strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Worker threads per parallel executor
    #[serde(default = "default_threads")]
    pub threads: usize,
    /// Timed runs per strategy
    #[serde(default = "default_runs")]
    pub runs: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            runs: default_runs(),
        }
    }
}

fn default_threads() -> usize {
    32
}
fn default_runs() -> usize {
    5
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory where a JSON copy of each report is saved
    #[serde(default = "default_output_dir")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            directory: default_output_dir(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_output_dir() -> String {
    "target/syncbench".to_string()
}

impl BenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("syncbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# SyncBench Configuration

[dataset]
# Number of elements to generate
len = 10000000
# Inclusive value range
min_value = 0
max_value = 10000
# RNG seed for reproducible datasets (uncomment to enable)
# seed = 42

[runner]
# Worker threads per parallel executor
threads = 32
# Timed runs per strategy
runs = 5

[output]
# Output format: human, json
format = "human"
# Directory for saved JSON reports
directory = "target/syncbench"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.dataset.len, 10_000_000);
        assert_eq!(config.dataset.min_value, 0);
        assert_eq!(config.dataset.max_value, 10_000);
        assert_eq!(config.runner.threads, 32);
        assert_eq!(config.runner.runs, 5);
        assert_eq!(config.output.format, "human");
        assert_eq!(config.output.directory, "target/syncbench");
    }

    #[test]
    fn test_output_directory_key_round_trips() {
        let toml_str = r#"
            [output]
            directory = "reports"
        "#;

        let config: BenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.directory, "reports");
        assert_eq!(config.output.format, "human");

        // The key must survive re-serialization, not be silently dropped
        let round_tripped = toml::to_string(&config).unwrap();
        assert!(round_tripped.contains("directory = \"reports\""));
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [dataset]
            len = 1024
            seed = 7

            [runner]
            threads = 4
        "#;

        let config: BenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.dataset.len, 1024);
        assert_eq!(config.dataset.seed, Some(7));
        assert_eq!(config.runner.threads, 4);
        // Defaults should still apply
        assert_eq!(config.runner.runs, 5);
        assert_eq!(config.dataset.max_value, 10_000);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: BenchConfig = toml::from_str(&BenchConfig::default_toml()).unwrap();
        assert_eq!(config.dataset.len, 10_000_000);
        assert_eq!(config.dataset.seed, None);
    }
}
