//! Configuration types for arch-harvest.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for arch-harvest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Scan configuration.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Scan-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Root directory containing one subdirectory per repository.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Source-file extensions to process; files with other extensions are
    /// ignored.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns to exclude from the scan.
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// Per-file read cap in bytes.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: usize,

    /// Content prefix tested for style cues during evidence collection.
    #[serde(default = "default_probe_bytes")]
    pub probe_bytes: usize,

    /// Files shorter than this are skipped entirely.
    #[serde(default = "default_min_file_bytes")]
    pub min_file_bytes: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
            exclude: default_excludes(),
            max_file_bytes: default_max_file_bytes(),
            probe_bytes: default_probe_bytes(),
            min_file_bytes: default_min_file_bytes(),
        }
    }
}

/// Output-sink configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Dataset file path.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("repos")
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

fn default_excludes() -> Vec<String> {
    vec![
        "**/target/**".to_string(),
        "**/build/**".to_string(),
        "**/.git/**".to_string(),
    ]
}

fn default_max_file_bytes() -> usize {
    5_000_000
}

fn default_probe_bytes() -> usize {
    50_000
}

fn default_min_file_bytes() -> usize {
    50
}

fn default_output_path() -> PathBuf {
    PathBuf::from("architecture_aware_anti_patterns.csv")
}

/// Errors loading or parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse the config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
