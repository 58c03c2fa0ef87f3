//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::model::SweepParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Model parameters: the storage block size and the sweep range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Physical storage block size S in bytes
    #[serde(default = "default_storage_block_size")]
    pub storage_block_size: u64,
    /// Inclusive lower bound of the block-size sweep
    #[serde(default = "default_min_block_size")]
    pub min_block_size: u64,
    /// Inclusive upper bound of the sweep; when absent, multiplier * S is used
    pub max_block_size: Option<u64>,
    /// Upper-bound multiplier k for the default sweep range [min, k * S]
    #[serde(default = "default_multiplier")]
    pub multiplier: u64,
}

impl ModelConfig {
    /// Resolve the effective sweep parameters
    pub fn sweep_params(&self) -> SweepParams {
        SweepParams {
            storage_block_size: self.storage_block_size,
            min_block_size: self.min_block_size,
            max_block_size: self
                .max_block_size
                .unwrap_or(self.multiplier * self.storage_block_size),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            storage_block_size: default_storage_block_size(),
            min_block_size: default_min_block_size(),
            max_block_size: None,
            multiplier: default_multiplier(),
        }
    }
}

fn default_storage_block_size() -> u64 {
    4096
}

fn default_min_block_size() -> u64 {
    1
}

fn default_multiplier() -> u64 {
    5
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Headerless "block_size, efficiency" pairs file
    pub csv_path: Option<PathBuf>,
    /// Detail CSV with one header row and all per-point columns
    pub detail_csv_path: Option<PathBuf>,
    /// JSON report path
    pub json_path: Option<PathBuf>,
    /// Suppress the console summary
    #[serde(default)]
    pub quiet: bool,
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Compute sweep points across the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
    /// Print timing diagnostics to stderr
    #[serde(default)]
    pub debug: bool,
}
