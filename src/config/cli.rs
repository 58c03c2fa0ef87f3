//! CLI argument parsing using clap

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// blockalign - Expected read-efficiency modeling for block-size alignment
#[derive(Parser, Debug)]
#[command(name = "blockalign")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Storage block size S (e.g., 4k, 512, 1M)
    #[arg(short = 's', long, default_value = "4k")]
    pub storage_block_size: String,

    /// Smallest logical block size in the sweep (e.g., 1, 512, 1k)
    #[arg(short = 'a', long, default_value = "1")]
    pub min_block_size: String,

    /// Largest logical block size in the sweep; defaults to multiplier * S
    #[arg(short = 'b', long)]
    pub max_block_size: Option<String>,

    /// Sweep upper-bound multiplier k, used when --max-block-size is absent
    #[arg(short = 'k', long, default_value = "5")]
    pub multiplier: u64,

    // === Output Options ===
    /// Write headerless "block_size, efficiency" pairs to this file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write a detail CSV (header row, all per-point columns) to this file
    #[arg(long)]
    pub detail_csv: Option<PathBuf>,

    /// Write a full JSON report to this file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Suppress the console summary
    #[arg(short = 'q', long)]
    pub quiet: bool,

    // === Runtime Options ===
    /// TOML configuration file (CLI flags take precedence)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Compute sweep points in parallel across the rayon thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Validate configuration and exit without computing
    #[arg(long)]
    pub dry_run: bool,

    /// Print timing diagnostics to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Early checks that do not need size-string parsing
    pub fn validate(&self) -> Result<()> {
        if self.multiplier == 0 {
            anyhow::bail!("multiplier must be >= 1, got 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["blockalign"]);
        assert_eq!(cli.storage_block_size, "4k");
        assert_eq!(cli.min_block_size, "1");
        assert!(cli.max_block_size.is_none());
        assert_eq!(cli.multiplier, 5);
        assert!(!cli.parallel);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        let cli = Cli::parse_from(["blockalign", "--multiplier", "0"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_output_paths() {
        let cli = Cli::parse_from([
            "blockalign",
            "--csv",
            "pairs.txt",
            "--json",
            "report.json",
        ]);
        assert_eq!(cli.csv.unwrap(), PathBuf::from("pairs.txt"));
        assert_eq!(cli.json.unwrap(), PathBuf::from("report.json"));
        assert!(cli.detail_csv.is_none());
    }
}
