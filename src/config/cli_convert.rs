//! CLI to Config conversion utilities

use crate::config::cli::Cli;
use crate::config::{Config, ModelConfig, OutputConfig, RuntimeConfig};
use anyhow::{Context, Result};

/// Parse a size string (e.g., "1G", "100M", "4k") to bytes
pub fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if s.ends_with("k") || s.ends_with("kb") {
        (s.trim_end_matches("kb").trim_end_matches("k"), 1024u64)
    } else if s.ends_with("m") || s.ends_with("mb") {
        (s.trim_end_matches("mb").trim_end_matches("m"), 1024 * 1024)
    } else if s.ends_with("g") || s.ends_with("gb") {
        (s.trim_end_matches("gb").trim_end_matches("g"), 1024 * 1024 * 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str.parse()
        .with_context(|| format!("Invalid size format: {}", s))?;

    Ok(num * multiplier)
}

/// Build a complete Config from CLI arguments
pub fn build_config(cli: &Cli) -> Result<Config> {
    let storage_block_size = parse_size(&cli.storage_block_size)
        .context("Invalid storage block size")?;
    let min_block_size = parse_size(&cli.min_block_size)
        .context("Invalid minimum block size")?;

    let max_block_size = match &cli.max_block_size {
        Some(s) => Some(parse_size(s).context("Invalid maximum block size")?),
        None => None,
    };

    Ok(Config {
        model: ModelConfig {
            storage_block_size,
            min_block_size,
            max_block_size,
            multiplier: cli.multiplier,
        },
        output: OutputConfig {
            csv_path: cli.csv.clone(),
            detail_csv_path: cli.detail_csv.clone(),
            json_path: cli.json.clone(),
            quiet: cli.quiet,
        },
        runtime: RuntimeConfig {
            parallel: cli.parallel,
            debug: cli.debug,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_size_bytes() {
        assert_eq!(parse_size("4096").unwrap(), 4096);
        assert_eq!(parse_size("1").unwrap(), 1);
    }

    #[test]
    fn test_parse_size_kb() {
        assert_eq!(parse_size("4k").unwrap(), 4096);
        assert_eq!(parse_size("4K").unwrap(), 4096);
        assert_eq!(parse_size("4kb").unwrap(), 4096);
        assert_eq!(parse_size("4KB").unwrap(), 4096);
    }

    #[test]
    fn test_parse_size_mb_gb() {
        assert_eq!(parse_size("1m").unwrap(), 1024 * 1024);
        assert_eq!(parse_size("2G").unwrap(), 2 * 1024 * 1024 * 1024);
    }

    #[test]
    fn test_parse_size_invalid() {
        assert!(parse_size("abc").is_err());
        assert!(parse_size("4x").is_err());
        assert!(parse_size("").is_err());
    }

    #[test]
    fn test_build_config_defaults() {
        let cli = Cli::parse_from(["blockalign"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.model.storage_block_size, 4096);
        assert_eq!(config.model.min_block_size, 1);
        assert!(config.model.max_block_size.is_none());
        assert_eq!(config.model.sweep_params().max_block_size, 5 * 4096);
    }

    #[test]
    fn test_build_config_explicit_range() {
        let cli = Cli::parse_from([
            "blockalign", "-s", "512", "-a", "256", "-b", "2k", "--parallel",
        ]);
        let config = build_config(&cli).unwrap();
        let params = config.model.sweep_params();
        assert_eq!(params.storage_block_size, 512);
        assert_eq!(params.min_block_size, 256);
        assert_eq!(params.max_block_size, 2048);
        assert!(config.runtime.parallel);
    }
}
