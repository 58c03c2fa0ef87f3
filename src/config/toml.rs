//! TOML configuration file parsing

use crate::config::cli::Cli;
use crate::config::cli_convert::parse_size;
use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
///
/// Flags still at their clap defaults leave the TOML values untouched.
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    if cli.storage_block_size != "4k" {
        config.model.storage_block_size = parse_size(&cli.storage_block_size)
            .context("Invalid storage block size")?;
    }
    if cli.min_block_size != "1" {
        config.model.min_block_size = parse_size(&cli.min_block_size)
            .context("Invalid minimum block size")?;
    }
    if let Some(max_str) = &cli.max_block_size {
        config.model.max_block_size =
            Some(parse_size(max_str).context("Invalid maximum block size")?);
    }
    if cli.multiplier != 5 {
        config.model.multiplier = cli.multiplier;
    }

    if let Some(path) = &cli.csv {
        config.output.csv_path = Some(path.clone());
    }
    if let Some(path) = &cli.detail_csv {
        config.output.detail_csv_path = Some(path.clone());
    }
    if let Some(path) = &cli.json {
        config.output.json_path = Some(path.clone());
    }
    if cli.quiet {
        config.output.quiet = true;
    }

    if cli.parallel {
        config.runtime.parallel = true;
    }
    if cli.debug {
        config.runtime.debug = true;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_minimal_toml() {
        let config = parse_toml_string("").unwrap();
        assert_eq!(config.model.storage_block_size, 4096);
        assert_eq!(config.model.min_block_size, 1);
        assert!(!config.runtime.parallel);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
            [model]
            storage_block_size = 512
            min_block_size = 64
            max_block_size = 1024

            [output]
            csv_path = "pairs.txt"
            quiet = true

            [runtime]
            parallel = true
        "#;
        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.model.storage_block_size, 512);
        assert_eq!(config.model.max_block_size, Some(1024));
        assert!(config.output.quiet);
        assert!(config.runtime.parallel);
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(parse_toml_string("model = 5").is_err());
        assert!(parse_toml_string("[model]\nstorage_block_size = \"big\"").is_err());
    }

    #[test]
    fn test_cli_overrides_toml() {
        let toml = r#"
            [model]
            storage_block_size = 512
            min_block_size = 64
        "#;
        let config = parse_toml_string(toml).unwrap();
        let cli = Cli::parse_from(["blockalign", "-s", "8k", "--parallel"]);
        let merged = merge_cli_with_config(&cli, config).unwrap();
        // CLI wins where given, TOML survives where the CLI is at defaults
        assert_eq!(merged.model.storage_block_size, 8192);
        assert_eq!(merged.model.min_block_size, 64);
        assert!(merged.runtime.parallel);
    }
}
