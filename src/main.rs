//! blockalign CLI entry point

use anyhow::{Context, Result};
use blockalign::config::{cli::Cli, cli_convert, toml, validator, Config};
use blockalign::model;
use blockalign::output;
use blockalign::stats::SweepSummary;
use std::time::Instant;

fn main() -> Result<()> {
    println!("blockalign v{}", env!("CARGO_PKG_VERSION"));
    println!("Expected read-efficiency modeling for block-size alignment");
    println!();

    // Parse CLI arguments
    let parse_start = Instant::now();
    let cli = Cli::parse_args();
    cli.validate()?;
    let parse_elapsed = parse_start.elapsed();
    if cli.debug {
        eprintln!("DEBUG TIMING: CLI parse: {:.3}s", parse_elapsed.as_secs_f64());
    }

    // Build configuration: TOML file first if given, CLI flags on top
    let config = if let Some(config_path) = &cli.config {
        let file_config = toml::parse_toml_file(config_path)?;
        toml::merge_cli_with_config(&cli, file_config)?
    } else {
        cli_convert::build_config(&cli)?
    };

    // Validate configuration (fails fast before any output is written)
    validator::validate_config(&config)
        .context("Configuration validation failed")?;

    print_configuration(&config);

    if cli.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    run_sweep(&config)
}

/// Run the sweep and emit all requested outputs
fn run_sweep(config: &Config) -> Result<()> {
    let params = config.model.sweep_params();

    let sweep_start = Instant::now();
    let points = if config.runtime.parallel {
        model::run_sweep_parallel(&params)?
    } else {
        model::run_sweep(&params)?
    };
    let sweep_elapsed = sweep_start.elapsed();
    if config.runtime.debug {
        eprintln!("DEBUG TIMING: Sweep: {:.3}s", sweep_elapsed.as_secs_f64());
    }

    let summary = SweepSummary::from_points(&points)
        .context("Sweep produced no points")?;

    if !config.output.quiet {
        println!();
        output::text::print_results(&summary, config, sweep_elapsed);
    }

    if let Some(path) = &config.output.csv_path {
        output::csv::write_efficiency_pairs(path, &points)?;
        println!("Efficiency pairs written to {}", path.display());
    }
    if let Some(path) = &config.output.detail_csv_path {
        output::csv::write_detail_csv(path, &points)?;
        println!("Detail CSV written to {}", path.display());
    }
    if let Some(path) = &config.output.json_path {
        let report = output::json::SweepReport::new(config, summary, points);
        output::json::write_report(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

/// Display the effective configuration before running
fn print_configuration(config: &Config) {
    let params = config.model.sweep_params();

    println!("Configuration:");
    println!("  Storage block size: {}", output::text::format_bytes(params.storage_block_size));
    println!(
        "  Block size sweep:   [{}, {}]",
        output::text::format_number(params.min_block_size),
        output::text::format_number(params.max_block_size)
    );
    println!(
        "  Mode:               {}",
        if config.runtime.parallel { "parallel" } else { "sequential" }
    );
}
