//! Configuration validation

use super::*;
use anyhow::Result;

/// Sweeps wider than this are almost certainly a units mistake in the bounds
const MAX_SWEEP_WIDTH: u64 = 100_000_000;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_model(&config.model)?;
    validate_output(&config.output)?;
    Ok(())
}

/// Validate model parameters
pub fn validate_model(model: &ModelConfig) -> Result<()> {
    if model.multiplier == 0 {
        anyhow::bail!("multiplier must be >= 1, got 0");
    }

    let params = model.sweep_params();
    params.validate()?;

    if params.len() > MAX_SWEEP_WIDTH {
        anyhow::bail!(
            "sweep range [{}, {}] spans {} block sizes (limit {})",
            params.min_block_size,
            params.max_block_size,
            params.len(),
            MAX_SWEEP_WIDTH
        );
    }

    if !params.storage_block_size.is_power_of_two() {
        eprintln!(
            "Warning: storage_block_size {} is not a power of 2",
            params.storage_block_size
        );
    }

    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if let (Some(pairs), Some(detail)) = (&output.csv_path, &output.detail_csv_path) {
        if pairs == detail {
            anyhow::bail!(
                "csv and detail-csv point at the same file: {}",
                pairs.display()
            );
        }
    }
    Ok(())
}
