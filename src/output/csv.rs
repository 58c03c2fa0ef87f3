//! CSV output formatting
//!
//! Two flavors:
//! - a headerless pairs file with one `block_size, efficiency` row per line,
//!   the format downstream correlation/plotting tooling consumes, and
//! - a detail CSV with a header row and every per-point column.
//!
//! Both overwrite the target file on each run.

use crate::model::SweepPoint;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the headerless "block_size, efficiency" pairs file
pub fn write_efficiency_pairs(path: &Path, points: &[SweepPoint]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create pairs file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for point in points {
        writeln!(writer, "{}, {}", point.block_size, point.efficiency)?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write pairs file: {}", path.display()))?;
    Ok(())
}

/// Write the detail CSV with one header row and all per-point columns
pub fn write_detail_csv(path: &Path, points: &[SweepPoint]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "block_size,efficiency,gcd_efficiency,storage_block_reads,distinct_blocks,cycle_bytes"
    )?;
    for point in points {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            point.block_size,
            point.efficiency,
            point.gcd_efficiency,
            point.storage_block_reads,
            point.distinct_blocks,
            point.cycle_bytes
        )?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}
