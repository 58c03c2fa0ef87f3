//! JSON report output
//!
//! Serializes the complete run (tool version, host, timestamp, configuration
//! echo, summary statistics, and every sweep point) so downstream tooling can
//! reprocess a run without recomputing it.

use crate::config::Config;
use crate::model::SweepPoint;
use crate::stats::SweepSummary;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Complete JSON report for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// Tool version that produced the report
    pub version: String,
    /// Host the report was generated on
    pub hostname: Option<String>,
    /// RFC 3339 generation timestamp
    pub generated_at: String,
    /// Configuration the sweep ran with
    pub config: Config,
    pub summary: SweepSummary,
    pub points: Vec<SweepPoint>,
}

impl SweepReport {
    /// Assemble a report for a finished sweep
    pub fn new(config: &Config, summary: SweepSummary, points: Vec<SweepPoint>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            hostname: hostname::get().ok().and_then(|h| h.into_string().ok()),
            generated_at: chrono::Utc::now().to_rfc3339(),
            config: config.clone(),
            summary,
            points,
        }
    }
}

/// Write a pretty-printed JSON report, overwriting any existing file
pub fn write_report(path: &Path, report: &SweepReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON report: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report)
        .with_context(|| format!("Failed to write JSON report: {}", path.display()))?;
    Ok(())
}
