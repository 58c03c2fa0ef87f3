//! Sweep statistics
//!
//! Aggregates a finished sweep into the numbers the console and JSON reports
//! show, including the Pearson correlation between the simulated efficiency
//! series and its closed-form gcd predictor. A correlation near 1 across the
//! sweep is the expected cross-validation of simulation against theory.

use crate::model::SweepPoint;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over one sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSummary {
    /// Number of block sizes swept
    pub points: usize,
    pub min_efficiency: f64,
    pub mean_efficiency: f64,
    pub max_efficiency: f64,
    /// Block size with the lowest simulated efficiency
    pub worst_block_size: u64,
    /// Block size with the highest simulated efficiency
    pub best_block_size: u64,
    /// Block sizes whose efficiency is exactly 1 (perfectly aligned)
    pub perfect_alignments: usize,
    /// Pearson r between simulated and gcd efficiency, None if undefined
    pub efficiency_gcd_correlation: Option<f64>,
}

impl SweepSummary {
    /// Summarize a non-empty sweep; returns None for an empty one
    pub fn from_points(points: &[SweepPoint]) -> Option<Self> {
        let first = points.first()?;

        let mut min = first;
        let mut max = first;
        let mut sum = 0.0;
        let mut perfect = 0;
        for point in points {
            if point.efficiency < min.efficiency {
                min = point;
            }
            if point.efficiency > max.efficiency {
                max = point;
            }
            sum += point.efficiency;
            if point.efficiency == 1.0 {
                perfect += 1;
            }
        }

        let simulated: Vec<f64> = points.iter().map(|p| p.efficiency).collect();
        let predicted: Vec<f64> = points.iter().map(|p| p.gcd_efficiency).collect();

        Some(Self {
            points: points.len(),
            min_efficiency: min.efficiency,
            mean_efficiency: sum / points.len() as f64,
            max_efficiency: max.efficiency,
            worst_block_size: min.block_size,
            best_block_size: max.block_size,
            perfect_alignments: perfect,
            efficiency_gcd_correlation: pearson_r(&simulated, &predicted),
        })
    }
}

/// Sample Pearson correlation coefficient between two equal-length series.
///
/// Returns None when the series are shorter than 2 points, have mismatched
/// lengths, or either has zero variance (the coefficient is undefined there).
pub fn pearson_r(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}
