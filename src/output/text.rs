//! Human-readable text output

use crate::config::Config;
use crate::stats::SweepSummary;

/// Print sweep results to console
///
/// Displays the effective sweep parameters, efficiency statistics, the
/// best/worst block sizes, and the correlation against the gcd predictor.
pub fn print_results(summary: &SweepSummary, config: &Config, duration: std::time::Duration) {
    let params = config.model.sweep_params();

    println!("═══════════════════════════════════════════════════════════");
    println!("                    SWEEP RESULTS");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    println!("Elapsed Time: {:.3}s", duration.as_secs_f64());
    println!();

    println!("Sweep:");
    println!("  Storage block size: {}", format_bytes(params.storage_block_size));
    println!(
        "  Block size range:   {} .. {}",
        format_number(params.min_block_size),
        format_number(params.max_block_size)
    );
    println!("  Block sizes swept:  {}", format_number(summary.points as u64));
    println!();

    println!("Read Efficiency:");
    println!("  Min:  {:.6} (block size {})", summary.min_efficiency, format_number(summary.worst_block_size));
    println!("  Mean: {:.6}", summary.mean_efficiency);
    println!("  Max:  {:.6} (block size {})", summary.max_efficiency, format_number(summary.best_block_size));
    println!();

    println!("Alignment:");
    println!(
        "  Perfectly aligned block sizes: {} of {}",
        format_number(summary.perfect_alignments as u64),
        format_number(summary.points as u64)
    );
    match summary.efficiency_gcd_correlation {
        Some(r) => println!("  Pearson r vs gcd predictor:    {:.6}", r),
        None => println!("  Pearson r vs gcd predictor:    undefined"),
    }

    println!();
    println!("═══════════════════════════════════════════════════════════");
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;

    for c in s.chars().rev() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}

/// Format bytes with appropriate units
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB && bytes % GB == 0 {
        format!("{} GB", bytes / GB)
    } else if bytes >= MB && bytes % MB == 0 {
        format!("{} MB", bytes / MB)
    } else if bytes >= KB && bytes % KB == 0 {
        format!("{} KB", bytes / KB)
    } else {
        format!("{} B", bytes)
    }
}
