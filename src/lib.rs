//! blockalign - Expected read-efficiency modeling
//!
//! blockalign models the disk-read efficiency penalty a program pays when its
//! logical block size is misaligned with the underlying storage block size.
//! For every block size in a sweep range it simulates the cyclic read pattern
//! until logical reads realign with a storage-block boundary, and reports the
//! ratio of distinct storage blocks needed to storage-block reads incurred,
//! alongside the closed-form gcd(B, S)/S predictor.
//!
//! # Architecture
//!
//! - **Deterministic model**: pure integer arithmetic, no I/O in the kernel
//! - **Flexible configuration**: CLI flags, TOML config files, merged with CLI precedence
//! - **Multiple outputs**: console summary, pairs/detail CSV, JSON report
//! - **Parallel sweep**: optional rayon-backed sweep, order preserved

pub mod config;
pub mod model;
pub mod output;
pub mod stats;

// Re-export commonly used types
pub use config::Config;
pub use model::{SweepParams, SweepPoint};

/// Result type used throughout blockalign
pub type Result<T> = anyhow::Result<T>;
