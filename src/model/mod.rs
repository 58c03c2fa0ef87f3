//! Read-efficiency model
//!
//! The kernel of blockalign: pure integer arithmetic that predicts how many
//! storage blocks a sequence of logical block-sized reads touches, and how
//! that compares to the number of distinct storage blocks actually needed.
//!
//! For a logical block size B and storage block size S, logical read windows
//! `[index, index + B - 1]` are issued with `index` advancing by B until it
//! realigns with a storage-block boundary. That happens after exactly
//! `lcm(B, S) / B` windows. The ratio of distinct storage blocks spanned by
//! the cycle to the total storage-block touches incurred is the steady-state
//! read efficiency, and gcd(B, S)/S is its closed-form theoretical predictor.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain-input violations. Raised before any computation starts; a sweep
/// either validates and runs to completion or produces nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("storage_block_size must be >= 1")]
    ZeroStorageBlockSize,

    #[error("min_block_size must be >= 1")]
    ZeroMinBlockSize,

    #[error("min_block_size ({min}) must be <= max_block_size ({max})")]
    InvertedRange { min: u64, max: u64 },
}

/// Parameters of one efficiency sweep
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SweepParams {
    /// Physical device block size S
    pub storage_block_size: u64,
    /// Inclusive lower bound of the logical block-size range
    pub min_block_size: u64,
    /// Inclusive upper bound of the logical block-size range
    pub max_block_size: u64,
}

impl SweepParams {
    /// Check the domain invariants before running
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.storage_block_size == 0 {
            return Err(ModelError::ZeroStorageBlockSize);
        }
        if self.min_block_size == 0 {
            return Err(ModelError::ZeroMinBlockSize);
        }
        if self.min_block_size > self.max_block_size {
            return Err(ModelError::InvertedRange {
                min: self.min_block_size,
                max: self.max_block_size,
            });
        }
        Ok(())
    }

    /// Number of block sizes in the sweep
    pub fn len(&self) -> u64 {
        self.max_block_size - self.min_block_size + 1
    }
}

/// One measurement of the sweep: a block size and everything the model
/// derived for it over a single realignment cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Logical block size B
    pub block_size: u64,
    /// distinct_blocks / storage_block_reads, in (0, 1]
    pub efficiency: f64,
    /// gcd(B, S) / S, the closed-form predictor
    pub gcd_efficiency: f64,
    /// Total storage-block touches over the cycle
    pub storage_block_reads: u64,
    /// Distinct storage blocks spanned by the cycle
    pub distinct_blocks: u64,
    /// Cycle length in bytes (= lcm(B, S))
    pub cycle_bytes: u64,
}

/// Count the distinct storage blocks of size `storage_block_size` overlapped
/// by the inclusive byte range `[start, end]`.
///
/// Storage blocks partition the address space into size-S intervals aligned
/// at multiples of S, so the count is the difference of the block-aligned
/// endpoints divided by S, plus one for the start block. A single-byte range
/// still touches exactly one block.
pub fn touched_blocks(storage_block_size: u64, start: u64, end: u64) -> u64 {
    debug_assert!(storage_block_size > 0);
    debug_assert!(start <= end);

    let first = (start / storage_block_size) * storage_block_size;
    let last = (end / storage_block_size) * storage_block_size;
    (last - first) / storage_block_size + 1
}

/// Greatest common divisor (iterative Euclid)
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple. Divides before multiplying to keep intermediate
/// values in range.
pub fn lcm(a: u64, b: u64) -> u64 {
    debug_assert!(a > 0 && b > 0);
    (a / gcd(a, b)) * b
}

/// Profile a single block size against a fixed storage block size.
///
/// Advances a read cursor in steps of `block_size`, accumulating per-window
/// touch counts, until the cursor realigns with a storage-block boundary.
/// The loop guard requires at least one window before the `index % S == 0`
/// exit can fire, so a cursor starting aligned at 0 still issues a full
/// cycle. Callers must have validated `block_size >= 1` and
/// `storage_block_size >= 1`.
pub fn profile_block_size(block_size: u64, storage_block_size: u64) -> SweepPoint {
    debug_assert!(block_size > 0 && storage_block_size > 0);

    let mut index: u64 = 0;
    let mut reads: u64 = 0;
    while index % storage_block_size != 0 || reads == 0 {
        reads += touched_blocks(storage_block_size, index, index + block_size - 1);
        index += block_size;
    }

    // index is now lcm(block_size, storage_block_size), a multiple of S
    let distinct_blocks = index / storage_block_size;

    SweepPoint {
        block_size,
        efficiency: distinct_blocks as f64 / reads as f64,
        gcd_efficiency: gcd(block_size, storage_block_size) as f64
            / storage_block_size as f64,
        storage_block_reads: reads,
        distinct_blocks,
        cycle_bytes: index,
    }
}

/// Run the full sweep sequentially, one point per block size in
/// `[min_block_size, max_block_size]`, ordered by block size.
pub fn run_sweep(params: &SweepParams) -> Result<Vec<SweepPoint>, ModelError> {
    params.validate()?;

    let points = (params.min_block_size..=params.max_block_size)
        .map(|block_size| profile_block_size(block_size, params.storage_block_size))
        .collect();

    Ok(points)
}

/// Run the full sweep across rayon's thread pool. Each block size is an
/// independent pure computation; the collected output keeps block-size order.
pub fn run_sweep_parallel(params: &SweepParams) -> Result<Vec<SweepPoint>, ModelError> {
    params.validate()?;

    let points = (params.min_block_size..=params.max_block_size)
        .into_par_iter()
        .map(|block_size| profile_block_size(block_size, params.storage_block_size))
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touched_blocks_exactness() {
        // floor(end/S) - floor(start/S) + 1 for a spread of inputs
        for s in [1u64, 3, 7, 512, 4096] {
            for (start, end) in [(0u64, 0u64), (0, 4095), (100, 9000), (4096, 4096), (1, 8192)] {
                let expected = end / s - start / s + 1;
                assert_eq!(touched_blocks(s, start, end), expected, "S={} [{},{}]", s, start, end);
            }
        }
    }

    #[test]
    fn test_touched_blocks_single_byte() {
        assert_eq!(touched_blocks(4096, 0, 0), 1);
        assert_eq!(touched_blocks(4096, 4095, 4095), 1);
        assert_eq!(touched_blocks(4096, 4096, 4096), 1);
        assert_eq!(touched_blocks(1, 17, 17), 1);
    }

    #[test]
    fn test_touched_blocks_boundary_crossing() {
        // [4095, 4096] straddles the first block boundary
        assert_eq!(touched_blocks(4096, 4095, 4096), 2);
        // one full block exactly
        assert_eq!(touched_blocks(4096, 0, 4095), 1);
        // one byte past a full block
        assert_eq!(touched_blocks(4096, 0, 4096), 2);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(2048, 4096), 2048);
        assert_eq!(gcd(4096, 2048), 2048);
        assert_eq!(gcd(3, 7), 1);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(2048, 4096), 4096);
        assert_eq!(lcm(3, 7), 21);
        assert_eq!(lcm(4096, 4096), 4096);
    }

    #[test]
    fn test_cycle_length_is_lcm() {
        for (b, s) in [(1u64, 1u64), (3, 4096), (2048, 4096), (4096, 4096), (5000, 4096), (7, 12)] {
            let point = profile_block_size(b, s);
            assert_eq!(point.cycle_bytes, lcm(b, s), "B={} S={}", b, s);
            assert_eq!(point.cycle_bytes % s, 0);
            assert_eq!(point.distinct_blocks, point.cycle_bytes / s);
        }
    }

    #[test]
    fn test_efficiency_bounds() {
        for b in 1..=256u64 {
            let point = profile_block_size(b, 64);
            assert!(point.efficiency > 0.0, "B={}", b);
            assert!(point.efficiency <= 1.0, "B={}", b);
            assert!(point.gcd_efficiency > 0.0, "B={}", b);
            assert!(point.gcd_efficiency <= 1.0, "B={}", b);
        }
    }

    #[test]
    fn test_aligned_block_size_is_perfect() {
        // B a multiple of S: every window covers whole blocks, nothing wasted
        for k in 1..=5u64 {
            let point = profile_block_size(k * 4096, 4096);
            assert_eq!(point.efficiency, 1.0, "k={}", k);
            assert_eq!(point.gcd_efficiency, 1.0, "k={}", k);
        }
        // S a multiple of B also aligns perfectly in gcd terms only when B | S
        let point = profile_block_size(4096, 2048);
        assert_eq!(point.gcd_efficiency, 1.0);
        assert_eq!(point.efficiency, 1.0);
    }

    #[test]
    fn test_half_block_regression() {
        // S=4096, B=2048: two windows per 4096-byte cycle, each touching
        // block 0 once, so efficiency = 1/2 and gcd efficiency = 2048/4096
        let point = profile_block_size(2048, 4096);
        assert_eq!(point.cycle_bytes, 4096);
        assert_eq!(point.storage_block_reads, 2);
        assert_eq!(point.distinct_blocks, 1);
        assert_eq!(point.efficiency, 0.5);
        assert_eq!(point.gcd_efficiency, 0.5);
    }

    #[test]
    fn test_misaligned_block_size() {
        // S=4, B=3: windows [0,2] [3,5] [6,8] [9,11], touches 1+2+2+1 = 6,
        // cycle = 12 bytes = 3 storage blocks
        let point = profile_block_size(3, 4);
        assert_eq!(point.cycle_bytes, 12);
        assert_eq!(point.storage_block_reads, 6);
        assert_eq!(point.distinct_blocks, 3);
        assert_eq!(point.efficiency, 0.5);
        assert_eq!(point.gcd_efficiency, 0.25);
    }

    #[test]
    fn test_sweep_ordering_and_length() {
        let params = SweepParams {
            storage_block_size: 64,
            min_block_size: 1,
            max_block_size: 320,
        };
        let points = run_sweep(&params).unwrap();
        assert_eq!(points.len() as u64, params.len());
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.block_size, 1 + i as u64);
        }
    }

    #[test]
    fn test_parallel_sweep_matches_sequential() {
        let params = SweepParams {
            storage_block_size: 128,
            min_block_size: 1,
            max_block_size: 640,
        };
        let sequential = run_sweep(&params).unwrap();
        let parallel = run_sweep_parallel(&params).unwrap();
        assert_eq!(sequential.len(), parallel.len());
        for (a, b) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(a.block_size, b.block_size);
            assert_eq!(a.efficiency, b.efficiency);
            assert_eq!(a.storage_block_reads, b.storage_block_reads);
        }
    }

    #[test]
    fn test_invalid_params_rejected() {
        let zero_storage = SweepParams {
            storage_block_size: 0,
            min_block_size: 1,
            max_block_size: 10,
        };
        assert_eq!(zero_storage.validate(), Err(ModelError::ZeroStorageBlockSize));

        let zero_min = SweepParams {
            storage_block_size: 4096,
            min_block_size: 0,
            max_block_size: 10,
        };
        assert_eq!(zero_min.validate(), Err(ModelError::ZeroMinBlockSize));

        let inverted = SweepParams {
            storage_block_size: 4096,
            min_block_size: 10,
            max_block_size: 5,
        };
        assert_eq!(
            inverted.validate(),
            Err(ModelError::InvertedRange { min: 10, max: 5 })
        );

        assert!(run_sweep(&inverted).is_err());
        assert!(run_sweep_parallel(&zero_storage).is_err());
    }
}
