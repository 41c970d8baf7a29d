//! Benchmark profiles for the Weft life engine.
//!
//! Pre-built boards shared by the bench targets:
//!
//! - [`reference_board`]: 256x256 at 30% density (4K words)
//! - [`stress_board`]: 1024x1024 at 42% density (64K words)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use weft_board::Board;
use weft_core::Geometry;
use weft_test_utils::random_board;

/// Seed shared by every profile so runs are comparable.
pub const BENCH_SEED: u64 = 0x5EED_CAFE;

/// 256x256 board at 30% density.
pub fn reference_board() -> Board {
    random_board(Geometry::new(256, 256).unwrap(), 0.30, BENCH_SEED)
}

/// 1024x1024 board at the density where activity peaks.
pub fn stress_board() -> Board {
    random_board(Geometry::new(1024, 1024).unwrap(), 0.42, BENCH_SEED)
}
