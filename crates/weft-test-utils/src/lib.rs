//! Reusable board fixtures for Weft tests and benchmarks.
//!
//! Pattern stampers ([`glider`], [`blinker`], [`block`]), seeded random
//! boards ([`random_board`]), and live-cell collection ([`live_cells`]).
//! All stampers wrap coordinates onto the torus, so patterns may be placed
//! across any edge.

#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{blinker, block, glider, live_cells, random_board, stamp};
