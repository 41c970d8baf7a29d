//! Board storage for the Weft life engine.
//!
//! [`Board`] is a bit-packed toroidal cell grid whose words are atomics, so
//! row-bands can be updated concurrently in safe Rust. [`BoardPair`] holds
//! the two ping-pong buffers and derives their source/target roles from
//! generation parity. [`DirtyMap`]/[`DirtyPair`] carry the per-word change
//! flags that let the engine skip words that cannot have changed.

#![forbid(unsafe_code)]

pub mod board;
pub mod dirty;

pub use board::{Board, BoardPair, BufferId};
pub use dirty::{DirtyMap, DirtyPair};
