//! Core geometry and cell-packing rules for the Weft life engine.
//!
//! A board is a toroidal grid of binary cells packed 16 to a `u64`, four
//! bits per cell, most-significant nibble first. [`Geometry`] captures the
//! dimensions, derives the word layout, and owns the masked wraparound
//! arithmetic that every other crate indexes through.

#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;

pub use error::GeometryError;
pub use geometry::{
    Geometry, BITS_PER_CELL, CELLS_PER_WORD, CELL_MASK, EAST_CELL_MASK, WEST_CELL_MASK,
};
