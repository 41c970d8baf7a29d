//! Banded multithreaded evolution for the Weft life engine.
//!
//! The board is split into contiguous row-bands, one OS thread per band.
//! Interior rows of a band depend only on the band's own rows and proceed
//! with no cross-thread coordination; the two boundary rows of each band
//! are ordered against the ring-neighbour bands by per-band generation
//! counters instead of a barrier. The per-word rule kernel
//! ([`kernel`]) advances 16 cells at a time with pure bitwise arithmetic,
//! and a dirty-word map lets the engine copy words that cannot have
//! changed instead of recomputing them.
//!
//! [`reference`] holds a deliberately naive per-cell implementation used
//! as the correctness oracle in tests.

#![forbid(unsafe_code)]

pub mod band;
mod clock;
pub mod engine;
pub mod kernel;
pub mod reference;

pub use band::{partition, Band, PartitionError};
pub use engine::{BandStats, Engine, EngineConfig, EvolveReport};
