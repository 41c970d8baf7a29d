//! Weft: a multithreaded Game-of-Life engine for toroidal boards.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Weft sub-crates. For most users, adding `weft` as a single
//! dependency is sufficient.
//!
//! Boards are bit-packed 16 cells to a `u64` and advanced a word at a time
//! by a SIMD-in-a-register kernel. The board is split into row-bands, one
//! worker thread each; bands coordinate only at their boundary rows, via
//! per-band generation counters instead of a barrier.
//!
//! # Quick start
//!
//! ```rust
//! use weft::prelude::*;
//!
//! // A 32x32 torus with a single glider.
//! let geometry = Geometry::new(32, 32).unwrap();
//! let board = Board::new(geometry);
//! for (row, col) in [(10, 11), (11, 12), (12, 10), (12, 11), (12, 12)] {
//!     board.set_cell(row, col, true);
//! }
//!
//! let pair = BoardPair::from_initial(board);
//! let engine = Engine::new(EngineConfig {
//!     threads: Some(2),
//!     ..Default::default()
//! });
//! let report = engine.evolve(&pair, 4).unwrap();
//!
//! // A glider keeps its five cells, one step to the south-east.
//! let evolved = pair.board(report.final_buffer);
//! assert_eq!(evolved.population(), 5);
//! assert!(evolved.cell(13, 13));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `weft-core` | Geometry, packing constants, geometry errors |
//! | [`board`] | `weft-board` | `Board`, `BoardPair`, dirty-word maps |
//! | [`engine`] | `weft-engine` | The banded engine, bands, kernel, reference oracle |
//! | [`io`] | `weft-io` | Text codec for board files |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Board geometry, packing constants, and geometry errors (`weft-core`).
pub use weft_core as types;

/// Board storage: bit-packed buffers, the ping-pong pair, and dirty-word
/// maps (`weft-board`).
pub use weft_board as board;

/// The banded evolution engine, band partitioning, the word kernel, and
/// the per-cell reference oracle (`weft-engine`).
pub use weft_engine as engine;

/// Board file loading and saving (`weft-io`).
pub use weft_io as io;

/// The types most programs need, in one import.
pub mod prelude {
    pub use weft_board::{Board, BoardPair, BufferId};
    pub use weft_core::{Geometry, GeometryError};
    pub use weft_engine::{Engine, EngineConfig, EvolveReport, PartitionError};
    pub use weft_io::{read_board, write_board, CodecError};
}
