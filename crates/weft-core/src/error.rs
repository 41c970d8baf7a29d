//! Error types for board geometry validation.

use std::error::Error;
use std::fmt;

/// Errors detected by [`Geometry::new`](crate::Geometry::new).
///
/// All wraparound indexing uses `index & mask` instead of modulo, so both
/// the row count and the word-column count must be powers of two; anything
/// else would silently corrupt neighbour lookups at the grid edges. These
/// preconditions are checked once, at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// The row count is not a power of two (zero included).
    RowsNotPowerOfTwo {
        /// The rejected row count.
        rows: usize,
    },
    /// The column count is not a multiple of the 16-cell word width.
    ColsNotWordAligned {
        /// The rejected column count.
        cols: usize,
    },
    /// The column count packs to a word count that is not a power of two.
    WordColumnsNotPowerOfTwo {
        /// The rejected column count.
        cols: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowsNotPowerOfTwo { rows } => {
                write!(f, "row count {rows} must be a power of two")
            }
            Self::ColsNotWordAligned { cols } => {
                write!(f, "column count {cols} must be a multiple of 16")
            }
            Self::WordColumnsNotPowerOfTwo { cols } => {
                write!(
                    f,
                    "column count {cols} packs to {} words per row, which must be a power of two",
                    cols / 16
                )
            }
        }
    }
}

impl Error for GeometryError {}
