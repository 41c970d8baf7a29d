//! Row-band assignment and the ring adjacency between bands.

use std::error::Error;
use std::fmt;
use std::ops::Range;

use weft_core::Geometry;

/// A contiguous half-open row range `[start_row, start_row + rows)` owned by
/// one worker thread.
///
/// Bands tile the board with no overlap and no gap, and they form a ring:
/// band 0's predecessor is the last band and the last band's successor is
/// band 0. The first and last rows of a band are its boundary rows; they
/// are the only rows whose computation depends on a neighbouring band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    index: usize,
    start_row: usize,
    rows: usize,
}

impl Band {
    /// Position of this band in the ring.
    pub fn index(&self) -> usize {
        self.index
    }

    /// First row of the band (the top boundary row).
    pub fn top_row(&self) -> usize {
        self.start_row
    }

    /// Last row of the band (the bottom boundary row).
    pub fn bottom_row(&self) -> usize {
        self.start_row + self.rows - 1
    }

    /// Rows strictly between the boundary rows; may be empty for two-row
    /// bands.
    pub fn interior_rows(&self) -> Range<usize> {
        self.start_row + 1..self.start_row + self.rows - 1
    }

    /// Ring index of the band above this one.
    pub fn predecessor(&self, band_count: usize) -> usize {
        if self.index == 0 {
            band_count - 1
        } else {
            self.index - 1
        }
    }

    /// Ring index of the band below this one.
    pub fn successor(&self, band_count: usize) -> usize {
        if self.index == band_count - 1 {
            0
        } else {
            self.index + 1
        }
    }
}

/// Errors from [`partition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartitionError {
    /// The requested band count is zero.
    NoBands,
    /// The row count is not evenly divisible by the band count.
    UnevenBands {
        /// Rows on the board.
        rows: usize,
        /// Requested band count.
        band_count: usize,
    },
    /// Bands would be thinner than two rows, so a band's top and bottom
    /// boundary rows would coincide.
    BandTooThin {
        /// Rows each band would receive.
        rows_per_band: usize,
    },
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBands => write!(f, "band count must be nonzero"),
            Self::UnevenBands { rows, band_count } => {
                write!(f, "{rows} rows cannot be split evenly into {band_count} bands")
            }
            Self::BandTooThin { rows_per_band } => {
                write!(
                    f,
                    "bands of {rows_per_band} row(s) are too thin; \
                     each band needs distinct top and bottom boundary rows"
                )
            }
        }
    }
}

impl Error for PartitionError {}

/// Split a board into `band_count` equal bands.
///
/// Requires `band_count` to divide the row count evenly and every band to
/// receive at least two rows.
pub fn partition(geometry: Geometry, band_count: usize) -> Result<Vec<Band>, PartitionError> {
    if band_count == 0 {
        return Err(PartitionError::NoBands);
    }
    let rows = geometry.rows();
    if rows % band_count != 0 {
        return Err(PartitionError::UnevenBands { rows, band_count });
    }
    let rows_per_band = rows / band_count;
    if rows_per_band < 2 {
        return Err(PartitionError::BandTooThin { rows_per_band });
    }
    Ok((0..band_count)
        .map(|index| Band {
            index,
            start_row: index * rows_per_band,
            rows: rows_per_band,
        })
        .collect())
}
