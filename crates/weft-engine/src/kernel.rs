//! SIMD-in-a-register rule kernel: one call advances 16 cells.
//!
//! Cells occupy 4-bit lanes of a `u64`, so the nine-word neighbourhood can
//! be summed lane-wise with one ordinary addition per word: each lane
//! accumulates at most 9, which never carries into the lane above. The
//! B3/S23 rule then reduces to two lane masks: a cell is alive next
//! generation if its lane sums to 3, or sums to 4 while the cell itself is
//! already alive (`sum == 4` means three live neighbours around a live
//! cell, because the sum includes the centre).

use weft_board::Board;
use weft_core::{BITS_PER_CELL, CELLS_PER_WORD, CELL_MASK};

/// Shift moving a word's cells one lane east or west.
const LANE_SHIFT: u32 = BITS_PER_CELL as u32;

/// Shift isolating the lane carried in from an adjacent word.
const CARRY_SHIFT: u32 = ((CELLS_PER_WORD - 1) * BITS_PER_CELL) as u32;

/// Compute the next generation of the word at `(row, word_col)`.
///
/// Both coordinates wrap onto the torus, so callers may pass
/// `row.wrapping_sub(1)` and friends directly.
///
/// Every lane of every word read must hold 0 or 1; the kernel itself only
/// ever produces such words.
#[inline]
pub fn step_word(board: &Board, row: usize, word_col: usize) -> u64 {
    let north_row = row.wrapping_sub(1);
    let south_row = row.wrapping_add(1);
    let east_col = word_col.wrapping_add(1);
    let west_col = word_col.wrapping_sub(1);

    let centre = board.word(row, word_col);
    let north = board.word(north_row, word_col);
    let south = board.word(south_row, word_col);

    // A cell's east neighbour sits one lane lower in the same word, except
    // for the easternmost cell, whose neighbour is the westernmost lane of
    // the word to the east. Shifting the row's words by one lane and OR-ing
    // in the carried lane aligns all sixteen east neighbours at once; west
    // and the diagonals follow the same scheme.
    let east = (centre << LANE_SHIFT) | (board.word(row, east_col) >> CARRY_SHIFT);
    let west = (centre >> LANE_SHIFT) | (board.word(row, west_col) << CARRY_SHIFT);
    let north_east = (north << LANE_SHIFT) | (board.word(north_row, east_col) >> CARRY_SHIFT);
    let north_west = (north >> LANE_SHIFT) | (board.word(north_row, west_col) << CARRY_SHIFT);
    let south_east = (south << LANE_SHIFT) | (board.word(south_row, east_col) >> CARRY_SHIFT);
    let south_west = (south >> LANE_SHIFT) | (board.word(south_row, west_col) << CARRY_SHIFT);

    let mut sum = centre
        + north
        + south
        + east
        + west
        + north_east
        + north_west
        + south_east
        + south_west;

    // Lane masks: bit set at a lane's low position where the lane sums to
    // 3 (born or surviving) or 4 (surviving only if already alive).
    let mut born = 0u64;
    let mut held = 0u64;
    for lane in 0..CELLS_PER_WORD as u32 {
        let shift = lane * LANE_SHIFT;
        born |= u64::from((sum & CELL_MASK) == 3) << shift;
        held |= u64::from((sum & CELL_MASK) == 4) << shift;
        sum >>= LANE_SHIFT;
    }

    (centre & held) | born
}
