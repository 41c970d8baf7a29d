//! Per-cell reference implementation used as a correctness oracle.
//!
//! Deliberately naive: cell-at-a-time neighbour counting with Euclidean
//! modulo wraparound, sharing none of the packed-word arithmetic, the
//! dirty-word tracking, or the mask-based indexing of the real engine.
//! Tests compare the two bit for bit.

use weft_board::BoardPair;

const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Evolve the board pair in place for `generations` generations,
/// single-threaded. The live board afterwards is
/// `boards.final_board(generations)`, exactly as with the real engine.
pub fn evolve(boards: &BoardPair, generations: u64) {
    let geometry = boards.geometry();
    let rows = geometry.rows() as isize;
    let cols = geometry.cols() as isize;

    for generation in 0..generations {
        let (src, dst) = boards.split(generation);
        for row in 0..geometry.rows() {
            for col in 0..geometry.cols() {
                let mut live = 0;
                for (dr, dc) in NEIGHBOUR_OFFSETS {
                    let r = (row as isize + dr).rem_euclid(rows) as usize;
                    let c = (col as isize + dc).rem_euclid(cols) as usize;
                    if src.cell(r, c) {
                        live += 1;
                    }
                }
                let alive = live == 3 || (live == 2 && src.cell(row, col));
                dst.set_cell(row, col, alive);
            }
        }
    }
}
