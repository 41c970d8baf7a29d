//! Board fixtures: canonical patterns and seeded random fills.

use std::collections::BTreeSet;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use weft_board::Board;
use weft_core::Geometry;

/// Relative cells of the canonical glider, heading south-east.
const GLIDER: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Stamp `cells` onto the board, offset by `(top, left)`, wrapping onto the
/// torus.
pub fn stamp(board: &Board, top: usize, left: usize, cells: &[(usize, usize)]) {
    let geometry = board.geometry();
    for &(dr, dc) in cells {
        board.set_cell((top + dr) % geometry.rows(), (left + dc) % geometry.cols(), true);
    }
}

/// Stamp a south-east-bound glider with its bounding box at `(top, left)`.
///
/// On a large enough board it translates by (+1, +1) every 4 generations.
pub fn glider(board: &Board, top: usize, left: usize) {
    stamp(board, top, left, &GLIDER);
}

/// Stamp a horizontal blinker starting at `(top, left)`.
pub fn blinker(board: &Board, top: usize, left: usize) {
    stamp(board, top, left, &[(0, 0), (0, 1), (0, 2)]);
}

/// Stamp a 2×2 block (still life) at `(top, left)`.
pub fn block(board: &Board, top: usize, left: usize) {
    stamp(board, top, left, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
}

/// A board filled with live cells at roughly `density` by a seeded ChaCha8
/// stream; identical seeds produce identical boards.
pub fn random_board(geometry: Geometry, density: f64, seed: u64) -> Board {
    let board = Board::new(geometry);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density) as u64;
    for row in 0..geometry.rows() {
        for col in 0..geometry.cols() {
            if rng.next_u64() <= threshold {
                board.set_cell(row, col, true);
            }
        }
    }
    board
}

/// Collect the live cells as ordered `(row, col)` pairs, for readable
/// assertion diffs.
pub fn live_cells(board: &Board) -> BTreeSet<(usize, usize)> {
    let geometry = board.geometry();
    let mut out = BTreeSet::new();
    for row in 0..geometry.rows() {
        for col in 0..geometry.cols() {
            if board.cell(row, col) {
                out.insert((row, col));
            }
        }
    }
    out
}
