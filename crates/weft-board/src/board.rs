//! Bit-packed board buffers and the ping-pong pair.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use weft_core::{Geometry, CELL_MASK};

/// One bit-packed board buffer.
///
/// Cells are stored 16 to a `u64`, four bits per cell, most-significant
/// nibble = leftmost cell of the word's span. Words are `AtomicU64` so that
/// worker threads can write disjoint row-bands while neighbours read
/// boundary rows; every access here is `Relaxed`, since cross-thread
/// ordering is the ring clock's job, not the board's.
///
/// All word accessors wrap both coordinates onto the torus via
/// [`Geometry::word_index`], so callers may step off any edge with wrapping
/// arithmetic.
pub struct Board {
    geometry: Geometry,
    words: Box<[AtomicU64]>,
}

// Compile-time assertion: Board must be shareable across worker threads.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<Board>();
};

impl Board {
    /// Create a zero-filled (all-dead) board.
    pub fn new(geometry: Geometry) -> Self {
        let words = (0..geometry.word_count()).map(|_| AtomicU64::new(0)).collect();
        Self { geometry, words }
    }

    /// Create a board from raw words, row-major.
    ///
    /// # Panics
    ///
    /// Panics if `words.len()` does not match the geometry's word count.
    pub fn from_words(geometry: Geometry, words: Vec<u64>) -> Self {
        assert_eq!(
            words.len(),
            geometry.word_count(),
            "word buffer length must match geometry"
        );
        let words = words.into_iter().map(AtomicU64::new).collect();
        Self { geometry, words }
    }

    /// The board's geometry.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Load the word at `(row, word_col)`, wrapping both coordinates.
    #[inline]
    pub fn word(&self, row: usize, word_col: usize) -> u64 {
        self.words[self.geometry.word_index(row, word_col)].load(Ordering::Relaxed)
    }

    /// Store the word at `(row, word_col)`, wrapping both coordinates.
    #[inline]
    pub fn set_word(&self, row: usize, word_col: usize, value: u64) {
        self.words[self.geometry.word_index(row, word_col)].store(value, Ordering::Relaxed);
    }

    /// Read the cell at `(row, col)` in cell coordinates.
    pub fn cell(&self, row: usize, col: usize) -> bool {
        let word = self.word(row, self.geometry.word_col(col));
        (word >> self.geometry.cell_shift(col)) & 1 == 1
    }

    /// Write the cell at `(row, col)` in cell coordinates.
    ///
    /// Load-modify-store on the containing word; intended for board setup
    /// and tests, not for concurrent writers.
    pub fn set_cell(&self, row: usize, col: usize, alive: bool) {
        let word_col = self.geometry.word_col(col);
        let shift = self.geometry.cell_shift(col);
        let mut word = self.word(row, word_col);
        word &= !(CELL_MASK << shift);
        if alive {
            word |= 1 << shift;
        }
        self.set_word(row, word_col, word);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        // Lanes hold 0 or 1, so summing the low bit of each nibble counts.
        self.words
            .iter()
            .map(|w| {
                let word = w.load(Ordering::Relaxed);
                (word & 0x1111_1111_1111_1111).count_ones() as usize
            })
            .sum()
    }

    /// Copy all words out, row-major.
    pub fn to_words(&self) -> Vec<u64> {
        self.words.iter().map(|w| w.load(Ordering::Relaxed)).collect()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.geometry == other.geometry
            && self
                .words
                .iter()
                .zip(other.words.iter())
                .all(|(a, b)| a.load(Ordering::Relaxed) == b.load(Ordering::Relaxed))
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.geometry.rows())
            .field("cols", &self.geometry.cols())
            .field("population", &self.population())
            .finish()
    }
}

/// Renders one `0`/`1` character per cell, one row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.geometry.rows() {
            for col in 0..self.geometry.cols() {
                f.write_str(if self.cell(row, col) { "1" } else { "0" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Identifies one of the two ping-pong buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferId {
    /// The buffer holding the initial board.
    A,
    /// The scratch buffer written by generation 0.
    B,
}

impl BufferId {
    /// The buffer holding the live board once `generations` generations
    /// have completed (equivalently, the source buffer for generation
    /// number `generations`).
    pub fn for_generation(generations: u64) -> Self {
        if generations % 2 == 0 {
            Self::A
        } else {
            Self::B
        }
    }

    /// The other buffer.
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// The two ping-pong board buffers.
///
/// Buffer roles are derived from generation parity rather than swapped by
/// pointer: [`split`](BoardPair::split) hands out `(source, target)` for a
/// given generation, and after the run [`final_board`](BoardPair::final_board)
/// resolves which buffer survived. Keeping the roles a pure function of the
/// generation number means every worker thread agrees on them without any
/// shared mutable "current" pointer.
pub struct BoardPair {
    a: Board,
    b: Board,
}

impl BoardPair {
    /// Create a pair of zero-filled boards.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            a: Board::new(geometry),
            b: Board::new(geometry),
        }
    }

    /// Create a pair whose buffer A holds `initial`; buffer B starts dead.
    pub fn from_initial(initial: Board) -> Self {
        let geometry = initial.geometry();
        Self {
            a: initial,
            b: Board::new(geometry),
        }
    }

    /// Geometry shared by both buffers.
    pub fn geometry(&self) -> Geometry {
        self.a.geometry()
    }

    /// Borrow a buffer by id.
    pub fn board(&self, id: BufferId) -> &Board {
        match id {
            BufferId::A => &self.a,
            BufferId::B => &self.b,
        }
    }

    /// `(source, target)` buffers for the given generation number.
    ///
    /// Generation 0 reads A and writes B; parity alternates from there.
    pub fn split(&self, generation: u64) -> (&Board, &Board) {
        let src = BufferId::for_generation(generation);
        (self.board(src), self.board(src.other()))
    }

    /// The buffer holding the live board after `generations` generations.
    pub fn final_board(&self, generations: u64) -> &Board {
        self.board(BufferId::for_generation(generations))
    }
}
