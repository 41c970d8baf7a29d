//! Per-word change flags ("dirty words") and their ping-pong pair.

use std::sync::atomic::{AtomicBool, Ordering};

use weft_core::Geometry;

use crate::board::BufferId;

/// One flag per word position, same layout as a board buffer.
///
/// A set flag means the word at that position may differ next generation
/// and must be recomputed; a clear flag licenses copying the word through
/// unchanged. Flags are `AtomicBool` because the two maps live in storage
/// shared by all worker threads, but each flag is only ever read and
/// cleared by the band that owns its row. Ordering is `Relaxed`
/// throughout, with cross-generation visibility supplied by the engine's
/// ring clock.
pub struct DirtyMap {
    geometry: Geometry,
    flags: Box<[AtomicBool]>,
}

impl DirtyMap {
    /// Create a map with every flag clear.
    pub fn new(geometry: Geometry) -> Self {
        let flags = (0..geometry.word_count()).map(|_| AtomicBool::new(false)).collect();
        Self { geometry, flags }
    }

    /// Set the flag at `(row, word_col)`, wrapping both coordinates.
    #[inline]
    pub fn mark(&self, row: usize, word_col: usize) {
        self.flags[self.geometry.word_index(row, word_col)].store(true, Ordering::Relaxed);
    }

    /// Read and clear the flag at `(row, word_col)` in one step.
    ///
    /// Clearing on read is the optimistic assumption that the word will not
    /// change again; a change this generation re-marks the next map.
    #[inline]
    pub fn take(&self, row: usize, word_col: usize) -> bool {
        self.flags[self.geometry.word_index(row, word_col)].swap(false, Ordering::Relaxed)
    }

    /// Read the flag without clearing it.
    pub fn is_marked(&self, row: usize, word_col: usize) -> bool {
        self.flags[self.geometry.word_index(row, word_col)].load(Ordering::Relaxed)
    }
}

/// The two dirty maps, one per board buffer.
///
/// Roles follow the board pair's parity: the map paired with the source
/// board is consulted and drained, the map paired with the target board
/// collects the flags for the next generation.
pub struct DirtyPair {
    a: DirtyMap,
    b: DirtyMap,
}

impl DirtyPair {
    /// Create a pair of all-clear maps.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            a: DirtyMap::new(geometry),
            b: DirtyMap::new(geometry),
        }
    }

    /// Borrow a map by buffer id.
    pub fn map(&self, id: BufferId) -> &DirtyMap {
        match id {
            BufferId::A => &self.a,
            BufferId::B => &self.b,
        }
    }

    /// `(current, next)` maps for the given generation number.
    pub fn split(&self, generation: u64) -> (&DirtyMap, &DirtyMap) {
        let current = BufferId::for_generation(generation);
        (self.map(current), self.map(current.other()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> Geometry {
        Geometry::new(8, 64).unwrap()
    }

    #[test]
    fn new_map_is_clear() {
        let map = DirtyMap::new(geometry());
        for row in 0..8 {
            for col in 0..4 {
                assert!(!map.is_marked(row, col));
            }
        }
    }

    #[test]
    fn take_reads_and_clears() {
        let map = DirtyMap::new(geometry());
        map.mark(3, 2);
        assert!(map.is_marked(3, 2));
        assert!(map.take(3, 2));
        assert!(!map.is_marked(3, 2));
        assert!(!map.take(3, 2));
    }

    #[test]
    fn mark_wraps_coordinates() {
        let map = DirtyMap::new(geometry());
        map.mark(0usize.wrapping_sub(1), 4);
        assert!(map.is_marked(7, 0));
    }

    #[test]
    fn split_alternates_with_parity() {
        let pair = DirtyPair::new(geometry());
        let (current, next) = pair.split(0);
        current.mark(1, 1);
        next.mark(2, 2);

        let (current, next) = pair.split(1);
        assert!(current.is_marked(2, 2));
        assert!(next.is_marked(1, 1));
    }
}
