//! The banded evolution engine.
//!
//! [`Engine::evolve`] spawns one scoped thread per band. Each worker runs
//! the full generation loop on its own rows: interior words first (guarded
//! by the dirty map), then the top boundary row once the predecessor band
//! has caught up, then the bottom boundary row once the successor has,
//! then a `Release` bump of the band's ring-clock counter. Buffer roles
//! flip by generation parity, so workers never exchange pointers, only
//! counter values.

use crossbeam_channel::bounded;

use weft_board::{BoardPair, BufferId, DirtyMap, DirtyPair};
use weft_core::{Geometry, EAST_CELL_MASK, WEST_CELL_MASK};

use crate::band::{partition, Band, PartitionError};
use crate::clock::RingClock;
use crate::kernel;

/// Engine configuration.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Number of bands (and worker threads). `None` = auto-detect: the
    /// largest power of two no greater than the available parallelism that
    /// still leaves every band at least two rows. Explicit values must
    /// divide the row count evenly.
    pub threads: Option<usize>,
    /// Skip recomputation of words whose dirty flag is clear (default).
    /// Disabling forces every interior word to be recomputed every
    /// generation; final boards are identical either way.
    pub change_tracking: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threads: None,
            change_tracking: true,
        }
    }
}

impl EngineConfig {
    /// Resolve the band count for a board, applying auto-detection if
    /// `threads` is `None`.
    pub fn resolved_band_count(&self, geometry: Geometry) -> usize {
        match self.threads {
            Some(n) => n,
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                let max_bands = (geometry.rows() / 2).max(1);
                let mut bands = 1;
                while bands * 2 <= cpus && bands * 2 <= max_bands {
                    bands *= 2;
                }
                bands
            }
        }
    }
}

/// Work accounting for one band across a whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BandStats {
    /// Ring index of the band.
    pub band: usize,
    /// Words advanced through the rule kernel.
    pub words_recomputed: u64,
    /// Words copied through unchanged because their dirty flag was clear.
    pub words_copied: u64,
}

impl BandStats {
    fn new(band: usize) -> Self {
        Self {
            band,
            ..Self::default()
        }
    }
}

/// Result of [`Engine::evolve`].
#[derive(Clone, Debug)]
pub struct EvolveReport {
    /// Generations evolved.
    pub generations: u64,
    /// The buffer holding the final board.
    pub final_buffer: BufferId,
    /// Per-band work accounting, ordered by band index.
    pub band_stats: Vec<BandStats>,
}

impl EvolveReport {
    /// Total words advanced through the rule kernel.
    pub fn words_recomputed(&self) -> u64 {
        self.band_stats.iter().map(|s| s.words_recomputed).sum()
    }

    /// Total words copied through unchanged.
    pub fn words_copied(&self) -> u64 {
        self.band_stats.iter().map(|s| s.words_copied).sum()
    }
}

/// Multithreaded toroidal Game-of-Life engine.
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Evolve the board pair in place for `generations` generations.
    ///
    /// On return the live board is `boards.board(report.final_buffer)`.
    /// Workers are spawned once, run the whole generation loop, and are
    /// joined before this returns; their statistics come back over a
    /// bounded channel and are aggregated into the report.
    pub fn evolve(
        &self,
        boards: &BoardPair,
        generations: u64,
    ) -> Result<EvolveReport, PartitionError> {
        let geometry = boards.geometry();
        let bands = partition(geometry, self.config.resolved_band_count(geometry))?;
        log::debug!(
            "evolving {generations} generation(s): {} rows x {} cols, {} band(s) of {} rows",
            geometry.rows(),
            geometry.cols(),
            bands.len(),
            geometry.rows() / bands.len(),
        );

        if generations == 0 {
            return Ok(EvolveReport {
                generations,
                final_buffer: BufferId::A,
                band_stats: bands.iter().map(|b| BandStats::new(b.index())).collect(),
            });
        }

        let dirty = DirtyPair::new(geometry);
        let clock = RingClock::new(bands.len());
        let (stats_tx, stats_rx) = bounded(bands.len());

        std::thread::scope(|scope| {
            for band in &bands {
                let worker = BandWorker {
                    boards,
                    dirty: &dirty,
                    clock: &clock,
                    band: *band,
                    band_count: bands.len(),
                    generations,
                    change_tracking: self.config.change_tracking,
                };
                let stats_tx = stats_tx.clone();
                scope.spawn(move || {
                    // The channel is bounded at band count and the receiver
                    // outlives the scope, so the send cannot block or fail.
                    let _ = stats_tx.send(worker.run());
                });
            }
        });
        drop(stats_tx);

        let mut band_stats: Vec<BandStats> = stats_rx.try_iter().collect();
        band_stats.sort_by_key(|s| s.band);
        let report = EvolveReport {
            generations,
            final_buffer: BufferId::for_generation(generations),
            band_stats,
        };
        log::debug!(
            "evolve complete: {} words recomputed, {} copied",
            report.words_recomputed(),
            report.words_copied(),
        );
        Ok(report)
    }
}

/// One band's generation loop, run to completion on its own thread.
struct BandWorker<'a> {
    boards: &'a BoardPair,
    dirty: &'a DirtyPair,
    clock: &'a RingClock,
    band: Band,
    band_count: usize,
    generations: u64,
    change_tracking: bool,
}

impl BandWorker<'_> {
    fn run(self) -> BandStats {
        let geometry = self.boards.geometry();
        let words_per_row = geometry.words_per_row();
        let predecessor = self.band.predecessor(self.band_count);
        let successor = self.band.successor(self.band_count);
        let mut stats = BandStats::new(self.band.index());

        // Interior words start dirty so generation 0 recomputes the whole
        // interior. Boundary rows are recomputed unconditionally every
        // generation and never consult their own flags.
        let (seed, _) = self.dirty.split(0);
        for row in self.band.interior_rows() {
            for col in 0..words_per_row {
                seed.mark(row, col);
            }
        }

        for generation in 0..self.generations {
            let (src, dst) = self.boards.split(generation);
            let (current, next) = self.dirty.split(generation);

            // Interior rows: no cross-band dependency; every source row is
            // one of this band's own rows.
            for row in self.band.interior_rows() {
                for col in 0..words_per_row {
                    if self.change_tracking && !current.take(row, col) {
                        dst.set_word(row, col, src.word(row, col));
                        stats.words_copied += 1;
                        continue;
                    }
                    let old = src.word(row, col);
                    let new = kernel::step_word(src, row, col);
                    dst.set_word(row, col, new);
                    stats.words_recomputed += 1;
                    if self.change_tracking && new != old {
                        mark_around(next, row, col, old, new);
                    }
                }
            }

            // Top boundary row: reads the predecessor's bottom row, which
            // is only valid once the predecessor has finished the previous
            // generation.
            self.clock.wait_for(predecessor, generation);
            let top = self.band.top_row();
            for col in 0..words_per_row {
                let old = src.word(top, col);
                let new = kernel::step_word(src, top, col);
                dst.set_word(top, col, new);
                stats.words_recomputed += 1;
                if self.change_tracking && new != old {
                    // Only the rows below consult flags; the row above is a
                    // neighbour's boundary row and recomputes regardless.
                    mark_row_below(next, top, col, old, new);
                }
            }

            // Bottom boundary row: same handshake with the successor.
            self.clock.wait_for(successor, generation);
            let bottom = self.band.bottom_row();
            for col in 0..words_per_row {
                let old = src.word(bottom, col);
                let new = kernel::step_word(src, bottom, col);
                dst.set_word(bottom, col, new);
                stats.words_recomputed += 1;
                if self.change_tracking && new != old {
                    mark_row_above(next, bottom, col, old, new);
                }
            }

            self.clock.advance(self.band.index());
        }
        stats
    }
}

/// Flag every word whose next value can depend on a changed interior word:
/// the word itself and its north/south neighbours always, the east trio
/// only if the easternmost cell changed, the west trio only if the
/// westernmost cell changed.
fn mark_around(next: &DirtyMap, row: usize, col: usize, old: u64, new: u64) {
    next.mark(row, col);
    next.mark(row.wrapping_sub(1), col);
    next.mark(row.wrapping_add(1), col);
    if (old ^ new) & EAST_CELL_MASK != 0 {
        next.mark(row, col.wrapping_add(1));
        next.mark(row.wrapping_sub(1), col.wrapping_add(1));
        next.mark(row.wrapping_add(1), col.wrapping_add(1));
    }
    if (old ^ new) & WEST_CELL_MASK != 0 {
        next.mark(row, col.wrapping_sub(1));
        next.mark(row.wrapping_sub(1), col.wrapping_sub(1));
        next.mark(row.wrapping_add(1), col.wrapping_sub(1));
    }
}

/// Change flags for a top boundary row: only the row below it holds words
/// whose flags will be consulted.
fn mark_row_below(next: &DirtyMap, row: usize, col: usize, old: u64, new: u64) {
    next.mark(row.wrapping_add(1), col);
    if (old ^ new) & EAST_CELL_MASK != 0 {
        next.mark(row.wrapping_add(1), col.wrapping_add(1));
    }
    if (old ^ new) & WEST_CELL_MASK != 0 {
        next.mark(row.wrapping_add(1), col.wrapping_sub(1));
    }
}

/// Change flags for a bottom boundary row: only the row above it holds
/// words whose flags will be consulted.
fn mark_row_above(next: &DirtyMap, row: usize, col: usize, old: u64, new: u64) {
    next.mark(row.wrapping_sub(1), col);
    if (old ^ new) & EAST_CELL_MASK != 0 {
        next.mark(row.wrapping_sub(1), col.wrapping_add(1));
    }
    if (old ^ new) & WEST_CELL_MASK != 0 {
        next.mark(row.wrapping_sub(1), col.wrapping_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;
    use weft_board::Board;

    fn glider_pair(geometry: Geometry) -> BoardPair {
        let board = Board::new(geometry);
        for (row, col) in [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)] {
            board.set_cell(row, col, true);
        }
        BoardPair::from_initial(board)
    }

    // ── configuration ───────────────────────────────────────────

    #[test]
    fn auto_band_count_keeps_bands_two_rows() {
        let config = EngineConfig::default();
        let tiny = Geometry::new(2, 32).unwrap();
        assert_eq!(config.resolved_band_count(tiny), 1);
        let small = Geometry::new(4, 32).unwrap();
        assert!(config.resolved_band_count(small) <= 2);
    }

    #[test]
    fn explicit_band_count_is_passed_through() {
        let config = EngineConfig {
            threads: Some(3),
            ..Default::default()
        };
        let geometry = Geometry::new(16, 32).unwrap();
        assert_eq!(config.resolved_band_count(geometry), 3);
        // partition rejects it later: 16 % 3 != 0.
        let engine = Engine::new(config);
        let pair = BoardPair::new(geometry);
        assert!(matches!(
            engine.evolve(&pair, 1),
            Err(PartitionError::UnevenBands { rows: 16, band_count: 3 })
        ));
    }

    // ── evolve ──────────────────────────────────────────────────

    #[test]
    fn zero_generations_leaves_buffer_a_live() {
        let geometry = Geometry::new(8, 32).unwrap();
        let pair = glider_pair(geometry);
        let before = pair.board(BufferId::A).to_words();
        let engine = Engine::new(EngineConfig {
            threads: Some(2),
            ..Default::default()
        });
        let report = engine.evolve(&pair, 0).unwrap();
        assert_eq!(report.final_buffer, BufferId::A);
        assert_eq!(pair.final_board(0).to_words(), before);
        assert_eq!(report.words_recomputed(), 0);
    }

    #[test]
    fn single_band_matches_reference() {
        let geometry = Geometry::new(16, 32).unwrap();
        let engine_pair = glider_pair(geometry);
        let oracle_pair = glider_pair(geometry);

        let engine = Engine::new(EngineConfig {
            threads: Some(1),
            ..Default::default()
        });
        let report = engine.evolve(&engine_pair, 5).unwrap();
        reference::evolve(&oracle_pair, 5);

        assert_eq!(report.final_buffer, BufferId::B);
        assert_eq!(
            engine_pair.final_board(5).to_words(),
            oracle_pair.final_board(5).to_words()
        );
    }

    #[test]
    fn stats_account_for_every_word_when_tracking_is_off() {
        // With change tracking off, every word of every generation is
        // recomputed: rows * words_per_row * generations.
        let geometry = Geometry::new(16, 32).unwrap();
        let pair = glider_pair(geometry);
        let engine = Engine::new(EngineConfig {
            threads: Some(2),
            change_tracking: false,
        });
        let report = engine.evolve(&pair, 3).unwrap();
        assert_eq!(report.words_recomputed(), 16 * 2 * 3);
        assert_eq!(report.words_copied(), 0);
        assert_eq!(report.band_stats.len(), 2);
        assert_eq!(report.band_stats[0].band, 0);
        assert_eq!(report.band_stats[1].band, 1);
    }

    #[test]
    fn change_tracking_skips_quiet_words() {
        // A glider confined to one corner leaves most of a 32x64 board
        // quiet; the optimized run must do strictly less kernel work.
        let geometry = Geometry::new(32, 64).unwrap();
        let tracked = glider_pair(geometry);
        let untracked = glider_pair(geometry);

        let report_tracked = Engine::new(EngineConfig {
            threads: Some(2),
            change_tracking: true,
        })
        .evolve(&tracked, 8)
        .unwrap();
        let report_untracked = Engine::new(EngineConfig {
            threads: Some(2),
            change_tracking: false,
        })
        .evolve(&untracked, 8)
        .unwrap();

        assert!(report_tracked.words_recomputed() < report_untracked.words_recomputed());
        assert!(report_tracked.words_copied() > 0);
        assert_eq!(
            tracked.final_board(8).to_words(),
            untracked.final_board(8).to_words()
        );
    }
}
