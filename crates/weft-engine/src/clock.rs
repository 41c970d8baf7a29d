//! Per-band generation counters forming the ring handshake.
//!
//! Each band owns one monotonically increasing counter. The owning thread
//! is its sole writer and bumps it with a `Release` store after finishing
//! both boundary rows of a generation; ring neighbours spin on it with
//! `Acquire` loads before reading the rows it guards. That pairing is the
//! only cross-thread ordering in the whole engine (board words and dirty
//! flags are all `Relaxed`), so every boundary-row read happens-after the
//! writes it depends on.
//!
//! The waits are pure spins with no blocking or yielding; a stalled band
//! therefore stalls its neighbours and, transitively, the whole ring.
//! Liveness of every worker is a protocol requirement, not a recoverable
//! condition.

use std::sync::atomic::{AtomicU64, Ordering};

pub(crate) struct RingClock {
    counters: Box<[AtomicU64]>,
}

impl RingClock {
    /// Create a clock with every band at generation 0.
    pub fn new(band_count: usize) -> Self {
        let counters = (0..band_count).map(|_| AtomicU64::new(0)).collect();
        Self { counters }
    }

    /// Spin until `band` has completed at least `generation` generations.
    #[inline]
    pub fn wait_for(&self, band: usize, generation: u64) {
        while self.counters[band].load(Ordering::Acquire) < generation {
            std::hint::spin_loop();
        }
    }

    /// Record that `band` finished one more generation.
    ///
    /// Only the owning thread may call this for its band.
    #[inline]
    pub fn advance(&self, band: usize) {
        self.counters[band].fetch_add(1, Ordering::Release);
    }

    #[cfg(test)]
    pub fn completed(&self, band: usize) -> u64 {
        self.counters[band].load(Ordering::Acquire)
    }
}
