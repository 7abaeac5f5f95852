// Lightweight counters for observing the rolling-hash matcher's behavior:
// how many windows it scanned, how often the fingerprint filter fired, and
// how much verification work the hits cost. Thread-local `Cell`s keep the
// hot path free of locking and keep concurrent callers independent.
use std::cell::Cell;

thread_local! {
    static WINDOWS_SCANNED: Cell<u64> = const { Cell::new(0) };
    static FINGERPRINT_HITS: Cell<u64> = const { Cell::new(0) };
    static COLLISIONS_REJECTED: Cell<u64> = const { Cell::new(0) };
    static BYTES_VERIFIED: Cell<u64> = const { Cell::new(0) };
}

/// Snapshot of the per-thread counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Candidate windows whose fingerprint was examined.
    pub windows_scanned: u64,
    /// Windows whose fingerprint equaled the pattern fingerprint.
    pub fingerprint_hits: u64,
    /// Fingerprint hits whose byte verification failed, i.e. genuine hash
    /// collisions that were filtered out.
    pub collisions_rejected: u64,
    /// Bytes compared during verification of fingerprint hits.
    pub bytes_verified: u64,
}

/// Zero all counters on the calling thread.
pub fn reset_counters() {
    WINDOWS_SCANNED.with(|c| c.set(0));
    FINGERPRINT_HITS.with(|c| c.set(0));
    COLLISIONS_REJECTED.with(|c| c.set(0));
    BYTES_VERIFIED.with(|c| c.set(0));
}

/// Read the calling thread's counters without resetting them.
#[must_use]
pub fn counters_snapshot() -> Counters {
    Counters {
        windows_scanned: WINDOWS_SCANNED.with(Cell::get),
        fingerprint_hits: FINGERPRINT_HITS.with(Cell::get),
        collisions_rejected: COLLISIONS_REJECTED.with(Cell::get),
        bytes_verified: BYTES_VERIFIED.with(Cell::get),
    }
}

pub(crate) fn add_windows_scanned(n: u64) {
    WINDOWS_SCANNED.with(|c| c.set(c.get().wrapping_add(n)));
}

pub(crate) fn add_fingerprint_hit() {
    FINGERPRINT_HITS.with(|c| c.set(c.get().wrapping_add(1)));
}

pub(crate) fn add_collision_rejected() {
    COLLISIONS_REJECTED.with(|c| c.set(c.get().wrapping_add(1)));
}

pub(crate) fn add_bytes_verified(n: u64) {
    BYTES_VERIFIED.with(|c| c.set(c.get().wrapping_add(n)));
}
