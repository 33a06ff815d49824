//! B-tree operation statistics.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracked by a [`BTree`](crate::BTree).
///
/// All fields are atomic so that read-only operations like `find(&self)`
/// can count without needing `&mut self`, and so a tree behind a shared
/// lock can be observed from any thread.
///
/// # Memory Ordering
/// We use `Ordering::Relaxed` for all operations because:
/// - We only need atomicity (no partial updates)
/// - We don't need synchronization between different counters
/// - Statistics are "eventually consistent" - exact ordering doesn't matter
///
/// # Example
/// ```
/// use btreekit::BTreeStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = BTreeStats::new();
/// stats.lookups.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.lookups.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct BTreeStats {
    /// Number of `find`/`find_mut`/`contains_key` calls.
    pub lookups: AtomicU64,

    /// Lookups that found their key.
    pub hits: AtomicU64,

    /// Inserts that added a new key.
    pub inserts: AtomicU64,

    /// Inserts that replaced the value of an existing key.
    pub overwrites: AtomicU64,

    /// Node splits at any level, root included.
    pub node_splits: AtomicU64,

    /// Root splits; each one added a level to the tree.
    pub root_splits: AtomicU64,
}

impl BTreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            lookups: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            inserts: AtomicU64::new(0),
            overwrites: AtomicU64::new(0),
            node_splits: AtomicU64::new(0),
            root_splits: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn record_lookup(&self, hit: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if hit {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Lookup hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        self.snapshot().hit_rate()
    }

    /// Get a snapshot of current statistics.
    ///
    /// This returns a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            lookups: self.lookups.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            overwrites: self.overwrites.load(Ordering::Relaxed),
            node_splits: self.node_splits.load(Ordering::Relaxed),
            root_splits: self.root_splits.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        self.inserts.store(0, Ordering::Relaxed);
        self.overwrites.store(0, Ordering::Relaxed);
        self.node_splits.store(0, Ordering::Relaxed);
        self.root_splits.store(0, Ordering::Relaxed);
    }
}

impl Default for BTreeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of tree statistics.
///
/// Unlike `BTreeStats`, this is not atomic and can be safely
/// printed, compared, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub lookups: u64,
    pub hits: u64,
    pub inserts: u64,
    pub overwrites: u64,
    pub node_splits: u64,
    pub root_splits: u64,
}

impl StatsSnapshot {
    /// Lookup hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ lookups: {}, hit_rate: {:.2}%, inserts: {}, overwrites: {}, splits: {}, root_splits: {} }}",
            self.lookups,
            self.hit_rate() * 100.0,
            self.inserts,
            self.overwrites,
            self.node_splits,
            self.root_splits
        )
    }
}
