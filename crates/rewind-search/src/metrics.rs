//! Per-search counters.
//!
//! [`SearchMetrics`] is the snapshot handed back in a
//! [`SearchReport`](crate::SearchReport). While the search runs, counters
//! live in a lock-free recorder so forked subtrees can update them
//! concurrently.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use crate::merge::MergeStats;

/// Counters collected during a single predecessor search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Leaf catalog lookups (one per goal cell).
    pub leaves: u64,
    /// Two-way joins performed (a quad merge counts three).
    pub merges: u64,
    /// Grids produced by all joins, intermediate ones included.
    pub candidates_generated: u64,
    /// Largest candidate set held by any node.
    pub peak_set_size: usize,
    /// Join inputs that found no partner on the shared rim.
    pub dead_ends: u64,
    /// Wall-clock time for the whole search, in microseconds.
    pub total_us: u64,
}

#[derive(Debug, Default)]
pub(crate) struct MetricsRecorder {
    leaves: AtomicU64,
    merges: AtomicU64,
    candidates_generated: AtomicU64,
    peak_set_size: AtomicUsize,
    dead_ends: AtomicU64,
}

impl MetricsRecorder {
    pub(crate) fn record_leaf(&self, set_size: usize) {
        self.leaves.fetch_add(1, Ordering::Relaxed);
        self.peak_set_size.fetch_max(set_size, Ordering::Relaxed);
    }

    pub(crate) fn record_merge(&self, stats: MergeStats, set_size: usize) {
        self.merges.fetch_add(stats.joins, Ordering::Relaxed);
        self.candidates_generated
            .fetch_add(stats.produced, Ordering::Relaxed);
        self.dead_ends.fetch_add(stats.dead_ends, Ordering::Relaxed);
        self.peak_set_size.fetch_max(set_size, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, total_us: u64) -> SearchMetrics {
        SearchMetrics {
            leaves: self.leaves.load(Ordering::Relaxed),
            merges: self.merges.load(Ordering::Relaxed),
            candidates_generated: self.candidates_generated.load(Ordering::Relaxed),
            peak_set_size: self.peak_set_size.load(Ordering::Relaxed),
            dead_ends: self.dead_ends.load(Ordering::Relaxed),
            total_us,
        }
    }
}
