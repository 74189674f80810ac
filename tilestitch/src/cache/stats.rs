//! Counters describing what a [`TileCache`](super::TileCache) has done.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Point-in-time snapshot of cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Tiles served from the store.
    pub store_hits: u64,
    /// Tiles fetched from the tile server and decoded successfully.
    pub fetched: u64,
    /// Requests that produced no usable tile.
    pub fetch_failures: u64,
    /// Store reads or writes that failed.
    pub store_errors: u64,
}

impl CacheStats {
    /// Total number of tile lookups.
    pub fn requests(&self) -> u64 {
        self.store_hits + self.fetched + self.fetch_failures
    }

    /// Fraction of lookups served from the store, 0.0 when nothing was asked.
    pub fn hit_rate(&self) -> f64 {
        let total = self.requests();
        if total == 0 {
            0.0
        } else {
            self.store_hits as f64 / total as f64
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hits, {} fetched, {} failed ({:.1}% hit rate)",
            self.store_hits,
            self.fetched,
            self.fetch_failures,
            self.hit_rate() * 100.0
        )?;
        if self.store_errors > 0 {
            write!(f, ", {} store errors", self.store_errors)?;
        }
        Ok(())
    }
}

/// Live counters behind [`CacheStats`].
#[derive(Debug, Default)]
pub(crate) struct CacheCounters {
    store_hits: AtomicU64,
    fetched: AtomicU64,
    fetch_failures: AtomicU64,
    store_errors: AtomicU64,
}

impl CacheCounters {
    pub(crate) fn record_hit(&self) {
        self.store_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_fetch(&self) {
        self.fetched.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failure(&self) {
        self.fetch_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> CacheStats {
        CacheStats {
            store_hits: self.store_hits.load(Ordering::Relaxed),
            fetched: self.fetched.load(Ordering::Relaxed),
            fetch_failures: self.fetch_failures.load(Ordering::Relaxed),
            store_errors: self.store_errors.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_of_empty_stats_is_zero() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_counters_snapshot() {
        let counters = CacheCounters::default();
        counters.record_hit();
        counters.record_hit();
        counters.record_fetch();
        counters.record_failure();
        counters.record_store_error();

        let stats = counters.snapshot();
        assert_eq!(stats.store_hits, 2);
        assert_eq!(stats.fetched, 1);
        assert_eq!(stats.fetch_failures, 1);
        assert_eq!(stats.store_errors, 1);
        assert_eq!(stats.requests(), 4);
        assert!((stats.hit_rate() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let stats = CacheStats {
            store_hits: 3,
            fetched: 1,
            fetch_failures: 0,
            store_errors: 0,
        };
        assert_eq!(stats.to_string(), "3 hits, 1 fetched, 0 failed (75.0% hit rate)");
    }
}
