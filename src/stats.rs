//! Utilization statistics.

/// Point-in-time utilization snapshot of a cache.
///
/// Captured on demand by [`LruCache::stats`](crate::lru::LruCache::stats);
/// nothing is tracked incrementally, so taking a snapshot has no effect on
/// the cache and repeated snapshots without intervening mutation are equal.
///
/// # Example
///
/// ```
/// use lrukit::lru::LruCache;
/// use lrukit::traits::CoreCache;
///
/// let mut cache = LruCache::new(4);
/// cache.insert(1, "one");
///
/// let stats = cache.stats();
/// assert_eq!(stats.len, 1);
/// assert_eq!(stats.capacity, 4);
/// assert!(!stats.is_full());
/// assert_eq!(stats.utilization(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries at snapshot time.
    pub len: usize,
    /// Maximum number of entries the cache can hold.
    pub capacity: usize,
}

impl CacheStats {
    /// Returns `true` if the cache was at capacity when the snapshot was
    /// taken.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Fraction of capacity in use, in `[0.0, 1.0]`.
    ///
    /// Well-defined because every cache has `capacity > 0`.
    #[inline]
    pub fn utilization(&self) -> f64 {
        self.len as f64 / self.capacity as f64
    }
}
