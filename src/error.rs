//! Error types for the lrukit library.
//!
//! The error taxonomy is deliberately minimal. The only caller error in the
//! crate is constructing a cache with zero capacity, reported as
//! [`CapacityError`]. Everything else is a total function over its domain:
//! a `get`, `remove`, or `contains` miss comes back through the normal
//! `Option`/`bool` channel and is never an error.
//!
//! ```
//! use lrukit::error::CapacityError;
//! use lrukit::lru::LruCache;
//!
//! let err = LruCache::<u64, u64>::try_new(0).unwrap_err();
//! assert_eq!(err, CapacityError::new(0));
//! assert!(err.to_string().contains("capacity"));
//! ```

use std::fmt;

/// Error returned when a cache is constructed with an invalid capacity.
///
/// A zero-capacity LRU cache has no sensible semantics (every insert would
/// have to evict the entry it just created), so fallible constructors such
/// as [`LruCache::try_new`](crate::lru::LruCache::try_new) reject it up
/// front rather than clamping or deferring the failure to first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    requested: usize,
}

impl CapacityError {
    /// Creates a new `CapacityError` for the rejected capacity value.
    #[inline]
    pub fn new(requested: usize) -> Self {
        Self { requested }
    }

    /// Returns the capacity value that was rejected.
    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid cache capacity {}: capacity must be greater than zero",
            self.requested
        )
    }
}

impl std::error::Error for CapacityError {}
