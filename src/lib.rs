//! lrukit: a fixed-capacity, least-recently-used cache.
//!
//! The crate provides a single policy core, [`lru::LruCache`], backed by a
//! hash index plus an intrusive recency list so that `insert`, `get`,
//! `contains`, and `remove` are all O(1). When an insert of a new key would
//! exceed the configured capacity, the entry whose most recent access is
//! furthest in the past is evicted first.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache: LruCache<&str, u32> = LruCache::new(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.get(&"a");       // "a" is now most recently used
//! cache.insert("c", 3);  // evicts "b"
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.stats().utilization(), 1.0);
//! ```
//!
//! Capacity is fixed at construction and must be positive; `LruCache::new`
//! panics on zero and [`lru::LruCache::try_new`] returns
//! [`error::CapacityError`] instead. A cache miss is an ordinary `None`,
//! never an error.
//!
//! The core is single-threaded by design. With the `concurrency` feature
//! (default), [`lru::ConcurrentLruCache`] wraps the core behind a
//! `parking_lot::Mutex` for shared use.

pub mod error;
pub mod lru;
pub mod prelude;
pub mod stats;
pub mod traits;
