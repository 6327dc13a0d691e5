//! Convenience re-exports of the public surface.

pub use crate::error::CapacityError;
#[cfg(feature = "concurrency")]
pub use crate::lru::ConcurrentLruCache;
pub use crate::lru::LruCache;
pub use crate::stats::CacheStats;
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache};
