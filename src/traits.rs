//! Cache trait hierarchy.
//!
//! Three layers, each adding operations that make sense for a strictly
//! smaller set of policies:
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len / is_empty / capacity              │
//!   │  clear(&mut)                            │
//!   └────────────────────┬────────────────────┘
//!                        │
//!                        ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableCache<K, V>            │
//!   │                                         │
//!   │  remove(&K) → Option<V>                 │
//!   │  remove_batch(&[K]) → Vec<Option<V>>    │
//!   └────────────────────┬────────────────────┘
//!                        │
//!                        ▼
//!   ┌─────────────────────────────────────────┐
//!   │           LruCacheTrait<K, V>           │
//!   │                                         │
//!   │  pop_lru() → (K, V)                     │
//!   │  peek_lru() → (&K, &V)                  │
//!   │  touch(&K) → bool                       │
//!   │  recency_rank(&K) → Option<usize>       │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! The split keeps generic call sites honest: code that only warms or reads
//! a cache takes `CoreCache`, code that invalidates takes `MutableCache`,
//! and only recency-aware code sees the LRU-specific operations.
//!
//! | Trait           | Extends        | Purpose                            |
//! |-----------------|----------------|------------------------------------|
//! | `CoreCache`     | -              | Universal cache operations         |
//! | `MutableCache`  | `CoreCache`    | Arbitrary key removal              |
//! | `LruCacheTrait` | `MutableCache` | Recency-ordered eviction + touch   |

/// Core operations every cache supports regardless of eviction policy.
///
/// # Example
///
/// ```
/// use lrukit::lru::LruCache;
/// use lrukit::traits::CoreCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key
    /// already existed.
    ///
    /// Inserting an existing key overwrites in place and never evicts.
    /// Inserting a new key while the cache is full evicts exactly one entry
    /// according to the eviction policy before the new entry is added.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::lru::LruCache;
    /// use lrukit::traits::CoreCache;
    ///
    /// let mut cache = LruCache::new(10);
    /// assert_eq!(cache.insert(1, "first"), None);
    /// assert_eq!(cache.insert(1, "second"), Some("first"));
    /// ```
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// A hit updates the policy's access state (for LRU, the entry becomes
    /// most recently used). A miss returns `None` and changes nothing. Use
    /// [`contains`](Self::contains) to check existence without touching
    /// eviction order.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks whether a key exists without updating access state.
    ///
    /// Unlike [`get`](Self::get), this never affects which entry would be
    /// evicted next.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries the cache can hold.
    fn capacity(&self) -> usize;

    /// Removes all entries. Capacity is unchanged.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use lrukit::lru::LruCache;
/// use lrukit::traits::{CoreCache, MutableCache};
///
/// fn invalidate<C: MutableCache<u64, &'static str>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = LruCache::new(10);
/// cache.insert(1, "one");
/// cache.insert(2, "two");
/// invalidate(&mut cache, &[1]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a key, returning its value if it was present.
    ///
    /// Removing an absent key is not an error; it returns `None` and leaves
    /// the cache untouched.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys, returning the removed values in input order.
    ///
    /// The default implementation loops over [`remove`](Self::remove).
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// LRU-specific operations over the recency order.
///
/// Entries are totally ordered by last access; the least recently accessed
/// entry is the eviction victim.
///
/// # Example
///
/// ```
/// use lrukit::lru::LruCache;
/// use lrukit::traits::{CoreCache, LruCacheTrait};
///
/// let mut cache = LruCache::new(3);
/// cache.insert(1, "first");
/// cache.insert(2, "second");
/// cache.insert(3, "third");
///
/// // Access key 1 so key 2 becomes the eviction victim.
/// cache.get(&1);
/// assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(2));
///
/// // Refresh key 2 without retrieving its value.
/// assert!(cache.touch(&2));
/// let (key, _) = cache.pop_lru().unwrap();
/// assert_eq!(key, 3);
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry, or `None` if the
    /// cache is empty.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Peeks at the least recently used entry without removing it or
    /// updating its access state.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks a key as most recently used without retrieving its value.
    ///
    /// Returns `true` if the key was present.
    fn touch(&mut self, key: &K) -> bool;

    /// Returns the position of a key in recency order (0 = most recent).
    ///
    /// O(n) scan; intended for diagnostics and tests, not hot paths.
    fn recency_rank(&self, key: &K) -> Option<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal Vec-backed implementation to exercise the trait defaults
    // independently of the real policy core.
    struct VecCache {
        data: Vec<(u32, String)>,
        capacity: usize,
    }

    impl CoreCache<u32, String> for VecCache {
        fn insert(&mut self, key: u32, value: String) -> Option<String> {
            if let Some((_, existing)) = self.data.iter_mut().find(|(k, _)| *k == key) {
                return Some(std::mem::replace(existing, value));
            }
            if self.data.len() >= self.capacity {
                self.data.remove(0);
            }
            self.data.push((key, value));
            None
        }

        fn get(&mut self, key: &u32) -> Option<&String> {
            self.data.iter().find(|(k, _)| k == key).map(|(_, v)| v)
        }

        fn contains(&self, key: &u32) -> bool {
            self.data.iter().any(|(k, _)| k == key)
        }

        fn len(&self) -> usize {
            self.data.len()
        }

        fn capacity(&self) -> usize {
            self.capacity
        }

        fn clear(&mut self) {
            self.data.clear();
        }
    }

    impl MutableCache<u32, String> for VecCache {
        fn remove(&mut self, key: &u32) -> Option<String> {
            let idx = self.data.iter().position(|(k, _)| k == key)?;
            Some(self.data.remove(idx).1)
        }
    }

    #[test]
    fn is_empty_default_tracks_len() {
        let mut cache = VecCache {
            data: Vec::new(),
            capacity: 4,
        };
        assert!(cache.is_empty());
        cache.insert(1, "one".to_string());
        assert!(!cache.is_empty());
    }

    #[test]
    fn remove_batch_default_preserves_input_order() {
        let mut cache = VecCache {
            data: Vec::new(),
            capacity: 4,
        };
        cache.insert(1, "one".to_string());
        cache.insert(2, "two".to_string());
        cache.insert(3, "three".to_string());

        let removed = cache.remove_batch(&[1, 99, 3]);
        assert_eq!(
            removed,
            vec![Some("one".to_string()), None, Some("three".to_string())]
        );
        assert_eq!(cache.len(), 1);
    }
}
