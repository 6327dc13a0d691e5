//! Least recently used (LRU) cache.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────┐
//!   │                       LruCache<K, V>                       │
//!   │                                                            │
//!   │   ┌────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, NonNull<Node>>   (O(1) key index)    │   │
//!   │   └──────────────────────┬─────────────────────────────┘   │
//!   │                          │                                 │
//!   │   ┌──────────────────────▼─────────────────────────────┐   │
//!   │   │  doubly-linked node list   (recency order)         │   │
//!   │   │                                                    │   │
//!   │   │  head ──► [MRU] ◄──► [..] ◄──► [LRU] ◄── tail      │   │
//!   │   └────────────────────────────────────────────────────┘   │
//!   └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each node owns its key and value and its prev/next links. The map gives
//! O(1) lookup; unlinking and relinking a node gives O(1) "mark most
//! recent" and O(1) "evict least recent". The conceptual model — every
//! entry stamped with a monotonically increasing last-access counter, evict
//! the minimum stamp — is realized by list position instead, so no scan for
//! the minimum is ever needed and recency ties cannot occur.
//!
//! | Method           | Complexity | Recency side effect          |
//! |------------------|------------|------------------------------|
//! | `insert(k, v)`   | O(1)*      | entry becomes MRU            |
//! | `get(&k)`        | O(1)       | entry becomes MRU            |
//! | `peek(&k)`       | O(1)       | none                         |
//! | `contains(&k)`   | O(1)       | none                         |
//! | `remove(&k)`     | O(1)       | entry gone                   |
//! | `touch(&k)`      | O(1)       | entry becomes MRU            |
//! | `pop_lru()`      | O(1)       | LRU entry gone               |
//! | `peek_lru()`     | O(1)       | none                         |
//! | `clear()`        | O(len)     | all entries gone             |
//! | `recency_rank()` | O(n)       | none (diagnostic)            |
//!
//! \* amortized; an insert of a new key at capacity also performs the O(1)
//! eviction of the tail entry.
//!
//! ## Thread safety
//!
//! - [`LruCache`]: **not** thread-safe; single-threaded by design, every
//!   operation runs to completion without suspension.
//! - [`ConcurrentLruCache`] (feature `concurrency`): cloneable handle that
//!   wraps the core in a `parking_lot::Mutex`. A `Mutex` rather than an
//!   `RwLock` because `get`, `touch`, and `insert` all mutate recency
//!   order, so almost every operation needs exclusive access anyway.
//!
//! ## Safety
//!
//! Nodes are heap-allocated and tracked through `NonNull` pointers owned
//! exclusively by one cache. Every node is freed exactly once: by `remove`,
//! by eviction, by `clear`, or by `Drop`. Debug builds cross-check the list
//! against the map after every mutation (`validate_invariants`).

use std::fmt;
use std::hash::Hash;
use std::ptr::NonNull;

#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::error::CapacityError;
use crate::stats::CacheStats;
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// Node in the recency list.
///
/// Link pointers first for locality; the key is needed for map removal
/// during eviction.
#[repr(C)]
struct Node<K, V> {
    prev: Option<NonNull<Node<K, V>>>,
    next: Option<NonNull<Node<K, V>>>,
    key: K,
    value: V,
}

/// A fixed-capacity cache that evicts the least recently used entry.
///
/// Keys are `Copy` (each key is held both in the index and in its node);
/// values are owned by the cache and returned by reference from `get` and
/// `peek`, or by value from `remove` and `pop_lru`. Values are opaque to
/// the cache — nothing is assumed or interpreted about them.
///
/// Capacity is positive, fixed at construction, and never changes. After
/// every public operation completes, `len() <= capacity()` holds.
///
/// # Example
///
/// ```
/// use lrukit::lru::LruCache;
/// use lrukit::traits::CoreCache;
///
/// let mut cache: LruCache<&str, u32> = LruCache::new(2);
/// cache.insert("a", 1);
/// cache.insert("b", 2);
///
/// cache.get(&"a");      // refresh "a"
/// cache.insert("c", 3); // evicts "b", the least recently touched
///
/// assert!(cache.contains(&"a"));
/// assert!(!cache.contains(&"b"));
/// assert!(cache.contains(&"c"));
/// ```
pub struct LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    map: FxHashMap<K, NonNull<Node<K, V>>>,
    head: Option<NonNull<Node<K, V>>>,
    tail: Option<NonNull<Node<K, V>>>,
    capacity: usize,
}

// SAFETY: the raw pointers only reference heap nodes owned by this value,
// so ownership transfers between threads cleanly when K and V are Send.
unsafe impl<K, V> Send for LruCache<K, V>
where
    K: Copy + Eq + Hash + Send,
    V: Send,
{
}

// SAFETY: shared references expose no interior mutability; all mutation
// goes through &mut self.
unsafe impl<K, V> Sync for LruCache<K, V>
where
    K: Copy + Eq + Hash + Sync,
    V: Sync,
{
}

impl<K, V> LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) for
    /// caller-supplied configuration that should be validated instead.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::lru::LruCache;
    ///
    /// let cache: LruCache<u32, String> = LruCache::new(100);
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self::try_new(capacity).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Creates an empty cache, rejecting a zero capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::lru::LruCache;
    ///
    /// assert!(LruCache::<u32, String>::try_new(100).is_ok());
    /// assert!(LruCache::<u32, String>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::new(capacity));
        }
        Ok(LruCache {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            head: None,
            tail: None,
            capacity,
        })
    }

    /// Read-only lookup that does not refresh recency.
    ///
    /// Unlike [`get`](CoreCache::get), the entry keeps its position in the
    /// eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::lru::LruCache;
    /// use lrukit::traits::CoreCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// assert_eq!(cache.peek(&1), Some(&"first"));
    ///
    /// // Key 1 was not refreshed, so it is still the eviction victim.
    /// cache.insert(3, "third");
    /// assert!(!cache.contains(&1));
    /// ```
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map
            .get(key)
            .map(|&node_ptr| unsafe { &(*node_ptr.as_ptr()).value })
    }

    /// Returns `true` if the cache is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.map.len() == self.capacity
    }

    /// Enumerates the current keys in no particular order.
    ///
    /// Diagnostic only: the iteration order is hash-map order and says
    /// nothing about recency or eviction.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    /// Captures a utilization snapshot.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::lru::LruCache;
    /// use lrukit::traits::CoreCache;
    ///
    /// let mut cache = LruCache::new(5);
    /// for key in 0..5u32 {
    ///     cache.insert(key, ());
    /// }
    ///
    /// let stats = cache.stats();
    /// assert!(stats.is_full());
    /// assert_eq!(stats.utilization(), 1.0);
    /// ```
    #[inline]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            len: self.map.len(),
            capacity: self.capacity,
        }
    }

    /// Unlink a node from the recency list without touching the map.
    #[inline(always)]
    fn detach(&mut self, node_ptr: NonNull<Node<K, V>>) {
        unsafe {
            let node = node_ptr.as_ref();
            let prev = node.prev;
            let next = node.next;

            match prev {
                Some(mut p) => p.as_mut().next = next,
                None => self.head = next,
            }

            match next {
                Some(mut n) => n.as_mut().prev = prev,
                None => self.tail = prev,
            }
        }
    }

    /// Link a node at the head (MRU position).
    #[inline(always)]
    fn attach_front(&mut self, mut node_ptr: NonNull<Node<K, V>>) {
        unsafe {
            let node = node_ptr.as_mut();
            node.prev = None;
            node.next = self.head;

            match self.head {
                Some(mut h) => h.as_mut().prev = Some(node_ptr),
                None => self.tail = Some(node_ptr),
            }

            self.head = Some(node_ptr);
        }
    }

    /// Unlink and take ownership of the tail (LRU) node.
    #[inline(always)]
    fn pop_tail(&mut self) -> Option<Box<Node<K, V>>> {
        self.tail.map(|tail_ptr| unsafe {
            let node = Box::from_raw(tail_ptr.as_ptr());

            self.tail = node.prev;
            match self.tail {
                Some(mut t) => t.as_mut().next = None,
                None => self.head = None,
            }

            node
        })
    }

    /// Cross-check the list against the map (debug builds only).
    fn validate_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            debug_assert!(self.map.len() <= self.capacity);

            if self.map.is_empty() {
                debug_assert!(self.head.is_none());
                debug_assert!(self.tail.is_none());
                return;
            }

            let mut count = 0usize;
            let mut current = self.head;
            while let Some(ptr) = current {
                count += 1;
                unsafe {
                    let node = ptr.as_ref();
                    debug_assert!(self.map.contains_key(&node.key));
                    current = node.next;
                }
                if count > self.map.len() {
                    panic!("cycle detected in recency list");
                }
            }

            debug_assert_eq!(count, self.map.len());
        }
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Inserts or overwrites, evicting the LRU entry when a new key arrives
    /// at capacity.
    ///
    /// Overwriting an existing key refreshes its recency and never evicts.
    /// A new key at capacity evicts exactly one entry — the tail — before
    /// insertion, so `len() <= capacity()` holds when this returns.
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&node_ptr) = self.map.get(&key) {
            // Overwrite in place and refresh recency; size is unchanged.
            let previous = unsafe {
                let node = &mut *node_ptr.as_ptr();
                std::mem::replace(&mut node.value, value)
            };

            self.detach(node_ptr);
            self.attach_front(node_ptr);

            self.validate_invariants();
            return Some(previous);
        }

        if self.map.len() >= self.capacity {
            if let Some(evicted) = self.pop_tail() {
                self.map.remove(&evicted.key);
            }
        }

        let node = Box::new(Node {
            prev: None,
            next: None,
            key,
            value,
        });
        // Box::into_raw never returns null.
        let node_ptr = NonNull::new(Box::into_raw(node)).unwrap();

        self.map.insert(key, node_ptr);
        self.attach_front(node_ptr);

        self.validate_invariants();
        None
    }

    /// Looks up a key and, on a hit, moves it to the MRU position.
    ///
    /// A miss is a normal outcome: it returns `None` and changes nothing.
    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        let node_ptr = match self.map.get(key) {
            Some(&ptr) => ptr,
            None => return None,
        };

        self.detach(node_ptr);
        self.attach_front(node_ptr);

        self.validate_invariants();

        unsafe { Some(&(*node_ptr.as_ptr()).value) }
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry. Afterwards the cache is indistinguishable from a
    /// freshly constructed one with the same capacity.
    fn clear(&mut self) {
        while self.pop_tail().is_some() {}
        self.map.clear();

        self.validate_invariants();
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Removes a key, returning its value. Absent keys return `None`; no
    /// other entry is affected either way.
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        let node_ptr = self.map.remove(key)?;

        self.detach(node_ptr);
        let node = unsafe { Box::from_raw(node_ptr.as_ptr()) };

        self.validate_invariants();

        Some(node.value)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    #[inline]
    fn pop_lru(&mut self) -> Option<(K, V)> {
        let node = self.pop_tail()?;
        self.map.remove(&node.key);

        self.validate_invariants();

        Some((node.key, node.value))
    }

    #[inline]
    fn peek_lru(&self) -> Option<(&K, &V)> {
        self.tail.map(|tail_ptr| unsafe {
            let node = tail_ptr.as_ref();
            (&node.key, &node.value)
        })
    }

    #[inline]
    fn touch(&mut self, key: &K) -> bool {
        if let Some(&node_ptr) = self.map.get(key) {
            self.detach(node_ptr);
            self.attach_front(node_ptr);

            self.validate_invariants();
            true
        } else {
            false
        }
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        let &target_ptr = self.map.get(key)?;
        let mut rank = 0usize;
        let mut current = self.head;

        while let Some(ptr) = current {
            if ptr == target_ptr {
                return Some(rank);
            }
            rank += 1;
            current = unsafe { ptr.as_ref().next };
        }
        None
    }
}

impl<K, V> Drop for LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    fn drop(&mut self) {
        while self.pop_tail().is_some() {}
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Cloneable, thread-safe handle around [`LruCache`].
///
/// The core stays single-threaded; this wrapper is the packaged form of the
/// caller-side discipline of putting the whole cache behind one lock. Every
/// clone refers to the same underlying cache.
///
/// Value-returning operations clone (`V: Clone`) because no reference can
/// outlive the lock guard.
///
/// # Example
///
/// ```
/// use lrukit::lru::ConcurrentLruCache;
///
/// let cache: ConcurrentLruCache<u32, String> = ConcurrentLruCache::new(100);
/// cache.insert(1, "one".to_string());
///
/// let handle = cache.clone();
/// std::thread::spawn(move || {
///     handle.insert(2, "two".to_string());
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(cache.get(&1).as_deref(), Some("one"));
/// assert_eq!(cache.len(), 2);
/// ```
#[cfg(feature = "concurrency")]
#[derive(Clone)]
pub struct ConcurrentLruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    inner: Arc<Mutex<LruCache<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Creates a new shared cache with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; see [`try_new`](Self::try_new).
    pub fn new(capacity: usize) -> Self {
        ConcurrentLruCache {
            inner: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Creates a new shared cache, rejecting a zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, CapacityError> {
        Ok(ConcurrentLruCache {
            inner: Arc::new(Mutex::new(LruCache::try_new(capacity)?)),
        })
    }

    /// Inserts a value, returning the previous one if the key existed.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().insert(key, value)
    }

    /// Gets a clone of the value, moving the entry to the MRU position.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Gets a clone of the value without refreshing recency.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// Returns `true` if the key exists. No recency side effect.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Removes an entry, returning its value.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Marks an entry as most recently used without retrieving it.
    pub fn touch(&self, key: &K) -> bool {
        self.inner.lock().touch(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.inner.lock().pop_lru()
    }

    /// Clones the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(K, V)>
    where
        V: Clone,
    {
        self.inner
            .lock()
            .peek_lru()
            .map(|(k, v)| (*k, v.clone()))
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns `true` if the cache is at capacity.
    pub fn is_full(&self) -> bool {
        self.inner.lock().is_full()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.lock().clear()
    }

    /// Collects the current keys in no particular order (diagnostic).
    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().keys().copied().collect()
    }

    /// Captures a utilization snapshot.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentLruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.lock();
        f.debug_struct("ConcurrentLruCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn try_new_accepts_positive_capacity() {
            let cache: LruCache<u32, u32> = LruCache::try_new(1).unwrap();
            assert_eq!(cache.capacity(), 1);
            assert_eq!(cache.len(), 0);

            let cache: LruCache<u32, u32> = LruCache::try_new(1000).unwrap();
            assert_eq!(cache.capacity(), 1000);
        }

        #[test]
        fn try_new_rejects_zero_capacity() {
            let err = LruCache::<u32, u32>::try_new(0).unwrap_err();
            assert_eq!(err.requested(), 0);
        }

        #[test]
        #[should_panic(expected = "capacity must be greater than zero")]
        fn new_panics_on_zero_capacity() {
            let _cache: LruCache<u32, u32> = LruCache::new(0);
        }

        #[test]
        fn new_cache_is_empty() {
            let cache: LruCache<u32, u32> = LruCache::new(8);
            assert!(cache.is_empty());
            assert!(!cache.is_full());
            assert_eq!(cache.keys().count(), 0);
        }
    }

    mod basic_behavior {
        use super::*;

        #[test]
        fn insert_then_get_round_trips() {
            let mut cache = LruCache::new(5);
            assert_eq!(cache.insert(1, 100), None);
            assert_eq!(cache.get(&1), Some(&100));
            assert_eq!(cache.len(), 1);
        }

        #[test]
        fn get_miss_returns_none_and_changes_nothing() {
            let mut cache = LruCache::new(5);
            cache.insert(1, 100);

            assert_eq!(cache.get(&2), None);
            assert_eq!(cache.len(), 1);
        }

        #[test]
        fn insert_existing_key_overwrites_without_growing() {
            let mut cache = LruCache::new(3);
            assert_eq!(cache.insert(1, 100), None);
            assert_eq!(cache.insert(1, 200), Some(100));

            assert_eq!(cache.len(), 1);
            assert_eq!(cache.get(&1), Some(&200));
        }

        #[test]
        fn remove_returns_value_then_none() {
            let mut cache = LruCache::new(10);
            cache.insert(1, 100);

            assert_eq!(cache.remove(&1), Some(100));
            assert!(!cache.contains(&1));
            assert_eq!(cache.remove(&1), None);
            assert_eq!(cache.len(), 0);
        }

        #[test]
        fn remove_does_not_affect_other_entries() {
            let mut cache = LruCache::new(5);
            for key in 0..5u32 {
                cache.insert(key, key * 10);
            }

            cache.remove(&2);
            assert_eq!(cache.len(), 4);
            for key in [0u32, 1, 3, 4] {
                assert!(cache.contains(&key));
            }
        }

        #[test]
        fn clear_empties_the_cache() {
            let mut cache = LruCache::new(5);
            for key in 0..3u32 {
                cache.insert(key, key);
            }

            cache.clear();
            assert!(cache.is_empty());
            assert_eq!(cache.capacity(), 5);
            for key in 0..3u32 {
                assert!(!cache.contains(&key));
            }
        }

        #[test]
        fn clear_on_empty_cache_is_a_noop() {
            let mut cache: LruCache<u32, u32> = LruCache::new(5);
            cache.clear();
            assert!(cache.is_empty());

            // Still fully usable afterwards.
            cache.insert(1, 1);
            assert_eq!(cache.get(&1), Some(&1));
        }

        #[test]
        fn keys_enumerates_current_entries() {
            let mut cache = LruCache::new(4);
            for key in 0..3u32 {
                cache.insert(key, ());
            }

            let mut keys: Vec<u32> = cache.keys().copied().collect();
            keys.sort_unstable();
            assert_eq!(keys, vec![0, 1, 2]);
        }

        #[test]
        fn extend_inserts_all_pairs() {
            let mut cache = LruCache::new(4);
            cache.extend([(1u32, 10u32), (2, 20), (3, 30)]);
            assert_eq!(cache.len(), 3);
            assert_eq!(cache.peek(&2), Some(&20));
        }
    }

    mod eviction_order {
        use super::*;

        #[test]
        fn new_key_at_capacity_evicts_exactly_the_lru() {
            let mut cache = LruCache::new(2);
            cache.insert(1, 100);
            cache.insert(2, 200);

            cache.insert(3, 300);
            assert_eq!(cache.len(), 2);
            assert!(!cache.contains(&1));
            assert!(cache.contains(&2));
            assert!(cache.contains(&3));
        }

        #[test]
        fn get_refreshes_recency() {
            let mut cache = LruCache::new(3);
            cache.insert(1, 100);
            cache.insert(2, 200);
            cache.insert(3, 300);

            cache.get(&1);

            cache.insert(4, 400);
            assert!(cache.contains(&1));
            assert!(!cache.contains(&2));
        }

        #[test]
        fn overwrite_refreshes_recency_without_eviction() {
            let mut cache = LruCache::new(2);
            cache.insert(1, 100);
            cache.insert(2, 200);

            // Overwrite at capacity: no eviction, key 1 becomes MRU.
            cache.insert(1, 101);
            assert_eq!(cache.len(), 2);
            assert!(cache.contains(&2));

            cache.insert(3, 300);
            assert!(cache.contains(&1));
            assert!(!cache.contains(&2));
        }

        #[test]
        fn peek_and_contains_do_not_refresh_recency() {
            let mut cache = LruCache::new(2);
            cache.insert(1, 100);
            cache.insert(2, 200);

            cache.peek(&1);
            assert!(cache.contains(&1));

            // Key 1 is still the victim.
            cache.insert(3, 300);
            assert!(!cache.contains(&1));
        }

        #[test]
        fn touch_refreshes_recency() {
            let mut cache = LruCache::new(2);
            cache.insert(1, 100);
            cache.insert(2, 200);

            assert!(cache.touch(&1));
            assert!(!cache.touch(&99));

            cache.insert(3, 300);
            assert!(cache.contains(&1));
            assert!(!cache.contains(&2));
        }

        #[test]
        fn capacity_one_always_evicts_the_sole_entry() {
            let mut cache = LruCache::new(1);
            for key in 0..10u32 {
                cache.insert(key, key);
                assert_eq!(cache.len(), 1);
                assert!(cache.contains(&key));
                if key > 0 {
                    assert!(!cache.contains(&(key - 1)));
                }
            }
        }

        #[test]
        fn pop_lru_removes_in_recency_order() {
            let mut cache = LruCache::new(3);
            cache.insert(1, 100);
            cache.insert(2, 200);
            cache.insert(3, 300);
            cache.get(&1);

            assert_eq!(cache.pop_lru(), Some((2, 200)));
            assert_eq!(cache.pop_lru(), Some((3, 300)));
            assert_eq!(cache.pop_lru(), Some((1, 100)));
            assert_eq!(cache.pop_lru(), None);
        }

        #[test]
        fn peek_lru_does_not_remove_or_reorder() {
            let mut cache = LruCache::new(3);
            cache.insert(1, 100);
            cache.insert(2, 200);

            assert_eq!(cache.peek_lru(), Some((&1, &100)));
            assert_eq!(cache.peek_lru(), Some((&1, &100)));
            assert_eq!(cache.len(), 2);
        }

        #[test]
        fn recency_rank_reflects_access_order() {
            let mut cache = LruCache::new(3);
            cache.insert(1, ());
            cache.insert(2, ());
            cache.insert(3, ());

            assert_eq!(cache.recency_rank(&3), Some(0));
            assert_eq!(cache.recency_rank(&2), Some(1));
            assert_eq!(cache.recency_rank(&1), Some(2));

            cache.get(&1);
            assert_eq!(cache.recency_rank(&1), Some(0));
            assert_eq!(cache.recency_rank(&99), None);
        }
    }

    mod memory {
        use super::*;
        use std::sync::Arc as StdArc;

        #[test]
        fn clear_drops_all_values() {
            let sentinel = StdArc::new(0u32);
            let mut cache = LruCache::new(4);
            for key in 0..4u32 {
                cache.insert(key, StdArc::clone(&sentinel));
            }
            assert_eq!(StdArc::strong_count(&sentinel), 5);

            cache.clear();
            assert_eq!(StdArc::strong_count(&sentinel), 1);
        }

        #[test]
        fn drop_frees_every_node() {
            let sentinel = StdArc::new(0u32);
            {
                let mut cache = LruCache::new(8);
                for key in 0..8u32 {
                    cache.insert(key, StdArc::clone(&sentinel));
                }
                assert_eq!(StdArc::strong_count(&sentinel), 9);
            }
            assert_eq!(StdArc::strong_count(&sentinel), 1);
        }

        #[test]
        fn eviction_drops_the_evicted_value() {
            let sentinel = StdArc::new(0u32);
            let mut cache = LruCache::new(1);
            cache.insert(1, StdArc::clone(&sentinel));
            assert_eq!(StdArc::strong_count(&sentinel), 2);

            cache.insert(2, StdArc::new(1));
            assert_eq!(StdArc::strong_count(&sentinel), 1);
        }
    }

    #[cfg(feature = "concurrency")]
    mod concurrent {
        use super::*;
        use std::thread;

        #[test]
        fn shared_handle_sees_writes_from_other_threads() {
            let cache: ConcurrentLruCache<u32, u32> = ConcurrentLruCache::new(64);

            let handles: Vec<_> = (0..4u32)
                .map(|t| {
                    let cache = cache.clone();
                    thread::spawn(move || {
                        for i in 0..16u32 {
                            cache.insert(t * 16 + i, i);
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            assert_eq!(cache.len(), 64);
            assert!(cache.is_full());
        }

        #[test]
        fn wrapper_preserves_eviction_semantics() {
            let cache: ConcurrentLruCache<u32, &str> = ConcurrentLruCache::new(2);
            cache.insert(1, "a");
            cache.insert(2, "b");
            cache.get(&1);
            cache.insert(3, "c");

            assert!(cache.contains(&1));
            assert!(!cache.contains(&2));
            assert!(cache.contains(&3));
        }

        #[test]
        fn try_new_rejects_zero_capacity() {
            assert!(ConcurrentLruCache::<u32, u32>::try_new(0).is_err());
        }
    }
}
