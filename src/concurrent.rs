//! Mutex-Guarded LRU Cache
//!
//! A thread-safe wrapper around [`LruCache`]: one `parking_lot::Mutex` owns
//! the entire engine, and every public operation runs inside a single
//! exclusive critical section.
//!
//! # Why one coarse lock?
//!
//! LRU lookups are writes: every `get` must splice its entry to the front
//! of the recency list, so a reader/writer split buys nothing. A single
//! mutex also keeps the correctness argument simple. The index, the order
//! sequence, and the counters are always mutated together, atomically with
//! respect to every other caller, and `stats()` can never observe a torn
//! update. Recency order stays globally exact and purge notifications fire
//! in strict eviction order, never reordered or batched.
//!
//! The deliberate cost: all threads serialize on the one lock, and the
//! purge notifier runs *while the lock is held*. A slow notifier stalls
//! every concurrent cache operation, and a notifier that calls back into
//! the same cache deadlocks. Both are documented caller obligations.
//!
//! # Example
//!
//! ```
//! use lru_rs::ConcurrentLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(100).unwrap());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 let key = format!("key_{}_{}", t, i);
//!                 cache.set(&key, i);
//!                 let _ = cache.get(&key);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert!(cache.len() <= 100);
//! ```

extern crate alloc;

use crate::error::Error;
use crate::lru::LruCache;
use crate::purge::Purger;
use crate::stats::CacheStats;
use core::hash::BuildHasher;
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe, fixed-capacity LRU cache with globally exact recency order.
///
/// All operations take `&self` and serialize on one internal mutex. Values
/// are cloned out of the critical section by [`get`](ConcurrentLruCache::get);
/// use [`get_with`](ConcurrentLruCache::get_with) to borrow the value under
/// the lock instead.
///
/// # Example
///
/// ```
/// use lru_rs::ConcurrentLruCache;
///
/// let cache = ConcurrentLruCache::new(2).unwrap();
/// cache.set("a", 1);
/// assert_eq!(cache.get("a"), Some(1));
/// ```
pub struct ConcurrentLruCache<V, S = DefaultHashBuilder> {
    inner: Mutex<LruCache<V, S>>,
}

impl<V> ConcurrentLruCache<V> {
    /// Creates a cache holding at most `limit` entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLimit`] if `limit` is zero.
    pub fn new(limit: usize) -> Result<ConcurrentLruCache<V>, Error> {
        Ok(ConcurrentLruCache {
            inner: Mutex::new(LruCache::new(limit)?),
        })
    }
}

impl<V, S: BuildHasher> ConcurrentLruCache<V, S> {
    /// Creates a cache with the specified limit and hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLimit`] if `limit` is zero.
    pub fn with_hasher(limit: usize, hash_builder: S) -> Result<Self, Error> {
        Ok(ConcurrentLruCache {
            inner: Mutex::new(LruCache::with_hasher(limit, hash_builder)?),
        })
    }

    /// Looks up `key`, refreshing its recency and cloning the value out.
    ///
    /// Counts a hit or a miss exactly like the underlying engine.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Looks up `key` and applies `f` to the value while the lock is held.
    ///
    /// Avoids cloning for read-mostly values. `f` must not call back into
    /// this cache.
    pub fn get_with<T>(&self, key: &str, f: impl FnOnce(&V) -> T) -> Option<T> {
        self.inner.lock().get(key).map(f)
    }

    /// Looks up `key` without touching recency order or counters, cloning
    /// the value out.
    pub fn peek(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// Inserts or updates `key`, returning the previous value if one
    /// existed. Evictions (and their purge notifications) run inside the
    /// same critical section.
    pub fn set(&self, key: &str, value: V) -> Option<V> {
        self.inner.lock().set(key, value)
    }

    /// Removes `key`, returning whether it was present. Counts the attempt
    /// and never notifies the purger.
    pub fn remove(&self, key: &str) -> bool {
        self.inner.lock().remove(key)
    }

    /// Evicts every entry, least recently used first, notifying the purger
    /// for each inside one critical section.
    pub fn remove_all(&self) {
        self.inner.lock().remove_all()
    }

    /// Registers the eviction notifier, replacing any previous one.
    ///
    /// The notifier will be invoked with the cache lock held: it must not
    /// call back into this cache.
    pub fn register_purger<P>(&self, purger: P)
    where
        P: Purger<V> + Send + 'static,
    {
        self.inner.lock().register_purger(purger)
    }

    /// Returns a coherent snapshot of the cache statistics, taken under the
    /// same lock as mutations.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Zeroes the hit/miss/expired/removes counters.
    pub fn reset_stats(&self) {
        self.inner.lock().reset_stats()
    }

    /// Returns the maximum number of entries the cache may hold.
    pub fn limit(&self) -> usize {
        self.inner.lock().limit()
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the fraction of `get` calls that found a value.
    pub fn hit_rate(&self) -> f64 {
        self.inner.lock().hit_rate()
    }
}

impl<V, S> core::fmt::Debug for ConcurrentLruCache<V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("ConcurrentLruCache");
        match self.inner.try_lock() {
            Some(inner) => s
                .field("limit", &inner.limit())
                .field("len", &inner.len())
                .finish(),
            None => s.field("locked", &true).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use alloc::format;
    use alloc::string::ToString;
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::sync::atomic::{AtomicU64, Ordering};
    use std::thread;

    #[test]
    fn test_basic_ops_through_lock() {
        let cache = ConcurrentLruCache::new(2).unwrap();
        assert_eq!(cache.set("a", 1), None);
        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("missing"), None);
        assert!(cache.remove("a"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalid_limit() {
        assert_eq!(
            ConcurrentLruCache::<i32>::new(0).unwrap_err(),
            Error::InvalidLimit
        );
    }

    #[test]
    fn test_get_with_borrows_under_lock() {
        let cache = ConcurrentLruCache::new(2).unwrap();
        cache.set("a", "value".to_string());
        assert_eq!(cache.get_with("a", |v| v.len()), Some(5));
        assert_eq!(cache.get_with("missing", |v| v.len()), None);
    }

    #[test]
    fn test_concurrent_inserts_respect_limit() {
        let cache = Arc::new(ConcurrentLruCache::new(100).unwrap());
        let mut handles: Vec<thread::JoinHandle<()>> = Vec::new();

        for t in 0..4 {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..500 {
                    let key = format!("thread_{}_key_{}", t, i);
                    cache.set(&key, i);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 100);
        assert_eq!(cache.stats().expired, 4 * 500 - 100);
    }

    #[test]
    fn test_purge_count_under_contention() {
        let purged = Arc::new(AtomicU64::new(0));
        let cache = Arc::new(ConcurrentLruCache::new(1).unwrap());
        let tally = Arc::clone(&purged);
        cache.register_purger(move |_: &str, _: &u64| {
            tally.fetch_add(1, Ordering::SeqCst);
        });

        let mut handles: Vec<thread::JoinHandle<()>> = Vec::new();
        for t in 0..4u64 {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..250u64 {
                    let key = format!("thread_{}_key_{}", t, i);
                    cache.set(&key, i);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // Every distinct-key insert after the very first evicts exactly one
        assert_eq!(purged.load(Ordering::SeqCst), 999);
        assert_eq!(cache.len(), 1);
    }
}
