//! Least Recently Used (LRU) Cache Engine
//!
//! This module provides a fixed-capacity cache over string keys with O(1)
//! lookup, insertion, update, and eviction. Entries are kept in strict
//! recency order: every `get` and every `set` of an existing key moves the
//! entry to the front of the order sequence, and capacity pressure always
//! evicts from the back.
//!
//! # Algorithm
//!
//! Two co-indexed structures back the cache: a doubly linked recency list
//! and a hash map from key to list node. The map is the sole source of node
//! identity; list links are the only ordering state. The two are updated
//! together inside every operation, so `list.len() == map.len()` at all
//! times.
//!
//! # Accounting
//!
//! The cache keeps four cumulative counters (hits, misses, expired for
//! capacity evictions, removes for explicit removal attempts), exposed as a
//! coherent [`CacheStats`] snapshot. `hit_rate()` derives the fraction of
//! successful lookups. Counters can be zeroed at runtime without touching
//! the cached entries.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe; all operations take `&mut self`.
//! For concurrent access use `ConcurrentLruCache` (feature `concurrent`),
//! which guards one of these engines with a single mutex.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::error::Error;
use crate::list::{Entry, List};
use crate::purge::Purger;
use crate::stats::{CacheStats, StatCounters};
use alloc::boxed::Box;
use alloc::string::String;
use core::hash::BuildHasher;
use core::mem;
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::hash_map::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// A fixed-capacity LRU cache mapping string keys to values of type `V`.
///
/// The cache is created with a positive entry limit and never holds more
/// than that many entries: before a new key is inserted at capacity, the
/// least recently used entry is evicted (incrementing the `expired` counter
/// and notifying the registered [`Purger`], if any).
///
/// # Examples
///
/// ```
/// use lru_rs::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
///
/// cache.set("apple", 1);
/// cache.set("banana", 2);
///
/// // Accessing an entry refreshes its recency
/// assert_eq!(cache.get("apple"), Some(&1));
///
/// // Inserting beyond capacity evicts the least recently used entry
/// cache.set("cherry", 3);
/// assert_eq!(cache.get("banana"), None);
/// assert_eq!(cache.get("apple"), Some(&1));
/// assert_eq!(cache.get("cherry"), Some(&3));
/// ```
///
/// # Safety
///
/// The `map` field holds raw pointers into nodes owned by `list`. A pointer
/// stays valid as long as:
/// - it was obtained from `list.push_front`
/// - the node has not been removed from the list
/// - the cache has not been dropped
pub struct LruCache<V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<CacheEntry<V>>,
    map: HashMap<String, *mut Entry<CacheEntry<V>>, S>,
    counters: StatCounters,
    purger: Option<Box<dyn Purger<V> + Send>>,
}

// SAFETY: LruCache owns all of its data; the raw pointers in `map` point
// only at nodes owned by `list`, and the purger box is itself Send.
unsafe impl<V: Send, S: Send> Send for LruCache<V, S> {}

// SAFETY: all mutation requires &mut self; shared references cannot cause
// data races.
unsafe impl<V: Send, S: Sync> Sync for LruCache<V, S> {}

impl<V> LruCache<V> {
    /// Creates a cache holding at most `limit` entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLimit`] if `limit` is zero. There is no other
    /// construction failure mode.
    pub fn new(limit: usize) -> Result<LruCache<V>, Error> {
        LruCache::with_hasher(limit, DefaultHashBuilder::default())
    }
}

impl<V, S: BuildHasher> LruCache<V, S> {
    /// Creates a cache with the specified limit and hash builder.
    ///
    /// Use this for deterministic hashing or DoS-resistant hashers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLimit`] if `limit` is zero.
    pub fn with_hasher(limit: usize, hash_builder: S) -> Result<Self, Error> {
        let capacity = NonZeroUsize::new(limit).ok_or(Error::InvalidLimit)?;
        let map_capacity = capacity.get().next_power_of_two();
        Ok(LruCache {
            config: LruCacheConfig::new(capacity),
            list: List::new(),
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
            counters: StatCounters::default(),
            purger: None,
        })
    }

    /// Returns the maximum number of entries the cache may hold.
    #[inline]
    pub fn limit(&self) -> usize {
        self.config.capacity.get()
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Looks up `key`, refreshing its recency on a hit.
    ///
    /// Every call increments exactly one of the hit/miss counters: hits on a
    /// found key, misses otherwise.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        if let Some(node) = self.map.get(key).copied() {
            self.counters.record_hit();
            unsafe {
                // SAFETY: node comes from our map and is owned by `list`
                self.list.move_to_front(node);
                Some(&(*node).get_value().value)
            }
        } else {
            self.counters.record_miss();
            None
        }
    }

    /// Looks up `key` for in-place mutation, refreshing its recency on a hit.
    ///
    /// Counts hits and misses exactly like [`get`](LruCache::get).
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        if let Some(node) = self.map.get(key).copied() {
            self.counters.record_hit();
            unsafe {
                // SAFETY: node comes from our map and is owned by `list`
                self.list.move_to_front(node);
                Some(&mut (*node).get_value_mut().value)
            }
        } else {
            self.counters.record_miss();
            None
        }
    }

    /// Looks up `key` without touching recency order or any counter.
    ///
    /// Useful for inspection paths that must not disturb eviction behavior
    /// or skew the hit rate.
    pub fn peek(&self, key: &str) -> Option<&V> {
        let node = self.map.get(key).copied()?;
        // SAFETY: node comes from our map and is owned by `list`
        unsafe { Some(&(*node).get_value().value) }
    }

    /// Inserts or updates `key`, returning the previous value if one existed.
    ///
    /// An existing key is overwritten in place and moved to the front of the
    /// recency order; this counts as neither hit nor miss and never evicts.
    /// A new key is inserted at the front; if the cache is at (or somehow
    /// above) its limit, back entries are evicted first, one at a time, each
    /// incrementing the `expired` counter and notifying the registered
    /// purger before the next eviction or the insertion proceeds.
    pub fn set(&mut self, key: &str, value: V) -> Option<V> {
        if let Some(node) = self.map.get(key).copied() {
            unsafe {
                // SAFETY: node comes from our map and is owned by `list`
                self.list.move_to_front(node);
                let slot = &mut (*node).get_value_mut().value;
                return Some(mem::replace(slot, value));
            }
        }

        // The loop rather than a single eviction keeps the invariant even if
        // the cache ever found itself above its limit.
        while self.list.len() >= self.config.capacity.get() {
            self.evict_oldest();
        }

        let node = self.list.push_front(CacheEntry::new(String::from(key), value));
        self.map.insert(String::from(key), node);
        None
    }

    /// Removes `key`, returning whether it was present.
    ///
    /// The `removes` counter is incremented whether or not the key was
    /// found: it accounts removal *attempts*, as distinct from the
    /// `expired` counter which only tracks capacity-driven eviction. The
    /// purge notifier is never invoked for explicit removal.
    pub fn remove(&mut self, key: &str) -> bool {
        self.counters.record_remove();
        match self.map.remove(key) {
            Some(node) => {
                // SAFETY: node was held by our map until just now and is
                // owned by `list`; the returned value is dropped here
                unsafe {
                    self.list.remove(node);
                }
                true
            }
            None => false,
        }
    }

    /// Evicts every entry, least recently used first.
    ///
    /// This drains through the same path as capacity eviction: each entry
    /// increments the `expired` counter and is reported to the purge
    /// notifier. Use [`remove`](LruCache::remove) per key instead when
    /// notification is not wanted.
    pub fn remove_all(&mut self) {
        while !self.list.is_empty() {
            self.evict_oldest();
        }
    }

    /// Registers `purger` as the eviction notifier, replacing any previous
    /// registration. Takes effect for subsequent evictions only.
    pub fn register_purger<P>(&mut self, purger: P)
    where
        P: Purger<V> + Send + 'static,
    {
        self.purger = Some(Box::new(purger));
    }

    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.counters.hits,
            misses: self.counters.misses,
            limit: self.limit(),
            len: self.len(),
            expired: self.counters.expired,
            removes: self.counters.removes,
        }
    }

    /// Zeroes the hit/miss/expired/removes counters.
    ///
    /// The limit and the cached entries are untouched.
    pub fn reset_stats(&mut self) {
        self.counters.reset();
    }

    /// Returns the fraction of `get` calls that found a value, in
    /// `[0.0, 1.0]`; exactly `0.0` while no hit has been recorded.
    pub fn hit_rate(&self) -> f64 {
        self.counters.hit_rate()
    }

    /// Removes the back-most entry, accounting it as expired and notifying
    /// the purger. Callers guarantee the list is non-empty; the empty branch
    /// is an invariant violation, logged rather than propagated.
    fn evict_oldest(&mut self) {
        match self.list.pop_back() {
            Some(entry) => {
                self.counters.record_expired();
                self.map.remove(entry.key.as_str());
                if let Some(purger) = self.purger.as_mut() {
                    purger.on_purge(&entry.key, &entry.value);
                }
            }
            None => {
                log::error!(
                    "no tail entry while evicting, limit={} len={}",
                    self.config.capacity,
                    self.list.len()
                );
            }
        }
    }
}

impl<V, S> core::fmt::Debug for LruCache<V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruCache")
            .field("limit", &self.config.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}
