//! Eviction Notification
//!
//! A cache can carry at most one registered [`Purger`]. It is invoked
//! synchronously, in strict eviction order, for every entry that leaves the
//! cache through the eviction path: capacity pressure during `set`, and
//! `remove_all`. Explicit `remove` never notifies: a caller deleting a key
//! already knows the entry is gone, while eviction is the cache's own
//! decision and the one worth observing.
//!
//! # Caller obligations
//!
//! The notifier runs inside the cache's critical section. On the
//! single-threaded [`LruCache`](crate::LruCache) the borrow checker already
//! prevents re-entering the cache from `on_purge`; on
//! `ConcurrentLruCache` a re-entrant call would deadlock on the cache lock.
//! Treat `on_purge` as a place to hand the evicted pair somewhere else, not
//! to talk back to the cache. A slow notifier stalls every concurrent cache
//! operation for as long as it runs.

/// Receives entries evicted by capacity pressure or `remove_all`.
///
/// Implement this for a named type when the notifier carries state worth
/// naming, or rely on the blanket impl and pass a closure:
///
/// ```
/// use lru_rs::LruCache;
///
/// let mut cache = LruCache::new(1).unwrap();
/// cache.register_purger(|key: &str, value: &u32| {
///     let _ = (key, value);
/// });
/// cache.set("a", 1);
/// cache.set("b", 2); // notifier sees ("a", 1)
/// ```
pub trait Purger<V> {
    /// Called once per evicted entry, before the next eviction or insertion
    /// proceeds. The entry is already unlinked; the borrow is the last look
    /// at it before it is dropped.
    fn on_purge(&mut self, key: &str, value: &V);
}

impl<V, F> Purger<V> for F
where
    F: FnMut(&str, &V),
{
    fn on_purge(&mut self, key: &str, value: &V) {
        self(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[test]
    fn test_closure_impl() {
        let mut seen: Vec<(String, u32)> = Vec::new();
        let mut purger = |key: &str, value: &u32| seen.push((String::from(key), *value));
        purger.on_purge("a", &1);
        purger.on_purge("b", &2);
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (String::from("a"), 1));
        assert_eq!(seen[1], (String::from("b"), 2));
    }

    struct Tally {
        count: u64,
    }

    impl<V> Purger<V> for Tally {
        fn on_purge(&mut self, _key: &str, _value: &V) {
            self.count += 1;
        }
    }

    #[test]
    fn test_named_impl() {
        let mut tally = Tally { count: 0 };
        Purger::<u32>::on_purge(&mut tally, "a", &1);
        Purger::<u32>::on_purge(&mut tally, "b", &2);
        assert_eq!(tally.count, 2);
    }
}
