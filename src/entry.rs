//! Cache Entry Type
//!
//! Each node of the recency sequence holds one `CacheEntry`: the key it was
//! inserted under and the cached value. The key is duplicated between the
//! index and the entry so that eviction, which starts from the back of the
//! sequence rather than from the index, can find and remove the matching
//! index slot in O(1).

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// A key-value pair stored in the recency sequence.
///
/// The key is fixed for the lifetime of the entry; the value may be
/// overwritten in place when the same key is set again.
///
/// # Examples
///
/// ```
/// use lru_rs::CacheEntry;
///
/// let entry = CacheEntry::new(String::from("session:42"), 7u32);
/// assert_eq!(entry.key, "session:42");
/// assert_eq!(entry.value, 7);
/// ```
pub struct CacheEntry<V> {
    /// The key this entry is indexed under.
    pub key: String,

    /// The cached value (or a handle to external storage).
    pub value: V,
}

impl<V> CacheEntry<V> {
    /// Creates a new entry for `key` holding `value`.
    pub fn new(key: String, value: V) -> Self {
        CacheEntry { key, value }
    }
}

impl<V: fmt::Debug> fmt::Debug for CacheEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
