//! Cache Configuration
//!
//! Construction-time parameters for the cache. The only knob is the entry
//! limit: a positive number of entries the cache may hold. The limit is
//! immutable for the lifetime of the cache; capacity is enforced proactively
//! on insertion, so `len() <= limit` holds after every operation.
//!
//! # Examples
//!
//! ```
//! use lru_rs::config::LruCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig::new(NonZeroUsize::new(1000).unwrap());
//! assert_eq!(config.capacity.get(), 1000);
//! ```

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU cache.
///
/// # Fields
///
/// - `capacity`: maximum number of entries the cache can hold. Each entry
///   carries overhead beyond the value itself (key storage, two list
///   pointers, one index slot).
#[derive(Clone, Copy)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Creates a configuration with the given capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        LruCacheConfig { capacity }
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
