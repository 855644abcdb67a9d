#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## The engine
//!
//! [`LruCache`] owns two co-indexed structures: an order-preserving doubly
//! linked sequence of entries (front = most recently used, back = least
//! recently used) and a key-to-node index enabling direct lookup into that
//! sequence. Every public operation is O(1) amortized.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         LruCache                             │
//! │                                                              │
//! │  index: HashMap<String, node>                                │
//! │     "a" ──────────────┐                                      │
//! │     "b" ──────┐       │                                      │
//! │     "c" ──┐   │       │                                      │
//! │           ▼   ▼       ▼                                      │
//! │  order: [c] ⇄ [b] ⇄ [a]                                      │
//! │         front         back                                   │
//! │         (most recent) (next eviction candidate)              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operation summary
//!
//! | Operation | Recency | Counters |
//! |-----------|---------|----------|
//! | [`LruCache::set`] (update) | moves to front | none |
//! | [`LruCache::set`] (insert) | inserts at front, evicts from back | `expired` per eviction |
//! | [`LruCache::get`] / [`LruCache::get_mut`] | moves to front on hit | exactly one of `hits`/`misses` |
//! | [`LruCache::peek`] | untouched | none |
//! | [`LruCache::remove`] | unlinks | `removes`, even on a miss |
//! | [`LruCache::remove_all`] | drains from back | `expired` per entry |
//!
//! ## Eviction notification
//!
//! A single [`Purger`] can be registered per cache (last registration wins).
//! It fires synchronously for capacity-driven eviction and for
//! [`LruCache::remove_all`], never for explicit [`LruCache::remove`]. See the
//! [`purge`] module docs for the contract.
//!
//! ## Concurrency
//!
//! [`LruCache`] itself is single-threaded: every operation takes `&mut self`.
//! With the `concurrent` feature, [`ConcurrentLruCache`] wraps the engine in a
//! single `parking_lot::Mutex`: one exclusive critical section per public
//! call, including the purge notification triggered during eviction. Recency
//! order and counters therefore stay globally exact, at the cost of
//! serializing all access through one lock.
//!
//! ## Modules
//!
//! - [`lru`]: the cache engine
//! - [`config`]: construction-time configuration
//! - [`stats`]: counter snapshot type
//! - [`purge`]: eviction notification trait
//! - [`error`]: construction errors
//! - [`concurrent`]: mutex-guarded engine (requires the `concurrent` feature)

#![no_std]

#[cfg(test)]
extern crate scoped_threadpool;

/// Key-value pair stored in each node of the recency sequence.
pub mod entry;

/// Doubly linked recency list with in-place reordering.
///
/// Internal infrastructure: exposes raw pointer operations that require
/// careful invariant maintenance. Use the cache types instead.
pub(crate) mod list;

/// Construction-time configuration for the cache.
pub mod config;

/// Errors returned by cache construction.
pub mod error;

/// The eviction notification trait.
pub mod purge;

/// Cache statistics snapshot and accounting.
pub mod stats;

/// The LRU cache engine.
pub mod lru;

/// Mutex-guarded cache for multi-threaded use.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use config::LruCacheConfig;
pub use entry::CacheEntry;
pub use error::Error;
pub use lru::LruCache;
pub use purge::Purger;
pub use stats::CacheStats;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;
