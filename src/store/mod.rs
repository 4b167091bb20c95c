//! Store Module
//!
//! Pluggable key-value backends behind one trait, plus the guard that makes
//! any of them safe to share between threads.
//!
//! Four concrete strategies:
//! - [`MemoryStore`] - unbounded in-memory map
//! - [`FileStore`] - one file per key under a root directory
//! - [`LruCache`] - bounded in-memory map with LRU eviction
//! - [`LayeredStore`] - LruCache read/write-through over FileStore
//!
//! [`SyncStore`] wraps any of them (itself included) and serializes access.

mod file;
mod layered;
mod lru;
mod memory;
mod stats;
mod sync;


use std::path::Path;

use crate::error::Result;

// Re-export public types
pub use file::FileStore;
pub use layered::LayeredStore;
pub use lru::LruCache;
pub use memory::MemoryStore;
pub use stats::CacheStats;
pub use sync::SyncStore;

// == Backend Trait ==
/// The three-operation contract every backend implements.
///
/// `get` takes `&mut self` because reading a key refreshes its recency in
/// the caching backends. Error semantics per implementation:
/// - `get` on an absent key fails with the not-found kind everywhere.
/// - `set` creates or fully overwrites; it never reports not-found.
/// - `delete` on an absent key fails with not-found in the durable backends,
///   but is a silent no-op in [`LruCache`] (the layer above decides whether
///   absence is an error).
pub trait Backend {
    /// Returns the value stored under `key`.
    fn get(&mut self, key: &str) -> Result<Vec<u8>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Removes the value stored under `key`.
    fn delete(&mut self, key: &str) -> Result<()>;
}

// == Guarded Constructors ==
/// Returns a thread-safe store backed by memory only.
pub fn memory() -> SyncStore<MemoryStore> {
    SyncStore::new(MemoryStore::new())
}

/// Returns a thread-safe store backed by one file per key under `root`.
///
/// The root directory is created if absent; failure to create it is an
/// error the process should treat as fatal at startup.
pub fn file(root: impl AsRef<Path>) -> Result<SyncStore<FileStore>> {
    Ok(SyncStore::new(FileStore::open(root)?))
}

/// Returns a thread-safe store backed by a bounded LRU cache.
///
/// Rejects a zero capacity with the invalid-capacity kind.
pub fn cache(capacity: usize) -> Result<SyncStore<LruCache>> {
    Ok(SyncStore::new(LruCache::new(capacity)?))
}

/// Returns a thread-safe two-tier store: an LRU cache of `capacity` entries
/// in front of one file per key under `root`.
pub fn layered(root: impl AsRef<Path>, capacity: usize) -> Result<SyncStore<LayeredStore>> {
    Ok(SyncStore::new(LayeredStore::new(root, capacity)?))
}
