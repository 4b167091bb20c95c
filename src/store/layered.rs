//! Layered Store Module
//!
//! Two-tier backend: an LRU cache as the fast path in front of a file store
//! as the source of truth, with read-through and write-through semantics.

use std::path::Path;

use crate::error::{Result, StoreError};
use crate::store::{Backend, CacheStats, FileStore, LruCache};

// == Layered Store ==
/// Composes an [`LruCache`] over a [`FileStore`].
///
/// Reads try the cache first and fall through to the file tier on a miss,
/// populating the cache on the way back. Writes and deletes go to the cache
/// first, then the file tier.
///
/// Write-through is not failure-atomic: when the file tier rejects a Set,
/// the call fails but the cache already holds the new value, so reads may
/// run ahead of durable storage until the next successful Set or a restart
/// (the cache is not persisted). Fast subsequent reads are deliberately
/// favored over rollback here.
#[derive(Debug)]
pub struct LayeredStore {
    /// Fast tier
    cache: LruCache,
    /// Source of truth
    backend: FileStore,
}

impl LayeredStore {
    // == Constructor ==
    /// Creates a two-tier store over `root` with a cache of `capacity`
    /// entries.
    ///
    /// # Errors
    /// Fails when the root directory cannot be created or the capacity is
    /// zero.
    pub fn new(root: impl AsRef<Path>, capacity: usize) -> Result<Self> {
        Ok(Self {
            cache: LruCache::new(capacity)?,
            backend: FileStore::open(root)?,
        })
    }

    /// Returns a snapshot of the cache tier's performance counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Backend for LayeredStore {
    fn get(&mut self, key: &str) -> Result<Vec<u8>> {
        match self.cache.get(key) {
            Ok(value) => Ok(value),
            Err(StoreError::NotFound(_)) => {
                let value = self.backend.get(key)?;
                // Population is best-effort: the value is already in hand,
                // so a cache failure must not fail the read.
                let _ = self.cache.set(key, value.clone());
                Ok(value)
            }
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        // Cache first: the fast tier never lags the caller's own writes.
        self.cache.set(key, value.clone())?;
        self.backend.set(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        // Removing from the cache is a no-op when absent; whether the key
        // exists at all is the file tier's verdict.
        self.cache.delete(key)?;
        self.backend.delete(key)
    }
}
