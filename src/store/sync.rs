//! Sync Store Module
//!
//! Concurrency guard: one mutex in front of any backend, making the
//! three-operation contract safe for parallel callers.

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::store::Backend;

// == Sync Store ==
/// Serializes every operation on the wrapped backend behind one lock.
///
/// All three operations are mutually exclusive with each other, reads
/// included. The layered store's read-through is a read against one inner
/// tier followed by a write against the other, and no second caller may
/// slip between the two, so there is no shared/exclusive distinction to
/// exploit. The lock is held for the operation's full duration, filesystem
/// I/O included: a slow backend call blocks every other caller. The effect
/// of N concurrent calls is always equal to some sequential order of them.
#[derive(Debug)]
pub struct SyncStore<B> {
    inner: Mutex<B>,
}

impl<B: Backend> SyncStore<B> {
    // == Constructor ==
    /// Wraps `backend` in a new guard.
    pub fn new(backend: B) -> Self {
        Self {
            inner: Mutex::new(backend),
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.inner.lock().get(key)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.inner.lock().set(key, value)
    }

    /// Removes the value stored under `key`.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.inner.lock().delete(key)
    }

    // == Structured Values ==
    /// Gets the value under `key` and decodes it as JSON into `T`.
    ///
    /// Decode failures propagate with the serialization kind; decoding
    /// happens after the lock is released.
    pub fn get_decoded<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let bytes = self.get(key)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Encodes `value` as JSON and stores it under `key`.
    ///
    /// Encoding happens before the lock is taken.
    pub fn set_encoded<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec(value)?;
        self.set(key, bytes)
    }

    /// Runs `f` with exclusive access to the wrapped backend.
    ///
    /// For read-only introspection (stats, lengths) that the three-operation
    /// contract does not cover.
    pub fn with_inner<R>(&self, f: impl FnOnce(&B) -> R) -> R {
        f(&self.inner.lock())
    }
}

// A guard is itself a backend, so guards compose over any store shape.
impl<B: Backend> Backend for SyncStore<B> {
    fn get(&mut self, key: &str) -> Result<Vec<u8>> {
        SyncStore::get(self, key)
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        SyncStore::set(self, key, value)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        SyncStore::delete(self, key)
    }
}
