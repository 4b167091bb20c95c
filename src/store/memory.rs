//! Memory Store Module
//!
//! Unbounded in-memory backend. Fast, but nothing bounds its growth and
//! nothing survives a restart.

use std::collections::HashMap;

use crate::error::{Result, StoreError};
use crate::store::Backend;

// == Memory Store ==
/// Stores every value in a plain map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty MemoryStore.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Backend for MemoryStore {
    fn get(&mut self, key: &str) -> Result<Vec<u8>> {
        self.data
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        if self.data.remove(key).is_some() {
            Ok(())
        } else {
            Err(StoreError::NotFound(key.to_string()))
        }
    }
}
