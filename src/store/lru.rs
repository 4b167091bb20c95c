//! LRU Cache Module
//!
//! Bounded in-memory backend with least-recently-used eviction.
//!
//! Recency is tracked with a doubly-linked list threaded through a slot
//! arena by index. Stable indices stand in for the pointers a linked list
//! would otherwise need, so no slot ever aliases another. Every operation
//! is O(1) amortized.

use std::collections::HashMap;
use std::mem;

use crate::error::{Result, StoreError};
use crate::store::{Backend, CacheStats};

/// Sentinel index marking the end of the recency list.
const NIL: usize = usize::MAX;

// == Slot ==
/// One arena slot: an entry plus its links in the recency list.
///
/// Freed slots stay in the arena with their key and value cleared, and are
/// reused through the free list before the arena grows.
#[derive(Debug)]
struct Slot {
    key: String,
    value: Vec<u8>,
    /// Index of the next-more-recent slot, NIL at the head
    prev: usize,
    /// Index of the next-less-recent slot, NIL at the tail
    next: usize,
}

// == LRU Cache ==
/// Fixed-capacity map from key to value.
///
/// Capacity counts entries, not bytes. Reading or writing a key makes it
/// the most recently used; inserting a new key into a full cache first
/// evicts the single least-recently-used resident.
#[derive(Debug)]
pub struct LruCache {
    /// Maximum number of resident entries
    capacity: usize,
    /// Key to arena slot index
    map: HashMap<String, usize>,
    /// Slot arena; list order is carried by the slots' prev/next indices
    slots: Vec<Slot>,
    /// Indices of freed slots available for reuse
    free: Vec<usize>,
    /// Most recently used slot, NIL when empty
    head: usize,
    /// Least recently used slot, NIL when empty
    tail: usize,
    /// Performance counters
    stats: CacheStats,
}

impl LruCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Rejects a capacity of zero with the invalid-capacity kind; a cache
    /// that can hold nothing is a misconfiguration, not a useful store.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(StoreError::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            map: HashMap::new(),
            slots: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            stats: CacheStats::new(),
        })
    }

    /// Returns the configured entry capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current number of resident entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Checks whether a key is resident, without refreshing its recency.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the least-recently-used key, the next eviction candidate.
    pub fn lru_key(&self) -> Option<&str> {
        if self.tail == NIL {
            None
        } else {
            Some(self.slots[self.tail].key.as_str())
        }
    }

    /// Returns a snapshot of the performance counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_resident_entries(self.map.len());
        stats
    }

    // == Recency List ==
    /// Unlinks a slot from the recency list, fixing head/tail as needed.
    fn detach(&mut self, idx: usize) {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;
        if prev == NIL {
            self.head = next;
        } else {
            self.slots[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.slots[next].prev = prev;
        }
    }

    /// Links a detached slot in as the most recently used.
    fn attach_front(&mut self, idx: usize) {
        let old_head = self.head;
        self.slots[idx].prev = NIL;
        self.slots[idx].next = old_head;
        if old_head == NIL {
            self.tail = idx;
        } else {
            self.slots[old_head].prev = idx;
        }
        self.head = idx;
    }

    /// Moves a resident slot to the front of the recency list.
    fn touch(&mut self, idx: usize) {
        if self.head != idx {
            self.detach(idx);
            self.attach_front(idx);
        }
    }

    // == Eviction ==
    /// Removes the least-recently-used entry and recycles its slot.
    ///
    /// Callers only invoke this on a non-empty cache, so the tail is valid.
    fn evict_lru(&mut self) {
        let idx = self.tail;
        self.detach(idx);
        let key = mem::take(&mut self.slots[idx].key);
        self.slots[idx].value = Vec::new();
        self.map.remove(&key);
        self.free.push(idx);
        self.stats.record_eviction();
    }

    /// Inserts a brand-new entry as the most recently used.
    fn insert_front(&mut self, key: &str, value: Vec<u8>) {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx].key = key.to_string();
                self.slots[idx].value = value;
                idx
            }
            None => {
                self.slots.push(Slot {
                    key: key.to_string(),
                    value,
                    prev: NIL,
                    next: NIL,
                });
                self.slots.len() - 1
            }
        };
        self.map.insert(key.to_string(), idx);
        self.attach_front(idx);
    }
}

impl Backend for LruCache {
    fn get(&mut self, key: &str) -> Result<Vec<u8>> {
        match self.map.get(key).copied() {
            Some(idx) => {
                self.touch(idx);
                self.stats.record_hit();
                Ok(self.slots[idx].value.clone())
            }
            None => {
                // A miss never evicts anything.
                self.stats.record_miss();
                Err(StoreError::NotFound(key.to_string()))
            }
        }
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        if let Some(idx) = self.map.get(key).copied() {
            // Replacing a resident value leaves the count unchanged.
            self.slots[idx].value = value;
            self.touch(idx);
            return Ok(());
        }
        if self.map.len() == self.capacity {
            self.evict_lru();
        }
        self.insert_front(key, value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        // Absence is not an error at this layer; the tier above decides
        // whether a missing key matters.
        if let Some(idx) = self.map.remove(key) {
            self.detach(idx);
            self.slots[idx].key = String::new();
            self.slots[idx].value = Vec::new();
            self.free.push(idx);
        }
        Ok(())
    }
}
