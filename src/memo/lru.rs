//! LRU Cache Module
//!
//! Bounded cache store evicting the least recently used entry.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::error::{Result, ValueError};
use crate::memo::CacheStore;
use crate::value::{MapKey, Value};

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug, Default)]
struct LruTracker {
    /// Order of keys by access time
    order: VecDeque<MapKey>,
}

impl LruTracker {
    /// Marks a key as recently used (moves to front).
    fn touch(&mut self, key: &MapKey) {
        self.remove(key);
        self.order.push_front(key.clone());
    }

    fn remove(&mut self, key: &MapKey) {
        self.order.retain(|k| k != key);
    }

    /// Returns and removes the least recently used key.
    fn evict_oldest(&mut self) -> Option<MapKey> {
        self.order.pop_back()
    }

    fn clear(&mut self) {
        self.order.clear();
    }
}

// == LRU Cache ==
/// Cache store holding at most `capacity` entries.
///
/// Keys follow the same SameValueZero equality as [`MapCache`](crate::memo::MapCache).
/// `get` and `set` refresh recency; `has` does not.
#[derive(Debug)]
pub struct LruCache {
    /// Key-value storage
    entries: HashMap<MapKey, Value>,
    /// LRU access tracker
    lru: LruTracker,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl LruCache {
    // == Constructor ==
    /// Creates a new LruCache with the given capacity.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries; must be at least 1
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ValueError::InvalidArgument(
                "LRU capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            lru: LruTracker::default(),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl CacheStore for LruCache {
    fn has(&self, key: &Value) -> Result<bool> {
        Ok(self.entries.contains_key(&MapKey::new(key.clone())))
    }

    fn get(&mut self, key: &Value) -> Result<Option<Value>> {
        let key = MapKey::new(key.clone());
        let value = self.entries.get(&key).cloned();
        if value.is_some() {
            self.lru.touch(&key);
        }
        Ok(value)
    }

    fn set(&mut self, key: Value, value: Value) -> Result<()> {
        let key = MapKey::new(key);

        // If not overwriting and at capacity, evict oldest entry
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.lru.evict_oldest() {
                trace!(kind = evicted.value().type_name(), "evicting least recently used entry");
                self.entries.remove(&evicted);
            }
        }

        self.lru.touch(&key);
        self.entries.insert(key, value);
        Ok(())
    }

    fn delete(&mut self, key: &Value) -> Result<bool> {
        let key = MapKey::new(key.clone());
        if self.entries.remove(&key).is_some() {
            self.lru.remove(&key);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
