//! Cache Store Module
//!
//! The storage abstraction behind memoized functions and its default hash map backend.

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::value::{MapKey, Value};

// == Cache Store Trait ==
/// Key/value container backing a memoized function.
///
/// Key equality is defined by each implementation. Errors returned here
/// reach the caller of the memoized function unchanged.
pub trait CacheStore: fmt::Debug + Send {
    /// Checks whether `key` has an entry, without touching recency.
    fn has(&self, key: &Value) -> Result<bool>;

    /// Fetches the value stored under `key`.
    fn get(&mut self, key: &Value) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous entry.
    fn set(&mut self, key: Value, value: Value) -> Result<()>;

    /// Removes the entry for `key`. Returns true if one existed.
    fn delete(&mut self, key: &Value) -> Result<bool>;

    /// Removes every entry.
    fn clear(&mut self);

    /// Current number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// == Map Cache ==
/// Unbounded store with SameValueZero key equality.
///
/// Primitives compare by value (NaN matches NaN, `-0` matches `0`);
/// arrays, objects and other shared values compare by identity.
#[derive(Debug, Default)]
pub struct MapCache {
    /// Key-value storage
    entries: HashMap<MapKey, Value>,
}

impl MapCache {
    // == Constructor ==
    /// Creates an empty MapCache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MapCache {
    fn has(&self, key: &Value) -> Result<bool> {
        Ok(self.entries.contains_key(&MapKey::new(key.clone())))
    }

    fn get(&mut self, key: &Value) -> Result<Option<Value>> {
        Ok(self.entries.get(&MapKey::new(key.clone())).cloned())
    }

    fn set(&mut self, key: Value, value: Value) -> Result<()> {
        self.entries.insert(MapKey::new(key), value);
        Ok(())
    }

    fn delete(&mut self, key: &Value) -> Result<bool> {
        Ok(self.entries.remove(&MapKey::new(key.clone())).is_some())
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
