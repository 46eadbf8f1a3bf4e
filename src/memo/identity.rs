//! Identity Cache Module
//!
//! Weak-keyed cache store for reference values.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use tracing::trace;

use crate::error::{Result, ValueError};
use crate::memo::CacheStore;
use crate::value::{Callable, Object, Value};

/// Smallest map size at which dead entries are swept.
const MIN_PURGE_AT: usize = 16;

// == Weak Key ==
/// Non-owning handle to the allocation behind a reference value.
///
/// Holding the `Weak` keeps the allocation's address reserved, so an
/// address maps to at most one key for as long as the entry exists.
#[derive(Debug)]
enum WeakKey {
    Symbol(Weak<str>),
    Array(Weak<Vec<Value>>),
    Object(Weak<Object>),
    Bytes(Weak<[u8]>),
    Function(Weak<Callable>),
}

impl WeakKey {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Symbol(s) => Some(WeakKey::Symbol(s.downgrade())),
            Value::Array(a) => Some(WeakKey::Array(Arc::downgrade(a))),
            Value::Object(o) => Some(WeakKey::Object(Arc::downgrade(o))),
            Value::Bytes(b) => Some(WeakKey::Bytes(Arc::downgrade(b))),
            Value::Function(f) => Some(WeakKey::Function(f.downgrade())),
            _ => None,
        }
    }

    fn is_alive(&self) -> bool {
        match self {
            WeakKey::Symbol(w) => w.strong_count() > 0,
            WeakKey::Array(w) => w.strong_count() > 0,
            WeakKey::Object(w) => w.strong_count() > 0,
            WeakKey::Bytes(w) => w.strong_count() > 0,
            WeakKey::Function(w) => w.strong_count() > 0,
        }
    }
}

// == Identity Cache ==
/// Cache store keyed by the identity of reference values.
///
/// Keys are held weakly: once every handle to a key is dropped its entry
/// is no longer reachable. Dead entries are swept on a write once the map
/// has doubled since the previous sweep, keeping writes amortized O(1).
/// Primitive keys are never present, and storing one fails with `InvalidKey`.
#[derive(Debug, Default)]
pub struct IdentityCache {
    entries: HashMap<usize, (WeakKey, Value)>,
    /// Map size that triggers the next sweep
    purge_at: usize,
}

impl IdentityCache {
    // == Constructor ==
    /// Creates an empty IdentityCache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Live entry for `key`, if any.
    fn live_entry(&self, key: &Value) -> Option<&Value> {
        let addr = key.identity()?;
        self.entries
            .get(&addr)
            .filter(|(weak, _)| weak.is_alive())
            .map(|(_, value)| value)
    }

    /// Drops entries whose keys are gone and schedules the next sweep.
    fn purge(&mut self) {
        self.entries.retain(|_, (weak, _)| weak.is_alive());
        self.purge_at = (self.entries.len() * 2).max(MIN_PURGE_AT);
        trace!(live = self.entries.len(), "identity cache swept");
    }
}

impl CacheStore for IdentityCache {
    fn has(&self, key: &Value) -> Result<bool> {
        Ok(self.live_entry(key).is_some())
    }

    fn get(&mut self, key: &Value) -> Result<Option<Value>> {
        Ok(self.live_entry(key).cloned())
    }

    fn set(&mut self, key: Value, value: Value) -> Result<()> {
        let (Some(addr), Some(weak)) = (key.identity(), WeakKey::from_value(&key)) else {
            return Err(ValueError::InvalidKey(format!(
                "{} cannot be used as an identity key",
                key.type_name()
            )));
        };
        if self.entries.len() >= self.purge_at {
            self.purge();
        }
        self.entries.insert(addr, (weak, value));
        Ok(())
    }

    fn delete(&mut self, key: &Value) -> Result<bool> {
        let removed = key
            .identity()
            .and_then(|addr| self.entries.remove(&addr))
            .is_some_and(|(weak, _)| weak.is_alive());
        Ok(removed)
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.purge_at = 0;
    }

    fn len(&self) -> usize {
        self.entries
            .values()
            .filter(|(weak, _)| weak.is_alive())
            .count()
    }
}
