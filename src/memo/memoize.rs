//! Memoize Module
//!
//! Wraps a function so repeated calls with the same derived key are served from a store.

use std::fmt;

use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Result, ValueError};
use crate::memo::{CacheStore, MapCache, MemoStats};
use crate::value::{Function, Value};

// == Memoize ==
/// Creates a memoized wrapper around `func` backed by a fresh [`MapCache`].
///
/// The cache key is `resolver(args)` when a resolver is given, otherwise
/// the first argument (`Undefined` for a call without arguments).
///
/// # Arguments
/// * `func` - The function to wrap; must be a `Value::Function`
/// * `resolver` - Optional key-deriving function; a `Value::Function`, or nullish for none
///
/// # Errors
/// `InvalidArgument` if `func` or a non-nullish `resolver` is not callable.
pub fn memoize(func: impl Into<Value>, resolver: Option<Value>) -> Result<Memoized> {
    memoize_with_store(func, resolver, Box::new(MapCache::new()))
}

/// Like [`memoize`], starting from the given store instead of a [`MapCache`].
pub fn memoize_with_store(
    func: impl Into<Value>,
    resolver: Option<Value>,
    store: Box<dyn CacheStore>,
) -> Result<Memoized> {
    let func = expect_callable(func.into(), "func")?;
    // A nullish resolver means no resolver.
    let resolver = resolver
        .filter(|r| !r.is_nullish())
        .map(|r| expect_callable(r, "resolver"))
        .transpose()?;

    Ok(Memoized {
        func,
        resolver,
        cache: Mutex::new(store),
        stats: Mutex::new(MemoStats::new()),
    })
}

fn expect_callable(value: Value, role: &str) -> Result<Function> {
    match value {
        Value::Function(f) => Ok(f),
        other => Err(ValueError::InvalidArgument(format!(
            "expected {} to be a function, got {}",
            role,
            other.type_name()
        ))),
    }
}

// == Memoized ==
/// A function wrapped with a replaceable result store.
///
/// The store is read through on every call, so it can be inspected,
/// pre-seeded, cleared or swapped between calls. The lock is released
/// while the wrapped function runs; concurrent misses on the same key may
/// each invoke it.
pub struct Memoized {
    /// The wrapped function, never modified
    func: Function,
    /// Optional key derivation
    resolver: Option<Function>,
    /// Current result store
    cache: Mutex<Box<dyn CacheStore>>,
    /// Hit/miss counters
    stats: Mutex<MemoStats>,
}

impl Memoized {
    // == Call ==
    /// Invokes the wrapper.
    ///
    /// Returns the stored result for the derived key if present, otherwise
    /// calls the wrapped function and stores its result.
    ///
    /// # Errors
    /// Any error raised by the current store.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        let key = match &self.resolver {
            Some(resolver) => resolver.call(args),
            None => args.first().cloned().unwrap_or_default(),
        };

        if let Some(hit) = self.cache.lock().get(&key)? {
            debug!(key = key.type_name(), "memo hit");
            self.stats.lock().record_hit();
            return Ok(hit);
        }

        debug!(key = key.type_name(), "memo miss");
        self.stats.lock().record_miss();
        let result = self.func.call(args);
        self.cache.lock().set(key, result.clone())?;
        Ok(result)
    }

    // == Cache Access ==
    /// Runs `f` against the current store.
    ///
    /// The store is locked for the duration of `f`, so `f` must not call
    /// back into this wrapper.
    pub fn with_cache<R>(&self, f: impl FnOnce(&mut dyn CacheStore) -> R) -> R {
        let mut store = self.cache.lock();
        f(&mut **store)
    }

    /// Replaces the store, returning the previous one.
    ///
    /// Takes effect on the next call.
    pub fn set_cache(&self, store: Box<dyn CacheStore>) -> Box<dyn CacheStore> {
        debug!("memo store replaced");
        std::mem::replace(&mut *self.cache.lock(), store)
    }

    /// The wrapped function. Calling it directly bypasses the store.
    pub fn func(&self) -> &Function {
        &self.func
    }

    // == Stats ==
    /// Returns hit/miss counters and the current store size.
    pub fn stats(&self) -> MemoStats {
        let mut stats = self.stats.lock().clone();
        stats.set_total_entries(self.cache.lock().len());
        stats
    }
}

impl fmt::Debug for Memoized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Memoized");
        out.field("func", &self.func).field("resolver", &self.resolver);
        match self.cache.try_lock() {
            Some(cache) => out.field("cache", &*cache),
            None => out.field("cache", &"<locked>"),
        };
        out.finish()
    }
}
