//! Property-Based Tests for Memo Module
//!
//! Uses proptest to verify call-count invariants of memoized functions.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::memo::{memoize, memoize_with_store, CacheStore, LruCache};
use crate::value::Value;

// == Test Configuration ==
const TEST_LRU_CAPACITY: usize = 8;

// == Helpers ==
/// Identity function that counts its invocations.
fn counting_identity() -> (Value, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let f = Value::function(move |args| {
        counter.fetch_add(1, Ordering::SeqCst);
        args.first().cloned().unwrap_or_default()
    });
    (f, calls)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // *For any* sequence of calls, the wrapped function runs exactly once per
    // distinct key and every call returns the function's result.
    #[test]
    fn prop_one_invocation_per_key(keys in prop::collection::vec(0i32..20, 1..60)) {
        let (f, calls) = counting_identity();
        let memoized = memoize(f, None).unwrap();

        for key in &keys {
            let result = memoized.call(&[Value::from(*key)]).unwrap();
            prop_assert_eq!(result, Value::from(*key));
        }

        let distinct: HashSet<i32> = keys.iter().copied().collect();
        prop_assert_eq!(calls.load(Ordering::SeqCst), distinct.len());
        prop_assert_eq!(memoized.with_cache(|store| store.len()), distinct.len());
    }

    // *For any* arguments, a constant resolver makes the function run at most once.
    #[test]
    fn prop_constant_resolver_runs_once(keys in prop::collection::vec(any::<i32>(), 1..30)) {
        let (f, calls) = counting_identity();
        let memoized = memoize(f, Some(Value::function(|_| Value::Null))).unwrap();

        for key in &keys {
            memoized.call(&[Value::from(*key)]).unwrap();
        }
        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    // *For any* sequence of calls, hits plus misses equals the number of calls
    // and misses equals the number of function invocations.
    #[test]
    fn prop_stats_accuracy(keys in prop::collection::vec(0i32..10, 1..50)) {
        let (f, calls) = counting_identity();
        let memoized = memoize(f, None).unwrap();

        for key in &keys {
            memoized.call(&[Value::from(*key)]).unwrap();
        }

        let stats = memoized.stats();
        prop_assert_eq!(stats.hits + stats.misses, keys.len() as u64);
        prop_assert_eq!(stats.misses, calls.load(Ordering::SeqCst) as u64);
    }

    // *For any* sequence of calls, an LRU-backed wrapper never holds more
    // entries than its capacity.
    #[test]
    fn prop_lru_capacity_enforcement(keys in prop::collection::vec(0i32..50, 1..120)) {
        let (f, _) = counting_identity();
        let store: Box<dyn CacheStore> = Box::new(LruCache::new(TEST_LRU_CAPACITY).unwrap());
        let memoized = memoize_with_store(f, None, store).unwrap();

        for key in &keys {
            memoized.call(&[Value::from(*key)]).unwrap();
            let len = memoized.with_cache(|store| store.len());
            prop_assert!(
                len <= TEST_LRU_CAPACITY,
                "Cache size {} exceeds max {}",
                len,
                TEST_LRU_CAPACITY
            );
        }
    }
}
