//! Memo Module
//!
//! Function memoization over replaceable cache stores.

mod identity;
mod lru;
mod memoize;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use identity::IdentityCache;
pub use lru::LruCache;
pub use memoize::{memoize, memoize_with_store, Memoized};
pub use stats::MemoStats;
pub use store::{CacheStore, MapCache};
