//! valuekit - Value coercion and memoization helpers
//!
//! Provides numeric coercion of dynamic values, function memoization over
//! replaceable cache stores, and small collection helpers.

pub mod coerce;
pub mod collection;
pub mod config;
pub mod error;
pub mod lang;
pub mod math;
pub mod memo;
pub mod value;

pub use coerce::{format_number, to_finite, to_integer, to_number, MAX_FINITE};
pub use collection::{chunk, filter, map, reduce};
pub use config::{Config, StoreKind};
pub use error::{Result, ValueError};
pub use lang::is_empty;
pub use math::add;
pub use memo::{
    memoize, memoize_with_store, CacheStore, IdentityCache, LruCache, MapCache, MemoStats,
    Memoized,
};
pub use value::{Function, MapKey, Object, Symbol, Value};
