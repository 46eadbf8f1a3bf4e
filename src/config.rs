//! Configuration Module
//!
//! Handles loading the command-line front end's settings from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValueError};
use crate::memo::{CacheStore, LruCache, MapCache};

// == Store Kind ==
/// Which cache store strategy backs a memoized function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    /// Unbounded hash map keyed by value
    #[default]
    Map,
    /// Bounded map evicting the least recently used entry
    Lru,
}

impl FromStr for StoreKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "map" => Ok(StoreKind::Map),
            "lru" => Ok(StoreKind::Lru),
            other => Err(ValueError::InvalidArgument(format!(
                "unknown store kind '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreKind::Map => "map",
            StoreKind::Lru => "lru",
        };
        f.write_str(name)
    }
}

/// Front-end configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store strategy used for memoized coercion
    pub store: StoreKind,
    /// Maximum number of entries when `store` is `Lru`
    pub lru_capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `VALUEKIT_STORE` - Store strategy: map or lru (default: map)
    /// - `VALUEKIT_LRU_CAPACITY` - Capacity of the LRU store (default: 1000)
    pub fn from_env() -> Self {
        Self {
            store: env::var("VALUEKIT_STORE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            lru_capacity: env::var("VALUEKIT_LRU_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        }
    }

    // == Build Store ==
    /// Creates an empty store of the configured kind.
    pub fn build_store(&self) -> Result<Box<dyn CacheStore>> {
        Ok(match self.store {
            StoreKind::Map => Box::new(MapCache::new()),
            StoreKind::Lru => Box::new(LruCache::new(self.lru_capacity)?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreKind::Map,
            lru_capacity: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.store, StoreKind::Map);
        assert_eq!(config.lru_capacity, 1000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("VALUEKIT_STORE");
        env::remove_var("VALUEKIT_LRU_CAPACITY");

        let config = Config::from_env();
        assert_eq!(config.store, StoreKind::Map);
        assert_eq!(config.lru_capacity, 1000);
    }

    #[test]
    fn test_store_kind_parse() {
        assert_eq!("map".parse::<StoreKind>().unwrap(), StoreKind::Map);
        assert_eq!(" LRU ".parse::<StoreKind>().unwrap(), StoreKind::Lru);
        assert!(matches!(
            "redis".parse::<StoreKind>(),
            Err(ValueError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_build_store() {
        let config = Config {
            store: StoreKind::Lru,
            lru_capacity: 2,
        };
        let store = config.build_store().unwrap();
        assert!(store.is_empty());

        let config = Config {
            store: StoreKind::Lru,
            lru_capacity: 0,
        };
        assert!(matches!(
            config.build_store(),
            Err(ValueError::InvalidArgument(_))
        ));
    }
}
