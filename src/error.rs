//! Error types for the value helpers
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Value Error Enum ==
/// Unified error type for the library.
///
/// Coercion never fails, so every variant here comes from memoization,
/// a cache store, or one of the collection helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A required callable (or other argument) had the wrong shape
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A cache store refused a key it cannot hold
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Reduction over an empty collection without a seed value
    #[error("Reduce of empty collection with no initial value")]
    EmptyCollection,

    /// Operand of the wrong type for an arithmetic helper
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
}

// == Result Type Alias ==
/// Convenience Result type for the library.
pub type Result<T> = std::result::Result<T, ValueError>;
