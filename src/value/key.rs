//! Map Key Module
//!
//! Hashable wrapper giving values SameValueZero key semantics.

use std::hash::{Hash, Hasher};
use std::mem;

use super::Value;

// == Map Key ==
/// A `Value` usable as a hash map key.
///
/// - Numbers: NaN equals NaN and `+0` equals `-0`.
/// - Strings and booleans: by content.
/// - Symbols, arrays, objects, byte buffers and functions: by identity.
#[derive(Debug, Clone)]
pub struct MapKey(Value);

impl MapKey {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for MapKey {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Bit pattern with NaN payloads and the sign of zero collapsed.
fn canonical_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0
    } else {
        n.to_bits()
    }
}

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Value::String(a), Value::String(b)) => a == b,
            (a, b) => match (a.identity(), b.identity()) {
                (Some(x), Some(y)) => x == y && mem::discriminant(a) == mem::discriminant(b),
                _ => false,
            },
        }
    }
}

impl Eq for MapKey {}

impl Hash for MapKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(&self.0).hash(state);
        match &self.0 {
            Value::Undefined | Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => canonical_bits(*n).hash(state),
            Value::String(s) => s.hash(state),
            other => other.identity().hash(state),
        }
    }
}
