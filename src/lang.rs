//! Lang Module
//!
//! Type-level predicates over values.

use crate::value::Value;

// == Is Empty ==
/// Checks whether a value has no contents.
///
/// Absence markers, booleans, numbers and symbols carry no contents and are
/// always empty. Strings, arrays and byte buffers are empty at length zero;
/// objects when they have no own properties. Functions carry no own
/// properties and are always empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::Symbol(_)
        | Value::Function(_) => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bytes(bytes) => bytes.is_empty(),
        Value::Object(obj) => obj.is_empty(),
    }
}
