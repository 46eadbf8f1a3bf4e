//! Math Module
//!
//! Arithmetic over number values.

use crate::error::{Result, ValueError};
use crate::value::Value;

// == Add ==
/// Adds two numbers.
///
/// # Errors
/// `TypeMismatch` if either operand is not a `Value::Number`.
pub fn add(augend: &Value, addend: &Value) -> Result<f64> {
    match (augend, addend) {
        (Value::Number(a), Value::Number(b)) => Ok(a + b),
        (a, b) => Err(ValueError::TypeMismatch(format!(
            "cannot add {} and {}",
            a.type_name(),
            b.type_name()
        ))),
    }
}
