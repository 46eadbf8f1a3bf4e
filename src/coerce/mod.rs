//! Coercion Module
//!
//! Total conversions from any `Value` into a number.

mod literal;
mod primitive;


pub use primitive::format_number;

use crate::value::Value;

// == Public Constants ==
/// Largest finite magnitude produced by [`to_finite`].
pub const MAX_FINITE: f64 = f64::MAX;

// == To Number ==
/// Converts a value into a number, or NaN when it has no numeric reading.
///
/// - Numbers are returned unchanged, NaN and infinities included.
/// - `Null` is `0`, `Undefined` is NaN.
/// - Booleans are `1` / `0`.
/// - Strings are trimmed and parsed as binary (`0b`), octal (`0o`),
///   unsigned hexadecimal (`0x`) or decimal literals; an empty string is `0`
///   and signed hexadecimal is NaN.
/// - Composites are reduced to a primitive (`value_of`, then `to_string`)
///   which is coerced again.
/// - Symbols are NaN.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => *n,
        Value::Null => 0.0,
        Value::Undefined => f64::NAN,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => literal::parse_numeric_literal(s),
        Value::Symbol(_) => f64::NAN,
        Value::Array(_) | Value::Object(_) | Value::Bytes(_) | Value::Function(_) => {
            match primitive::to_primitive(value) {
                Some(p) if p.is_primitive() => to_number(&p),
                _ => f64::NAN,
            }
        }
    }
}

// == To Finite ==
/// Converts a value into a finite number.
///
/// NaN becomes `0`; infinities become `±MAX_FINITE`.
pub fn to_finite(value: &Value) -> f64 {
    let n = to_number(value);
    if n.is_nan() {
        0.0
    } else {
        n.clamp(-MAX_FINITE, MAX_FINITE)
    }
}

// == To Integer ==
/// Converts a value into a finite number truncated toward zero.
pub fn to_integer(value: &Value) -> f64 {
    to_finite(value).trunc()
}
