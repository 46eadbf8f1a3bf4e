//! Primitive Extraction Module
//!
//! Reduces composite values to a primitive before numeric coercion.

use tracing::trace;

use crate::value::{Object, Value};

// == To Primitive ==
/// Extracts the primitive a composite value stands for, preferring its
/// numeric form.
///
/// Objects try `value_of` first, then `to_string`, then the default
/// `"[object Object]"`. Arrays and byte buffers use their joined string
/// form. Functions have no primitive form and yield `None`, as does an
/// object whose accessors both produce composites.
pub(crate) fn to_primitive(value: &Value) -> Option<Value> {
    match value {
        Value::Object(obj) => object_primitive(obj, Hint::Number),
        Value::Array(_) | Value::Bytes(_) => Some(Value::String(stringify(value))),
        Value::Function(_) => None,
        primitive => Some(primitive.clone()),
    }
}

#[derive(Debug, Clone, Copy)]
enum Hint {
    Number,
    String,
}

fn object_primitive(obj: &Object, hint: Hint) -> Option<Value> {
    let accessors = match hint {
        Hint::Number => [obj.value_of_accessor(), obj.to_string_accessor()],
        Hint::String => [obj.to_string_accessor(), obj.value_of_accessor()],
    };
    let has_accessor = accessors.iter().any(Option::is_some);

    for accessor in accessors.into_iter().flatten() {
        let result = accessor.call(&[]);
        if result.is_primitive() {
            return Some(result);
        }
        trace!(kind = result.type_name(), "accessor produced a composite, falling back");
    }

    if has_accessor {
        None
    } else {
        Some(Value::String("[object Object]".to_string()))
    }
}

// == Stringify ==
/// Renders a value the way string concatenation would.
///
/// Absence markers inside arrays render as empty strings; at top level
/// they render as `"undefined"` / `"null"`.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => s.clone(),
        Value::Symbol(s) => format!("Symbol({})", s.description()),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                if item.is_nullish() {
                    String::new()
                } else {
                    stringify(item)
                }
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Bytes(bytes) => bytes
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(obj) => match object_primitive(obj, Hint::String) {
            Some(primitive) => stringify(&primitive),
            None => "[object Object]".to_string(),
        },
        Value::Function(_) => "function".to_string(),
    }
}

// == Format Number ==
/// Formats a number with `NaN` / `Infinity` spellings and no negative zero.
///
/// Magnitudes of at least `1e21` or below `1e-6` use exponent form with an
/// explicit exponent sign, as in `1e+21` and `5e-7`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let spelled = if n > 0.0 { "Infinity" } else { "-Infinity" };
        spelled.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        n.to_string()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(3.2), "3.2");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_number_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(f64::MAX), "1.7976931348623157e+308");
        assert_eq!(format_number(5e-7), "5e-7");
        assert_eq!(format_number(1.5e-10), "1.5e-10");

        // Below the thresholds numbers stay in positional form
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_stringify_arrays() {
        assert_eq!(stringify(&Value::array([1, 2, 3])), "1,2,3");
        assert_eq!(stringify(&Value::array(Vec::<Value>::new())), "");
        assert_eq!(
            stringify(&Value::array([Value::Null, Value::from(1), Value::Undefined])),
            ",1,"
        );
        assert_eq!(
            stringify(&Value::array([Value::array([1, 2]), Value::from(3)])),
            "1,2,3"
        );
        assert_eq!(stringify(&Value::bytes(&[1, 2, 3])), "1,2,3");
    }

    #[test]
    fn test_stringify_objects_prefer_to_string() {
        let obj = Object::new()
            .with_value_of(|| Value::from(7))
            .with_to_string(|| Value::from("42"));
        assert_eq!(stringify(&Value::object(obj)), "42");
        assert_eq!(stringify(&Value::object(Object::new())), "[object Object]");
    }

    #[test]
    fn test_to_primitive_prefers_value_of() {
        let obj = Object::new()
            .with_value_of(|| Value::from(7))
            .with_to_string(|| Value::from("42"));
        assert_eq!(to_primitive(&Value::object(obj)), Some(Value::Number(7.0)));
    }

    #[test]
    fn test_to_primitive_falls_back_past_composites() {
        let obj = Object::new()
            .with_value_of(|| Value::array([1]))
            .with_to_string(|| Value::from("10"));
        assert_eq!(to_primitive(&Value::object(obj)), Some(Value::from("10")));

        let obj = Object::new().with_value_of(|| Value::object(Object::new()));
        assert_eq!(to_primitive(&Value::object(obj)), None);
    }

    #[test]
    fn test_to_primitive_defaults() {
        assert_eq!(
            to_primitive(&Value::object(Object::new())),
            Some(Value::from("[object Object]"))
        );
        assert_eq!(to_primitive(&Value::array([42])), Some(Value::from("42")));
        assert_eq!(to_primitive(&Value::function(|_| Value::Null)), None);
        assert_eq!(to_primitive(&Value::Bool(true)), Some(Value::Bool(true)));
    }
}
