//! Collection Module
//!
//! Single-pass iteration helpers that never mutate their input.

use crate::coerce::to_integer;
use crate::error::{Result, ValueError};
use crate::value::Value;

// == Map ==
/// Maps every element through `iteratee(value, index, collection)`.
///
/// A missing collection yields an empty vector.
pub fn map<T, U, F>(collection: Option<&[T]>, mut iteratee: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    let Some(items) = collection else {
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| iteratee(item, index, items))
        .collect()
}

// == Filter ==
/// Keeps the elements for which `predicate(value, index, collection)` holds.
///
/// A missing collection yields an empty vector.
pub fn filter<T, F>(collection: Option<&[T]>, mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> bool,
{
    let Some(items) = collection else {
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| predicate(item, *index, items))
        .map(|(_, item)| item.clone())
        .collect()
}

// == Reduce ==
/// Folds a collection with `iteratee(accumulator, value, key)`.
///
/// Arrays and byte buffers pass numeric indices as keys, objects pass
/// property names in insertion order, strings pass each character with its
/// index. Without an `accumulator` the first element seeds the fold.
///
/// # Errors
/// - `InvalidArgument` if `collection` is not an array, object, string or buffer
/// - `EmptyCollection` if the collection is empty and no accumulator is given
pub fn reduce<F>(collection: &Value, mut iteratee: F, accumulator: Option<Value>) -> Result<Value>
where
    F: FnMut(Value, &Value, &Value) -> Value,
{
    let entries = entries(collection)?;
    let mut entries = entries.into_iter();

    let mut acc = match accumulator {
        Some(acc) => acc,
        None => entries
            .next()
            .map(|(_, value)| value)
            .ok_or(ValueError::EmptyCollection)?,
    };
    for (key, value) in entries {
        acc = iteratee(acc, &value, &key);
    }
    Ok(acc)
}

/// Flattens a collection into `(key, value)` pairs.
fn entries(collection: &Value) -> Result<Vec<(Value, Value)>> {
    let indexed = |i: usize| Value::Number(i as f64);
    let entries = match collection {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (indexed(i), v.clone()))
            .collect(),
        Value::Object(obj) => obj
            .properties()
            .map(|(k, v)| (Value::from(k), v.clone()))
            .collect(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (indexed(i), Value::String(c.to_string())))
            .collect(),
        Value::Bytes(bytes) => bytes
            .iter()
            .enumerate()
            .map(|(i, b)| (indexed(i), Value::Number(f64::from(*b))))
            .collect(),
        other => {
            return Err(ValueError::InvalidArgument(format!(
                "cannot reduce over {}",
                other.type_name()
            )))
        }
    };
    Ok(entries)
}

// == Chunk ==
/// Splits an array into groups of `size` elements; the last group holds
/// the remainder.
///
/// `size` defaults to 1 and is truncated toward zero; a size below 1 or a
/// missing array yields no groups.
pub fn chunk<T: Clone>(array: Option<&[T]>, size: Option<f64>) -> Vec<Vec<T>> {
    let size = size.map_or(1.0, |s| to_integer(&Value::Number(s)));
    let Some(items) = array else {
        return Vec::new();
    };
    if size < 1.0 {
        return Vec::new();
    }
    // Saturates for sizes beyond the address space.
    let size = size as usize;
    items.chunks(size).map(<[T]>::to_vec).collect()
}
