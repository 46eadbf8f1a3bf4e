//! Object Module
//!
//! Composite values with ordered own properties and optional primitive accessors.

use super::{Function, Value};

// == Object ==
/// A composite value with insertion-ordered own properties.
///
/// The optional `value_of` and `to_string` accessors drive primitive
/// extraction during coercion: `value_of` is tried first, `to_string` is
/// the fallback. An object without either renders as `"[object Object]"`.
#[derive(Debug, Clone, Default)]
pub struct Object {
    properties: Vec<(String, Value)>,
    value_of: Option<Function>,
    to_string: Option<Function>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any previous value under the same name
    /// while keeping its original position.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.properties.push((name, value)),
        }
        self
    }

    /// Installs a zero-argument accessor producing the object's primitive value.
    pub fn with_value_of<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.value_of = Some(Function::new(move |_| f()));
        self
    }

    /// Installs a zero-argument accessor producing the object's string form.
    pub fn with_to_string<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.to_string = Some(Function::new(move |_| f()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Own properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub(crate) fn value_of_accessor(&self) -> Option<&Function> {
        self.value_of.as_ref()
    }

    pub(crate) fn to_string_accessor(&self) -> Option<&Function> {
        self.to_string.as_ref()
    }
}

// Accessors take part in equality by identity.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.properties == other.properties
            && self.value_of == other.value_of
            && self.to_string == other.to_string
    }
}
