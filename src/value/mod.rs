//! Value Module
//!
//! Dynamic value model consumed by coercion, memoization and the collection helpers.

mod key;
mod object;

use std::fmt;
use std::sync::Arc;

pub use key::MapKey;
pub use object::Object;

// == Function ==
pub(crate) type Callable = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Shared callable value.
///
/// Clones share the same closure, and equality is identity of that closure.
#[derive(Clone)]
pub struct Function(Arc<Callable>);

impl Function {
    /// Wraps a closure taking the call arguments.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the closure.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    /// Returns true if both handles share the same closure.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }

    pub(crate) fn downgrade(&self) -> std::sync::Weak<Callable> {
        Arc::downgrade(&self.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({:#x})", self.addr())
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

// == Symbol ==
/// Opaque value with a description, unique per construction.
#[derive(Clone)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(description: &str) -> Self {
        Self(Arc::from(description))
    }

    pub fn description(&self) -> &str {
        &self.0
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const u8 as usize
    }

    pub(crate) fn downgrade(&self) -> std::sync::Weak<str> {
        Arc::downgrade(&self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// == Value ==
/// A dynamically typed value.
///
/// `Undefined` and `Null` are two distinct absence markers and coerce
/// differently. Arrays, objects, byte buffers, symbols and functions are
/// shared: cloning a `Value` clones a handle, not the contents.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Unset marker
    #[default]
    Undefined,
    /// Empty marker
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    Array(Arc<Vec<Value>>),
    Object(Arc<Object>),
    /// Raw buffer or typed array contents
    Bytes(Arc<[u8]>),
    Function(Function),
}

impl Value {
    // == Constructors ==
    /// Builds an array value from any iterator of convertible items.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Array(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    pub fn object(object: Object) -> Self {
        Value::Object(Arc::new(object))
    }

    pub fn bytes(bytes: &[u8]) -> Self {
        Value::Bytes(Arc::from(bytes))
    }

    pub fn symbol(description: &str) -> Self {
        Value::Symbol(Symbol::new(description))
    }

    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(Function::new(f))
    }

    // == Inspection ==
    /// Returns true for values that are not shared composites or functions.
    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            Value::Array(_) | Value::Object(_) | Value::Bytes(_) | Value::Function(_)
        )
    }

    /// Returns true for either absence marker.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Bytes(_) => "bytes",
            Value::Function(_) => "function",
        }
    }

    /// Address of the shared allocation behind a reference value.
    ///
    /// Primitives other than symbols have no identity and return `None`.
    pub(crate) fn identity(&self) -> Option<usize> {
        match self {
            Value::Symbol(s) => Some(s.addr()),
            Value::Array(a) => Some(Arc::as_ptr(a) as usize),
            Value::Object(o) => Some(Arc::as_ptr(o) as usize),
            Value::Bytes(b) => Some(Arc::as_ptr(b) as *const u8 as usize),
            Value::Function(f) => Some(f.addr()),
            _ => None,
        }
    }
}

// Structural equality: numbers compare with `==` (so NaN != NaN), composites
// by contents, symbols and functions by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b) || a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b) || a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

// == Conversions ==
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::object(object)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::array(items),
            serde_json::Value::Object(map) => {
                let object = map
                    .into_iter()
                    .fold(Object::new(), |obj, (k, v)| obj.with_property(k, v));
                Value::object(object)
            }
        }
    }
}
