//! JSON value tree.
//!
//! [`JsonValue`] is a genuine sum type: the tag and the payload are one and
//! the same, so internal code can never observe a node whose declared type
//! disagrees with its contents. Type errors are possible only at the typed
//! accessor boundary ([`JsonValue::value_as`] and friends).
//!
//! Objects are backed by a `BTreeMap`, so iteration (and serialization)
//! order is key order — stable for a given population. Arrays preserve
//! insertion order. Every node exclusively owns its children: the tree is a
//! tree, never a graph.
//!
//! The tree is a single-owner mutable structure with no internal locking;
//! callers sharing it across threads must serialize access themselves.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{JsonError, JsonResult};

/// Object backing: unique string keys to child nodes, iterated in key order.
pub type JsonObject = BTreeMap<String, JsonValue>;

/// Array backing: an ordered sequence of child nodes.
pub type JsonArray = Vec<JsonValue>;

/// One node of the JSON value tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// The `null` literal. Also the state a cleared node is left in.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number; the single internal numeric representation is `f64`.
    Number(f64),
    /// A string, stored exactly as captured (escapes undecoded).
    String(String),
    /// An ordered sequence of nodes.
    Array(JsonArray),
    /// A mapping of unique string keys to nodes.
    Object(JsonObject),
    /// Sentinel for failed or absent construction. Never produced by the
    /// parser and never rendered as valid JSON.
    Invalid,
}

impl JsonValue {
    /// An empty object node.
    pub fn new_object() -> Self {
        JsonValue::Object(JsonObject::new())
    }

    /// An empty array node.
    pub fn new_array() -> Self {
        JsonValue::Array(JsonArray::new())
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
            JsonValue::Invalid => "invalid",
        }
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns true if this is the invalid sentinel.
    pub fn is_invalid(&self) -> bool {
        matches!(self, JsonValue::Invalid)
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number value if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a value from an object by key. Never mutates: `None` on a
    /// non-object receiver or an absent key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Mutable counterpart of [`JsonValue::get`].
    pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
        match self {
            JsonValue::Object(map) => map.get_mut(key),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Mutable counterpart of [`JsonValue::get_index`].
    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut JsonValue> {
        match self {
            JsonValue::Array(arr) => arr.get_mut(index),
            _ => None,
        }
    }

    /// Keyed access that inserts a `Null` entry for an absent key.
    ///
    /// This is the explicit opt-in form of auto-creating access; the plain
    /// read path ([`JsonValue::get`]) never mutates.
    pub fn get_or_insert(&mut self, key: impl Into<String>) -> JsonResult<&mut JsonValue> {
        let actual = self.type_name();
        match self {
            JsonValue::Object(map) => Ok(map.entry(key.into()).or_insert(JsonValue::Null)),
            _ => Err(JsonError::TypeMismatch {
                expected: "object",
                actual,
            }),
        }
    }

    /// Insert a member into an object. Returns false (rather than failing)
    /// when the receiver is not an object. An existing key is overwritten.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> bool {
        match self {
            JsonValue::Object(map) => {
                map.insert(key.into(), value.into());
                true
            }
            _ => false,
        }
    }

    /// Append an element to an array. Returns false when the receiver is
    /// not an array.
    pub fn push(&mut self, value: impl Into<JsonValue>) -> bool {
        match self {
            JsonValue::Array(items) => {
                items.push(value.into());
                true
            }
            _ => false,
        }
    }

    /// Streaming-style append: pushes onto an array receiver, or converts a
    /// `Null` receiver in place into the pushed value. Any other receiver is
    /// left unchanged (misuse is not guarded). Chains left to right.
    pub fn append(&mut self, value: impl Into<JsonValue>) -> &mut Self {
        match self {
            JsonValue::Array(items) => items.push(value.into()),
            JsonValue::Null => *self = value.into(),
            _ => {}
        }
        self
    }

    /// Live, mutable reference to the payload if the node's tag matches `T`.
    pub fn value_as<T: JsonPayload>(&mut self) -> JsonResult<&mut T> {
        let actual = self.type_name();
        T::payload_mut(self).ok_or(JsonError::TypeMismatch {
            expected: T::NAME,
            actual,
        })
    }

    /// Non-failing variant of [`JsonValue::value_as`].
    pub fn try_value_as<T: JsonPayload>(&mut self) -> Option<&mut T> {
        T::payload_mut(self)
    }

    /// Type-checked copy-out. Copies the payload into `out` and returns
    /// true when the tag matches `T`; returns false and leaves `out`
    /// untouched otherwise.
    pub fn extract<T: JsonPayload + Clone>(&self, out: &mut T) -> bool {
        match T::payload_ref(self) {
            Some(payload) => {
                *out = payload.clone();
                true
            }
            None => false,
        }
    }

    /// Erase a member from an object. Returns false when the receiver is
    /// not an object or the key is absent.
    pub fn remove(&mut self, key: &str) -> bool {
        match self {
            JsonValue::Object(map) => map.remove(key).is_some(),
            _ => false,
        }
    }

    /// Erase an element from an array. Returns false when the receiver is
    /// not an array or the index is out of bounds.
    pub fn remove_index(&mut self, index: usize) -> bool {
        match self {
            JsonValue::Array(items) if index < items.len() => {
                items.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Replace this node's own content with `Null` in place. Does not
    /// detach the node from its parent.
    pub fn clear(&mut self) {
        *self = JsonValue::Null;
    }
}

/// Payload types a node can be opened as: the closed set behind the typed
/// accessors. Implemented for `bool`, `f64`, `String`, [`JsonArray`] and
/// [`JsonObject`]; sealed against external impls.
pub trait JsonPayload: sealed::Sealed + Sized {
    /// Tag name used in mismatch diagnostics.
    const NAME: &'static str;

    /// Borrow the payload when the node carries this tag.
    fn payload_ref(value: &JsonValue) -> Option<&Self>;

    /// Mutably borrow the payload when the node carries this tag.
    fn payload_mut(value: &mut JsonValue) -> Option<&mut Self>;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for bool {}
    impl Sealed for f64 {}
    impl Sealed for String {}
    impl Sealed for super::JsonArray {}
    impl Sealed for super::JsonObject {}
}

macro_rules! payload_impl {
    ($ty:ty, $variant:ident, $name:literal) => {
        impl JsonPayload for $ty {
            const NAME: &'static str = $name;

            fn payload_ref(value: &JsonValue) -> Option<&Self> {
                match value {
                    JsonValue::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn payload_mut(value: &mut JsonValue) -> Option<&mut Self> {
                match value {
                    JsonValue::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

payload_impl!(bool, Bool, "boolean");
payload_impl!(f64, Number, "number");
payload_impl!(String, String, "string");
payload_impl!(JsonArray, Array, "array");
payload_impl!(JsonObject, Object, "object");

impl From<f64> for JsonValue {
    fn from(v: f64) -> Self {
        JsonValue::Number(v)
    }
}

macro_rules! number_from {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for JsonValue {
            fn from(v: $ty) -> Self {
                JsonValue::Number(v as f64)
            }
        })*
    };
}

// Integer widths and f32 all route to the one internal representation.
number_from!(f32, i8, i16, i32, i64, u8, u16, u32, u64);

impl From<bool> for JsonValue {
    fn from(v: bool) -> Self {
        JsonValue::Bool(v)
    }
}

impl From<&str> for JsonValue {
    fn from(v: &str) -> Self {
        JsonValue::String(v.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(v: String) -> Self {
        JsonValue::String(v)
    }
}

impl From<()> for JsonValue {
    fn from(_: ()) -> Self {
        JsonValue::Null
    }
}

impl From<JsonArray> for JsonValue {
    fn from(v: JsonArray) -> Self {
        JsonValue::Array(v)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(v: JsonObject) -> Self {
        JsonValue::Object(v)
    }
}

// Indexing is the panicking access form, like std's containers: a wrong
// receiver variant or an absent member is a caller bug, not a parse error.
#[allow(clippy::panic)]
impl Index<&str> for JsonValue {
    type Output = JsonValue;

    fn index(&self, key: &str) -> &JsonValue {
        match self {
            JsonValue::Object(map) => map
                .get(key)
                .unwrap_or_else(|| panic!("no key {key:?} in object")),
            other => panic!(
                "keyed access on a {} value; only objects support keys",
                other.type_name()
            ),
        }
    }
}

#[allow(clippy::panic)]
impl IndexMut<&str> for JsonValue {
    /// Auto-inserts a `Null` entry for an absent key, like
    /// [`JsonValue::get_or_insert`]. Panics on a non-object receiver.
    fn index_mut(&mut self, key: &str) -> &mut JsonValue {
        match self {
            JsonValue::Object(map) => map.entry(key.to_string()).or_insert(JsonValue::Null),
            other => panic!(
                "keyed access on a {} value; only objects support keys",
                other.type_name()
            ),
        }
    }
}

#[allow(clippy::panic)]
impl Index<usize> for JsonValue {
    type Output = JsonValue;

    fn index(&self, index: usize) -> &JsonValue {
        match self {
            JsonValue::Array(items) => &items[index],
            other => panic!(
                "indexed access on a {} value; only arrays support indices",
                other.type_name()
            ),
        }
    }
}

#[allow(clippy::panic)]
impl IndexMut<usize> for JsonValue {
    fn index_mut(&mut self, index: usize) -> &mut JsonValue {
        match self {
            JsonValue::Array(items) => &mut items[index],
            other => panic!(
                "indexed access on a {} value; only arrays support indices",
                other.type_name()
            ),
        }
    }
}

impl fmt::Display for JsonValue {
    /// Renders the compact form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize::compact(self))
    }
}
