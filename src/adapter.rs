//! Capability adapter for external types.
//!
//! A type that wants to become a tree node implements [`BuildJson`] and
//! fills in one (or both) of the two forms. Conversion prefers the object
//! form and falls back to the array form; a type that supports neither
//! cannot be converted.

use crate::error::{JsonError, JsonResult};
use crate::value::{JsonArray, JsonObject, JsonValue};

/// Outcome of asking an adapter to render one of its forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    /// The adapter populated the target.
    Done,
    /// The adapter does not support this form; the target is meaningless.
    Unsupported,
}

/// Conversion contract an external type may implement to become a tree node.
///
/// Both methods default to [`Rendered::Unsupported`]; implementors override
/// the form(s) they support and write their members into the target.
pub trait BuildJson {
    /// Render self as an object into `target`.
    fn build_object(&self, target: &mut JsonObject) -> Rendered {
        let _ = target;
        Rendered::Unsupported
    }

    /// Render self as an array into `target`.
    fn build_array(&self, target: &mut JsonArray) -> Rendered {
        let _ = target;
        Rendered::Unsupported
    }
}

impl JsonValue {
    /// Convert an adapter into a standalone node, preferring the object
    /// form. Fails with [`JsonError::UnsupportedType`] when the adapter
    /// supports neither form.
    pub fn from_adapter(adapter: &impl BuildJson) -> JsonResult<JsonValue> {
        let mut object = JsonObject::new();
        if adapter.build_object(&mut object) == Rendered::Done {
            return Ok(JsonValue::Object(object));
        }
        let mut array = JsonArray::new();
        if adapter.build_array(&mut array) == Rendered::Done {
            return Ok(JsonValue::Array(array));
        }
        Err(JsonError::UnsupportedType)
    }

    /// Insert an adapter-rendered node into an object receiver. Returns
    /// false on a non-object receiver or an unsupported adapter.
    pub fn insert_adapter(&mut self, key: impl Into<String>, adapter: &impl BuildJson) -> bool {
        if !self.is_object() {
            return false;
        }
        match JsonValue::from_adapter(adapter) {
            Ok(node) => self.insert(key, node),
            Err(_) => false,
        }
    }

    /// Append an adapter-rendered node to an array receiver. Returns false
    /// on a non-array receiver or an unsupported adapter.
    pub fn push_adapter(&mut self, adapter: &impl BuildJson) -> bool {
        if !self.is_array() {
            return false;
        }
        match JsonValue::from_adapter(adapter) {
            Ok(node) => self.push(node),
            Err(_) => false,
        }
    }
}
