//! Rendering a value tree back to text.
//!
//! Two forms on every node:
//!
//! - [`compact`] — single line, comma-and-space separated entries in the
//!   iteration order of the backing containers.
//! - [`indented`] — one entry per line, each nesting level prefixed with
//!   `level * width` spaces, comma-terminated except the last, closing
//!   bracket at the parent's indent level.
//!
//! Both forms re-parse to a deep-equal tree for anything the parser can
//! produce. Strings are emitted exactly as captured (escapes were never
//! decoded), numbers through the default `f64` formatting, and the
//! `Invalid` sentinel renders as the empty string in either form.

use std::fmt::Write as _;

use crate::value::{JsonArray, JsonObject, JsonValue};

/// Render the compact, single-line form.
pub fn compact(value: &JsonValue) -> String {
    let mut out = String::new();
    write_compact(value, &mut out);
    out
}

/// Render the indented form with the given indent width.
pub fn indented(value: &JsonValue, width: usize) -> String {
    let mut out = String::new();
    write_indented(value, width, 0, &mut out);
    out
}

impl JsonValue {
    /// Method form of [`compact`].
    pub fn to_compact(&self) -> String {
        compact(self)
    }

    /// Method form of [`indented`].
    pub fn to_indented(&self, width: usize) -> String {
        indented(self, width)
    }
}

fn write_scalar(value: &JsonValue, out: &mut String) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Bool(true) => out.push_str("true"),
        JsonValue::Bool(false) => out.push_str("false"),
        JsonValue::Number(n) => {
            let _ = write!(out, "{}", n);
        }
        JsonValue::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        // Composite kinds are handled by the callers; Invalid renders as
        // nothing at all.
        JsonValue::Array(_) | JsonValue::Object(_) | JsonValue::Invalid => {}
    }
}

fn write_compact(value: &JsonValue, out: &mut String) {
    match value {
        JsonValue::Array(items) => write_compact_array(items, out),
        JsonValue::Object(map) => write_compact_object(map, out),
        scalar => write_scalar(scalar, out),
    }
}

fn write_compact_array(items: &JsonArray, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push_str("[ ");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_compact(item, out);
    }
    out.push_str(" ]");
}

fn write_compact_object(map: &JsonObject, out: &mut String) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{ ");
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "\"{}\": ", key);
        write_compact(value, out);
    }
    out.push_str(" }");
}

fn write_indented(value: &JsonValue, width: usize, level: usize, out: &mut String) {
    match value {
        JsonValue::Array(items) => write_indented_array(items, width, level, out),
        JsonValue::Object(map) => write_indented_object(map, width, level, out),
        scalar => write_scalar(scalar, out),
    }
}

fn write_indented_array(items: &JsonArray, width: usize, level: usize, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push_str("[\n");
    for (i, item) in items.iter().enumerate() {
        push_pad(out, (level + 1) * width);
        write_indented(item, width, level + 1, out);
        out.push_str(if i + 1 < items.len() { ",\n" } else { "\n" });
    }
    push_pad(out, level * width);
    out.push(']');
}

fn write_indented_object(map: &JsonObject, width: usize, level: usize, out: &mut String) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    for (i, (key, value)) in map.iter().enumerate() {
        push_pad(out, (level + 1) * width);
        let _ = write!(out, "\"{}\": ", key);
        write_indented(value, width, level + 1, out);
        out.push_str(if i + 1 < map.len() { ",\n" } else { "\n" });
    }
    push_pad(out, level * width);
    out.push('}');
}

fn push_pad(out: &mut String, spaces: usize) {
    for _ in 0..spaces {
        out.push(' ');
    }
}
