//! jsontree - a self-contained JSON library.
//!
//! Tokenizes raw text, parses it into a mutable tree of typed values, lets
//! callers build and rearrange that tree programmatically, and renders it
//! back to text in a compact or an indented form.
//!
//! # Architecture
//!
//! The pipeline is organized into focused modules:
//!
//! - [`token`] - Lexical unit model (kind, lexeme, typed payload)
//! - [`lexer`] - Tokenizer owning all character-level grammar
//! - [`value`] - The tagged value tree and its mutation API
//! - [`adapter`] - Capability trait for converting external types
//! - [`parser`] - Recursive descent parser over the token sequence
//! - [`serialize`] - Compact and indented rendering
//! - [`io`] - Whole-file read/parse and write
//! - [`error`] - The error taxonomy
//!
//! # Example
//!
//! ```
//! use jsontree::parse_str;
//!
//! let mut root = parse_str(r#"{"greeting": "hello", "count": 2}"#).unwrap();
//! root.insert("count", 3);
//! assert_eq!(root["count"].as_f64(), Some(3.0));
//! assert_eq!(root.to_compact(), r#"{ "count": 3, "greeting": "hello" }"#);
//! ```
//!
//! Parsing, serialization, and tree teardown all recurse with input nesting
//! depth; hostile deeply nested documents can exhaust the call stack. The
//! tree is a single-owner structure with no concurrent-mutation guarantees.

// Library code propagates typed errors instead of panicking. Indexing is
// the documented exception: like std's containers, `value[key]` panics on
// misuse and carries a targeted allow at the impl site.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod adapter;
pub mod error;
pub mod io;
pub mod lexer;
pub mod parser;
pub mod serialize;
pub mod token;
pub mod value;

// Re-export commonly used types
pub use adapter::{BuildJson, Rendered};
pub use error::{JsonError, JsonResult};
pub use io::{parse_file, write_file};
pub use lexer::Lexer;
pub use parser::{parse_str, Parser};
pub use serialize::{compact, indented};
pub use token::{Literal, Token, TokenKind};
pub use value::{JsonArray, JsonObject, JsonPayload, JsonValue};
