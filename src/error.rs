//! Error handling for the JSON library.
//!
//! Every failure is reported as a typed [`JsonError`] the moment it is
//! detected; there is no recovery, no partial tree, and no multi-error
//! collection. Lexer errors carry a bounded snippet of the source around
//! the cursor for diagnostics; parser errors are positionless grammar
//! violations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type JsonResult<T> = Result<T, JsonError>;

/// All failures the library can raise.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The lexer hit a character that cannot start any token.
    #[error("unexpected character near [ {context} ]")]
    UnexpectedCharacter {
        /// Source snippet around the offending character.
        context: String,
    },

    /// A string ran to end of input without an unescaped closing quote.
    #[error("unterminated string near [ {context} ]")]
    UnterminatedString {
        /// Source snippet around the cursor when input ran out.
        context: String,
    },

    /// A literal started like `true`/`false`/`null` or a number but did
    /// not match the expected spelling.
    #[error("malformed {expected} literal near [ {context} ]")]
    MalformedLiteral {
        /// Which literal the lexer was committed to.
        expected: &'static str,
        /// Source snippet around the mismatch.
        context: String,
    },

    /// The document does not begin with `{` or `[`.
    #[error("invalid token at start of document: only an object or array may be the root")]
    InvalidDocumentStart,

    /// A token appeared where the object/array grammar does not allow it.
    #[error("unexpected token while parsing JSON")]
    UnexpectedToken,

    /// A typed accessor asked for a tag the node does not carry.
    #[error("value is of type {actual}, not {expected}")]
    TypeMismatch {
        /// Tag the caller requested.
        expected: &'static str,
        /// Tag the node actually carries.
        actual: &'static str,
    },

    /// An external adapter supports neither object nor array form.
    #[error("type supports no JSON form")]
    UnsupportedType,

    /// Reading or writing a JSON file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
