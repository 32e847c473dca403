//! Lexical token model.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source lexeme it was
//! scanned from and, for value-carrying kinds, a decoded [`Literal`]
//! payload. Tokens are produced once by the lexer, consumed once by the
//! parser, and never mutated afterwards.

use crate::error::{JsonError, JsonResult};

/// The kind of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// A quoted string; the payload is the raw substring between the quotes.
    String,
    /// A numeric literal decoded to an `f64`.
    Number,
    /// The `true` keyword (matched case-insensitively).
    True,
    /// The `false` keyword (matched case-insensitively).
    False,
    /// The `null` keyword (matched case-insensitively).
    Null,
    /// End of input; always the final token of a scan.
    Eof,
    /// Placeholder kind for a token that was never produced by a scan.
    Invalid,
}

/// Typed payload attached to value-carrying tokens.
///
/// Present only for [`TokenKind::String`] (the raw substring between the
/// quotes, escapes untouched), [`TokenKind::Number`] (the decoded double),
/// and the boolean keywords.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// String payload, captured verbatim without the surrounding quotes.
    Str(String),
    /// Number payload.
    Num(f64),
    /// Boolean payload.
    Bool(bool),
}

/// One lexical unit: kind, source lexeme, and optional typed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the lexer classified this unit as.
    pub kind: TokenKind,
    /// The exact source text the token was scanned from.
    pub lexeme: String,
    /// Decoded payload for string/number/boolean tokens.
    pub literal: Option<Literal>,
}

impl Token {
    /// Create a token without a payload.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
        }
    }

    /// Create a token carrying a typed payload.
    pub fn with_literal(kind: TokenKind, lexeme: impl Into<String>, literal: Literal) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
        }
    }

    /// Take the string payload out of a [`TokenKind::String`] token.
    pub fn literal_str(&self) -> JsonResult<&str> {
        match (&self.kind, &self.literal) {
            (TokenKind::String, Some(Literal::Str(s))) => Ok(s),
            _ => Err(JsonError::TypeMismatch {
                expected: "string",
                actual: self.kind.name(),
            }),
        }
    }

    /// Read the numeric payload of a [`TokenKind::Number`] token.
    pub fn literal_f64(&self) -> JsonResult<f64> {
        match (&self.kind, &self.literal) {
            (TokenKind::Number, Some(Literal::Num(n))) => Ok(*n),
            _ => Err(JsonError::TypeMismatch {
                expected: "number",
                actual: self.kind.name(),
            }),
        }
    }
}

impl TokenKind {
    /// Name used in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::LBrace => "left brace",
            TokenKind::RBrace => "right brace",
            TokenKind::LBracket => "left bracket",
            TokenKind::RBracket => "right bracket",
            TokenKind::Comma => "comma",
            TokenKind::Colon => "colon",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Eof => "end of input",
            TokenKind::Invalid => "invalid",
        }
    }
}
