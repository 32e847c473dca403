//! Recursive descent JSON parser.
//!
//! Consumes the token sequence handed off by the lexer and builds one root
//! [`JsonValue`] covering the whole document. Only an object or an array may
//! be the root. The first grammar violation aborts the parse; there is no
//! recovery and no partial tree.
//!
//! Recursion depth follows input nesting depth, so pathologically nested
//! input can exhaust the call stack; no explicit depth limit is enforced.

use crate::error::{JsonError, JsonResult};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use crate::value::{JsonArray, JsonObject, JsonValue};

/// Recursive descent parser over a scanned token sequence.
pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    /// Create a parser over a token sequence (as produced by
    /// [`Lexer::scan_tokens`]).
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Parse the tokens into the root value of the document.
    pub fn parse(&mut self) -> JsonResult<JsonValue> {
        let root = match self.peek_kind() {
            TokenKind::LBrace => {
                self.next();
                self.parse_object()?
            }
            TokenKind::LBracket => {
                self.next();
                self.parse_array()?
            }
            _ => return Err(JsonError::InvalidDocumentStart),
        };

        // One root value covers the whole document.
        if self.peek_kind() != TokenKind::Eof {
            return Err(JsonError::UnexpectedToken);
        }
        Ok(root)
    }

    /// Parse `key : value` pairs up to the closing brace. The opening brace
    /// is already consumed.
    fn parse_object(&mut self) -> JsonResult<JsonValue> {
        let mut map = JsonObject::new();

        loop {
            let key = self.next();

            if key.kind == TokenKind::RBrace {
                if map.is_empty() {
                    // Early close of an empty object.
                    return Ok(JsonValue::Object(map));
                }
                // A closing brace where a key was expected, with entries
                // already present.
                return Err(JsonError::UnexpectedToken);
            }
            if key.kind != TokenKind::String {
                return Err(JsonError::UnexpectedToken);
            }
            let key_text = key.literal_str()?.to_string();

            if self.next().kind != TokenKind::Colon {
                return Err(JsonError::UnexpectedToken);
            }

            let value = self.parse_value()?;
            // Duplicate keys: the later value silently wins.
            map.insert(key_text, value);

            match self.next().kind {
                TokenKind::Comma => {}
                TokenKind::RBrace => return Ok(JsonValue::Object(map)),
                _ => return Err(JsonError::UnexpectedToken),
            }
        }
    }

    /// Parse values up to the closing bracket. The opening bracket is
    /// already consumed.
    fn parse_array(&mut self) -> JsonResult<JsonValue> {
        let mut items = JsonArray::new();

        loop {
            // The single early-exit: a closing bracket where a value was
            // expected. Reached for the empty array and immediately after
            // `value ,` alike.
            if self.peek_kind() == TokenKind::RBracket {
                self.next();
                return Ok(JsonValue::Array(items));
            }

            items.push(self.parse_value()?);

            match self.next().kind {
                TokenKind::Comma => {}
                TokenKind::RBracket => return Ok(JsonValue::Array(items)),
                _ => return Err(JsonError::UnexpectedToken),
            }
        }
    }

    /// Parse a single value: a scalar token, or a nested object/array.
    fn parse_value(&mut self) -> JsonResult<JsonValue> {
        let token = self.next();
        match token.kind {
            TokenKind::String => Ok(JsonValue::String(token.literal_str()?.to_string())),
            TokenKind::Number => Ok(JsonValue::Number(token.literal_f64()?)),
            TokenKind::True => Ok(JsonValue::Bool(true)),
            TokenKind::False => Ok(JsonValue::Bool(false)),
            TokenKind::Null => Ok(JsonValue::Null),
            TokenKind::LBrace => self.parse_object(),
            TokenKind::LBracket => self.parse_array(),
            _ => Err(JsonError::UnexpectedToken),
        }
    }

    /// Consume and return the current token. Each token is consumed exactly
    /// once, so it is stolen out of the sequence rather than cloned; past
    /// the end an `Invalid` placeholder is returned, which no grammar
    /// position accepts.
    fn next(&mut self) -> Token {
        if self.cursor < self.tokens.len() {
            let token = std::mem::replace(
                &mut self.tokens[self.cursor],
                Token::new(TokenKind::Invalid, ""),
            );
            self.cursor += 1;
            token
        } else {
            Token::new(TokenKind::Invalid, "")
        }
    }

    /// Kind of the current token without consuming it.
    fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.cursor)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Invalid)
    }
}

/// Tokenize and parse a complete JSON document from a string.
pub fn parse_str(source: &str) -> JsonResult<JsonValue> {
    let tokens = Lexer::new(source).scan_tokens()?;
    Parser::new(tokens).parse()
}
