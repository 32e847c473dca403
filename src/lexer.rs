//! JSON lexer/tokenizer.
//!
//! Converts raw source text into the ordered token sequence consumed by the
//! parser. Owns all character-level grammar: punctuation, strings, numbers,
//! and the `true`/`false`/`null` keywords (matched case-insensitively).
//!
//! Strings are captured as raw substrings — escape sequences pass through
//! verbatim and are never decoded here. Numbers are validated against the
//! numeric grammar `-? digits ('.' digits)? ([eE] [+-]? digits)?` and
//! decoded to `f64`.

use crate::error::{JsonError, JsonResult};
use crate::token::{Literal, Token, TokenKind};

/// How many characters either side of the cursor go into error snippets.
const CONTEXT_RANGE: usize = 5;

/// JSON lexer with a single forward-only cursor over the source.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset where the current token started.
    start: usize,
    /// Byte offset of the cursor.
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            pos: 0,
        }
    }

    /// Scan the whole source into a token sequence terminated by `Eof`.
    pub fn scan_tokens(&mut self) -> JsonResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while !self.is_end() {
            self.start = self.pos;
            self.scan_token(&mut tokens)?;
        }
        tokens.push(Token::new(TokenKind::Eof, ""));
        Ok(tokens)
    }

    /// Scan one token (or skip whitespace, producing none).
    fn scan_token(&mut self, tokens: &mut Vec<Token>) -> JsonResult<()> {
        // Safe to consume unconditionally: the caller checked is_end().
        let c = self.advance().unwrap_or(b'\0');
        match c {
            b'[' => self.add_token(tokens, TokenKind::LBracket),
            b']' => self.add_token(tokens, TokenKind::RBracket),
            b'{' => self.add_token(tokens, TokenKind::LBrace),
            b'}' => self.add_token(tokens, TokenKind::RBrace),
            b',' => self.add_token(tokens, TokenKind::Comma),
            b':' => self.add_token(tokens, TokenKind::Colon),
            b'"' => self.read_string(tokens)?,
            b't' | b'T' => self.read_keyword(tokens, "true", TokenKind::True)?,
            b'f' | b'F' => self.read_keyword(tokens, "false", TokenKind::False)?,
            b'n' | b'N' => self.read_keyword(tokens, "null", TokenKind::Null)?,
            b' ' | b'\r' | b'\t' | b'\n' => {}
            b'-' | b'0'..=b'9' => self.read_number(tokens)?,
            _ => {
                return Err(JsonError::UnexpectedCharacter {
                    context: self.context(CONTEXT_RANGE),
                })
            }
        }
        Ok(())
    }

    /// Scan a string: forward until a `"` whose preceding character is not
    /// `\`. The lexeme keeps the quotes; the literal payload is the raw
    /// substring between them, escapes untouched.
    fn read_string(&mut self, tokens: &mut Vec<Token>) -> JsonResult<()> {
        while !self.is_end() && (self.peek() != Some(b'"') || self.prev() == Some(b'\\')) {
            self.advance();
        }
        if self.is_end() {
            return Err(JsonError::UnterminatedString {
                context: self.context(CONTEXT_RANGE),
            });
        }
        // Consume the closing quote.
        self.advance();

        let body = self.source[self.start + 1..self.pos - 1].to_string();
        tokens.push(Token::with_literal(
            TokenKind::String,
            &self.source[self.start..self.pos],
            Literal::Str(body),
        ));
        Ok(())
    }

    /// Scan a number. The first character (digit or `-`) is already
    /// consumed. The lexeme is bounded by the strict numeric grammar and
    /// decoded as a whole; there is no best-effort truncation.
    fn read_number(&mut self, tokens: &mut Vec<Token>) -> JsonResult<()> {
        // A lone minus sign must be followed by at least one digit.
        if &self.source[self.start..self.pos] == "-" && !self.peek_is_digit() {
            return Err(self.malformed("number"));
        }
        while self.peek_is_digit() {
            self.advance();
        }

        // Fractional part: only consumed when a digit follows the dot.
        if self.peek() == Some(b'.') && Self::is_digit(self.peek_next()) {
            self.advance();
            while self.peek_is_digit() {
                self.advance();
            }
        }

        // Exponent: once the marker is accepted, a sign is optional but at
        // least one digit is mandatory.
        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            let mut after = self.pos + 1;
            if matches!(self.byte_at(after), Some(b'+') | Some(b'-')) {
                after += 1;
            }
            if !Self::is_digit(self.byte_at(after)) {
                return Err(self.malformed("number"));
            }
            self.pos = after;
            while self.peek_is_digit() {
                self.advance();
            }
        }

        let lexeme = &self.source[self.start..self.pos];
        let value: f64 = lexeme.parse().map_err(|_| self.malformed("number"))?;
        tokens.push(Token::with_literal(
            TokenKind::Number,
            lexeme,
            Literal::Num(value),
        ));
        Ok(())
    }

    /// Scan a keyword whose first character already matched. Each remaining
    /// character is checked case-insensitively; a mismatch reports which
    /// keyword was expected.
    fn read_keyword(
        &mut self,
        tokens: &mut Vec<Token>,
        keyword: &'static str,
        kind: TokenKind,
    ) -> JsonResult<()> {
        for expected in keyword.bytes().skip(1) {
            match self.advance() {
                Some(c) if c.eq_ignore_ascii_case(&expected) => {}
                _ => return Err(self.malformed(keyword)),
            }
        }
        let lexeme = &self.source[self.start..self.pos];
        let token = match kind {
            TokenKind::True => Token::with_literal(kind, lexeme, Literal::Bool(true)),
            TokenKind::False => Token::with_literal(kind, lexeme, Literal::Bool(false)),
            _ => Token::new(kind, lexeme),
        };
        tokens.push(token);
        Ok(())
    }

    fn add_token(&mut self, tokens: &mut Vec<Token>, kind: TokenKind) {
        tokens.push(Token::new(kind, &self.source[self.start..self.pos]));
    }

    fn malformed(&self, expected: &'static str) -> JsonError {
        JsonError::MalformedLiteral {
            expected,
            context: self.context(CONTEXT_RANGE + 1),
        }
    }

    fn byte_at(&self, at: usize) -> Option<u8> {
        self.source.as_bytes().get(at).copied()
    }

    /// Peek at the current byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    /// Look one byte behind the cursor.
    fn prev(&self) -> Option<u8> {
        self.pos.checked_sub(1).and_then(|p| self.byte_at(p))
    }

    /// Look one byte past the cursor.
    fn peek_next(&self) -> Option<u8> {
        self.byte_at(self.pos + 1)
    }

    /// Consume and return the current byte.
    fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    fn is_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek_is_digit(&self) -> bool {
        Self::is_digit(self.peek())
    }

    fn is_digit(b: Option<u8>) -> bool {
        matches!(b, Some(c) if c.is_ascii_digit())
    }

    /// Bounded source window around the cursor for diagnostics, clamped to
    /// the source and adjusted to UTF-8 character boundaries.
    fn context(&self, range: usize) -> String {
        let mut lower = self.pos.saturating_sub(range);
        let mut upper = (self.pos + range).min(self.source.len());
        while lower > 0 && !self.source.is_char_boundary(lower) {
            lower -= 1;
        }
        while upper < self.source.len() && !self.source.is_char_boundary(upper) {
            upper += 1;
        }
        self.source[lower..upper].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JsonError;

    fn lex(input: &str) -> JsonResult<Vec<Token>> {
        Lexer::new(input).scan_tokens()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_structural_tokens() {
        assert_eq!(
            kinds("{}[],:"),
            vec![
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Comma,
                TokenKind::Colon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_whitespace_produces_no_tokens() {
        assert_eq!(kinds(" \t\r\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_keywords_lowercase() {
        assert_eq!(
            kinds("true false null"),
            vec![
                TokenKind::True,
                TokenKind::False,
                TokenKind::Null,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_keywords_mixed_case() {
        assert_eq!(
            kinds("TRUE False nUlL"),
            vec![
                TokenKind::True,
                TokenKind::False,
                TokenKind::Null,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_malformed_keyword_names_expected() {
        match lex("trie") {
            Err(JsonError::MalformedLiteral { expected, .. }) => assert_eq!(expected, "true"),
            other => panic!("expected MalformedLiteral, got {:?}", other),
        }
        match lex("nil") {
            Err(JsonError::MalformedLiteral { expected, .. }) => assert_eq!(expected, "null"),
            other => panic!("expected MalformedLiteral, got {:?}", other),
        }
    }

    #[test]
    fn test_keyword_truncated_at_eof() {
        assert!(matches!(
            lex("fals"),
            Err(JsonError::MalformedLiteral {
                expected: "false",
                ..
            })
        ));
    }

    #[test]
    fn test_string_raw_capture() {
        let tokens = lex(r#""hello""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, r#""hello""#);
        assert_eq!(tokens[0].literal_str().unwrap(), "hello");
    }

    #[test]
    fn test_string_escapes_pass_through_verbatim() {
        let tokens = lex(r#""a\nb\"c""#).unwrap();
        // No decoding: the backslashes survive in the payload.
        assert_eq!(tokens[0].literal_str().unwrap(), r#"a\nb\"c"#);
    }

    #[test]
    fn test_unterminated_string() {
        assert!(matches!(
            lex(r#""never closed"#),
            Err(JsonError::UnterminatedString { .. })
        ));
    }

    #[test]
    fn test_integer_numbers() {
        let tokens = lex("42 -123 0").unwrap();
        assert_eq!(tokens[0].literal_f64().unwrap(), 42.0);
        assert_eq!(tokens[1].literal_f64().unwrap(), -123.0);
        assert_eq!(tokens[2].literal_f64().unwrap(), 0.0);
    }

    #[test]
    fn test_fraction_and_exponent() {
        let tokens = lex("3.25 1e3 2E-2 5e+1").unwrap();
        assert_eq!(tokens[0].literal_f64().unwrap(), 3.25);
        assert_eq!(tokens[1].literal_f64().unwrap(), 1000.0);
        assert_eq!(tokens[2].literal_f64().unwrap(), 0.02);
        assert_eq!(tokens[3].literal_f64().unwrap(), 50.0);
    }

    #[test]
    fn test_lone_minus_is_malformed() {
        assert!(matches!(
            lex("-"),
            Err(JsonError::MalformedLiteral {
                expected: "number",
                ..
            })
        ));
    }

    #[test]
    fn test_exponent_without_digits_is_malformed() {
        assert!(matches!(
            lex("1e"),
            Err(JsonError::MalformedLiteral {
                expected: "number",
                ..
            })
        ));
        assert!(matches!(
            lex("1e+"),
            Err(JsonError::MalformedLiteral {
                expected: "number",
                ..
            })
        ));
    }

    #[test]
    fn test_dangling_dot_stays_outside_the_number() {
        // "1." lexes the 1; the stray dot then fails on its own.
        assert!(matches!(
            lex("1."),
            Err(JsonError::UnexpectedCharacter { .. })
        ));
    }

    #[test]
    fn test_number_does_not_swallow_trailing_text() {
        // Strict grammar: the lexeme stops at the last digit and the next
        // character is scanned as its own token start.
        assert!(matches!(
            lex("12abc"),
            Err(JsonError::UnexpectedCharacter { .. })
        ));
    }

    #[test]
    fn test_unexpected_character_carries_context() {
        match lex("{\"a\": @}") {
            Err(JsonError::UnexpectedCharacter { context }) => {
                assert!(context.contains('@'));
            }
            other => panic!("expected UnexpectedCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_always_terminates_with_eof() {
        let tokens = lex("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }
}
