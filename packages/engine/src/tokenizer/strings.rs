//! Quoted string literals and backslash escapes
//!
//! Escapes are shared with identifiers, which additionally accept the braced
//! `\u{...}` form.

use super::core::Lexer;
use crate::tokens::{Token, TokenKind};

const INVALID_ESCAPE: &str = "invalid escape sequence";
const INVALID_UNICODE: &str = "invalid unicode escape";

impl Lexer<'_> {
    pub(super) fn scan_string(&mut self, quote: char) -> Token {
        let start = self.offset;
        self.bump();
        let mut value = String::new();

        loop {
            let position = self.offset;
            match self.bump() {
                None => return self.invalid("unterminated string literal", start),
                Some(c) if c == quote => break,
                Some('\\') => match self.scan_escape(Some(quote), position) {
                    Ok(decoded) => value.push(decoded),
                    Err(invalid) => return invalid,
                },
                Some(c) if u32::from(c) < 0x20 => {
                    return self.invalid("invalid control character in string literal", position);
                }
                Some(c) => value.push(c),
            }
        }

        Token::new(TokenKind::String, value, start)
    }

    /// Decode the escape following a consumed backslash at `position`
    ///
    /// `quote` is the enclosing string delimiter, or `None` inside identifiers.
    pub(super) fn scan_escape(&mut self, quote: Option<char>, position: usize) -> Result<char, Token> {
        let decoded = match self.bump() {
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('/') => '/',
            Some('\\') => '\\',
            Some('u') => return self.scan_unicode_escape(quote.is_none(), position),
            Some(c) if Some(c) == quote => c,
            _ => return Err(self.invalid(INVALID_ESCAPE, position)),
        };
        Ok(decoded)
    }

    fn scan_unicode_escape(&mut self, allow_braced: bool, position: usize) -> Result<char, Token> {
        if allow_braced && self.peek() == Some('{') {
            self.bump();
            let digits_start = self.offset;
            while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
                self.offset += 1;
            }
            let digits = &self.input[digits_start..self.offset];
            let decoded = if digits.is_empty() || digits.len() > 6 || self.peek() != Some('}') {
                None
            } else {
                u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
            };
            self.bump();
            return decoded.ok_or_else(|| self.invalid(INVALID_UNICODE, position));
        }

        let Some(high) = self.read_hex4() else {
            return Err(self.invalid(INVALID_UNICODE, position));
        };

        let code_point = match high {
            0xD800..=0xDBFF => {
                if self.peek() != Some('\\') || self.peek_second() != Some('u') {
                    return Err(self.invalid(INVALID_UNICODE, position));
                }
                self.offset += 2;
                match self.read_hex4() {
                    Some(low @ 0xDC00..=0xDFFF) => 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00),
                    _ => return Err(self.invalid(INVALID_UNICODE, position)),
                }
            }
            0xDC00..=0xDFFF => return Err(self.invalid(INVALID_UNICODE, position)),
            _ => high,
        };

        char::from_u32(code_point).ok_or_else(|| self.invalid(INVALID_UNICODE, position))
    }

    fn read_hex4(&mut self) -> Option<u32> {
        let digits = self.input.get(self.offset..self.offset + 4)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        self.offset += 4;
        u32::from_str_radix(digits, 16).ok()
    }
}
