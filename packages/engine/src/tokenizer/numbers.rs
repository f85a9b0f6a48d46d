//! Integer and number literal scanning
//!
//! The token text is the literal exactly as written; range checks happen in
//! the parser where the literal's role is known.

use super::core::Lexer;
use crate::tokens::{Token, TokenKind};

const INVALID_NUMBER: &str = "invalid number literal";

impl Lexer<'_> {
    pub(super) fn scan_number(&mut self) -> Token {
        let start = self.offset;
        let mut kind = TokenKind::Integer;

        if self.peek() == Some('-') {
            self.bump();
        }

        match self.peek() {
            Some('0') => {
                self.bump();
                if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    return self.invalid(INVALID_NUMBER, start);
                }
            }
            Some(c) if c.is_ascii_digit() => {
                self.eat_digits();
            }
            _ => return self.invalid(INVALID_NUMBER, start),
        }

        if self.peek() == Some('.') {
            self.bump();
            if !self.eat_digits() {
                return self.invalid(INVALID_NUMBER, start);
            }
            kind = TokenKind::Number;
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if !self.eat_digits() {
                return self.invalid(INVALID_NUMBER, start);
            }
            kind = TokenKind::Number;
        }

        Token::new(kind, &self.input[start..self.offset], start)
    }
}
