//! Identifier and blank space scanning

use super::core::Lexer;
use crate::tokens::{Token, TokenKind};

/// First character of a member or function name
#[inline]
pub(super) fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Any later character of a member or function name
#[inline]
pub(super) fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '$'
}

impl Lexer<'_> {
    pub(super) fn scan_blank(&mut self) -> Token {
        let start = self.offset;
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.offset += 1;
        }
        Token::new(
            TokenKind::BlankSpace,
            &self.input[start..self.offset],
            start,
        )
    }

    /// Scan a name, decoding backslash escapes
    ///
    /// `true`, `false` and `null` become literal tokens only when spelled
    /// without escapes.
    pub(super) fn scan_identifier(&mut self) -> Token {
        let start = self.offset;
        let mut name = String::new();
        let mut escaped = false;

        while let Some(c) = self.peek() {
            if c == '\\' {
                let escape_start = self.offset;
                self.bump();
                match self.scan_escape(None, escape_start) {
                    Ok(decoded) => name.push(decoded),
                    Err(invalid) => return invalid,
                }
                escaped = true;
            } else if (name.is_empty() && is_name_start(c)) || (!name.is_empty() && is_name_char(c))
            {
                self.bump();
                name.push(c);
            } else {
                break;
            }
        }

        let kind = match name.as_str() {
            "true" if !escaped => TokenKind::True,
            "false" if !escaped => TokenKind::False,
            "null" if !escaped => TokenKind::Null,
            _ => TokenKind::Identifier,
        };
        Token::new(kind, name, start)
    }
}
