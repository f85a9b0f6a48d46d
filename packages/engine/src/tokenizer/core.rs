//! Core lexer type and scanning loop

use super::characters::is_name_start;
use crate::tokens::{Token, TokenKind};

/// Converts query text into positioned tokens, one `scan` at a time
///
/// The lexer does not recover from errors: after an invalid token it only
/// produces end-of-input tokens.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    pub(super) input: &'a str,
    pub(super) offset: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    #[inline]
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            finished: false,
        }
    }

    /// Scan the next token
    pub fn scan(&mut self) -> Token {
        if self.finished {
            return Token::new(TokenKind::Eof, "", self.input.len());
        }

        let start = self.offset;
        let Some(c) = self.peek() else {
            self.finished = true;
            return Token::new(TokenKind::Eof, "", start);
        };

        let token = match c {
            ' ' | '\t' | '\n' | '\r' => self.scan_blank(),
            '\'' | '"' => self.scan_string(c),
            '-' | '0'..='9' => self.scan_number(),
            '\\' => self.scan_identifier(),
            c if is_name_start(c) => self.scan_identifier(),
            c => {
                self.bump();
                Token::new(TokenKind::Punct(c), c.to_string(), start)
            }
        };

        if token.kind == TokenKind::Invalid {
            self.finished = true;
        }
        token
    }

    #[inline]
    pub(super) fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    #[inline]
    pub(super) fn peek_second(&self) -> Option<char> {
        let mut chars = self.input[self.offset..].chars();
        chars.next();
        chars.next()
    }

    #[inline]
    pub(super) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consume ASCII digits, reporting whether any were present
    pub(super) fn eat_digits(&mut self) -> bool {
        let start = self.offset;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.offset += 1;
        }
        self.offset > start
    }

    pub(super) fn invalid(&mut self, message: &str, position: usize) -> Token {
        self.finished = true;
        Token::new(TokenKind::Invalid, message, position)
    }
}

/// Scan a whole input, up to and including the end or the first invalid token
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.scan();
        let last = matches!(token.kind, TokenKind::Eof | TokenKind::Invalid);
        tokens.push(token);
        if last {
            return tokens;
        }
    }
}
