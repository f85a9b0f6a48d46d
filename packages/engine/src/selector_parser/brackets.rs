//! Bracketed selector lists

use crate::ast::{Selector, Slice};
use crate::compiler::QueryParser;
use crate::error::{ParseResult, unexpected};
use crate::tokens::TokenKind;

use super::integers::parse_integer;

impl QueryParser<'_> {
    /// Comma-separated selectors after a consumed `[`, through the closing `]`
    pub(crate) fn parse_bracketed_selection(&mut self) -> ParseResult<Vec<Selector>> {
        let mut selectors = Vec::new();
        loop {
            self.skip_blank();
            selectors.push(self.parse_selector()?);
            self.skip_blank();

            let token = self.next_token();
            if token.is_punct(']') {
                return Ok(selectors);
            }
            if !token.is_punct(',') {
                return Err(unexpected(&token));
            }
        }
    }

    fn parse_selector(&mut self) -> ParseResult<Selector> {
        match self.peek_kind() {
            TokenKind::String => Ok(Selector::Name(self.next_token().text)),
            TokenKind::Punct('*') => {
                self.next_token();
                Ok(Selector::Wildcard)
            }
            TokenKind::Integer | TokenKind::Punct(':') => self.parse_index_or_slice(),
            TokenKind::Punct('?') => {
                let question = self.next_token();
                self.enter(question.position)?;
                self.skip_blank();
                let expr = self.parse_logical_or()?;
                self.leave();
                Ok(Selector::Filter(expr))
            }
            _ => Err(unexpected(&self.next_token())),
        }
    }

    /// An index, or a slice when a `:` follows the optional start
    fn parse_index_or_slice(&mut self) -> ParseResult<Selector> {
        let start = self.parse_optional_integer()?;
        self.skip_blank();

        if !self.peek().is_punct(':') {
            return match start {
                Some(index) => Ok(Selector::Index(index)),
                None => Err(unexpected(&self.next_token())),
            };
        }
        self.next_token();
        self.skip_blank();

        let end = self.parse_optional_integer()?;
        self.skip_blank();

        let step = if self.peek().is_punct(':') {
            self.next_token();
            self.skip_blank();
            self.parse_optional_integer()?
        } else {
            None
        };

        Ok(Selector::Slice(Slice::new(start, end, step)))
    }

    fn parse_optional_integer(&mut self) -> ParseResult<Option<i64>> {
        if self.peek_kind() != TokenKind::Integer {
            return Ok(None);
        }
        parse_integer(&self.next_token()).map(Some)
    }
}
