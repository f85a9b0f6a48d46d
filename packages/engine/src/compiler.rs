//! Query compiler entry point
//!
//! [`Parser`] owns the registry and settings; each call to
//! [`Parser::parse`] runs a fresh [`QueryParser`] over the token stream.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::ast::Query;
use crate::config::{ConfigResult, ParserConfig};
use crate::error::{ParseResult, nesting_too_deep, unexpected};
use crate::functions::FunctionRegistry;
use crate::tokenizer::Lexer;
use crate::tokens::{Token, TokenKind};

/// Compiles query strings, resolving function calls against a registry
#[derive(Debug, Clone)]
pub struct Parser {
    registry: Arc<FunctionRegistry>,
    config: ParserConfig,
}

impl Default for Parser {
    /// Parser over the read-only standard registry
    fn default() -> Self {
        Self::new(FunctionRegistry::shared_standard())
    }
}

impl Parser {
    #[must_use]
    pub fn new(registry: Arc<FunctionRegistry>) -> Self {
        Self {
            registry,
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with explicit settings
    pub fn with_config(registry: Arc<FunctionRegistry>, config: ParserConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    #[inline]
    #[must_use]
    pub fn registry(&self) -> &Arc<FunctionRegistry> {
        &self.registry
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Compile a query
    pub fn parse(&self, text: &str) -> ParseResult<Query> {
        let result =
            QueryParser::new(text, &self.registry, self.config.max_nesting_depth).parse_path();
        match &result {
            Ok(query) => tracing::debug!(
                target: "rfcpath::parser",
                query = text,
                canonical = %query,
                "compiled query"
            ),
            Err(err) => tracing::debug!(
                target: "rfcpath::parser",
                query = text,
                error = %err,
                "rejected query"
            ),
        }
        result
    }
}

/// Compile a query with the default parser
pub fn parse(text: &str) -> ParseResult<Query> {
    Parser::default().parse(text)
}

/// Recursive-descent state over one query string
///
/// Grammar rules are spread over `selector_parser` and `filter_parser` as
/// further `impl` blocks.
pub(crate) struct QueryParser<'p> {
    lexer: Lexer<'p>,
    lookahead: VecDeque<Token>,
    pub(crate) registry: &'p FunctionRegistry,
    max_depth: usize,
    depth: usize,
}

impl<'p> QueryParser<'p> {
    pub(crate) fn new(text: &'p str, registry: &'p FunctionRegistry, max_depth: usize) -> Self {
        Self {
            lexer: Lexer::new(text),
            lookahead: VecDeque::with_capacity(2),
            registry,
            max_depth,
            depth: 0,
        }
    }

    #[inline]
    pub(crate) fn peek(&mut self) -> &Token {
        self.peek_nth(0)
    }

    pub(crate) fn peek_nth(&mut self, n: usize) -> &Token {
        while self.lookahead.len() <= n {
            let token = self.lexer.scan();
            self.lookahead.push_back(token);
        }
        &self.lookahead[n]
    }

    #[inline]
    pub(crate) fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    pub(crate) fn next_token(&mut self) -> Token {
        match self.lookahead.pop_front() {
            Some(token) => token,
            None => self.lexer.scan(),
        }
    }

    /// Consume a blank space token if one is next
    pub(crate) fn skip_blank(&mut self) {
        if self.peek_kind() == TokenKind::BlankSpace {
            self.next_token();
        }
    }

    pub(crate) fn expect_punct(&mut self, c: char) -> ParseResult<Token> {
        let token = self.next_token();
        if token.is_punct(c) {
            Ok(token)
        } else {
            Err(unexpected(&token))
        }
    }

    /// Consume `cc` if the next two tokens are that character twice
    pub(crate) fn eat_double(&mut self, c: char) -> bool {
        if self.peek().is_punct(c) && self.peek_nth(1).is_punct(c) {
            self.next_token();
            self.next_token();
            return true;
        }
        false
    }

    /// Track one more level of nesting that started at `position`
    pub(crate) fn enter(&mut self, position: usize) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(nesting_too_deep(self.max_depth, position));
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// `$` followed by segments and the end of input
    pub(crate) fn parse_path(&mut self) -> ParseResult<Query> {
        self.expect_punct('$')?;
        let query = self.parse_segments(true)?;
        let end = self.next_token();
        if end.kind != TokenKind::Eof {
            return Err(unexpected(&end));
        }
        Ok(query)
    }
}
