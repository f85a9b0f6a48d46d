//! Comparison expressions

use crate::ast::{BasicExpr, CompOp, Comparable, Comparison, FunctionExpr, Query};
use crate::compiler::QueryParser;
use crate::error::{ParseResult, non_singular_query, not_comparable, unexpected};
use crate::tokens::TokenKind;
use crate::type_system::PathType;

impl QueryParser<'_> {
    /// Whether a comparison operator follows, after optional blank space
    ///
    /// A lone `=` counts, so that it is reported where it stands.
    pub(crate) fn at_comparison(&mut self) -> bool {
        self.skip_blank();
        match self.peek_kind() {
            TokenKind::Punct('=' | '<' | '>') => true,
            TokenKind::Punct('!') => self.peek_nth(1).is_punct('='),
            _ => false,
        }
    }

    /// Operator and right operand of a comparison with a parsed left operand
    pub(crate) fn parse_comparison(&mut self, left: Comparable) -> ParseResult<BasicExpr> {
        let op = self.parse_comparison_op()?;
        let right = self.parse_comparable()?;
        Ok(BasicExpr::Comparison(Comparison::new(left, op, right)))
    }

    fn parse_comparison_op(&mut self) -> ParseResult<CompOp> {
        self.skip_blank();
        let token = self.next_token();
        let followed_by_eq = self.peek().is_punct('=');
        let op = match token.kind {
            TokenKind::Punct('=') if followed_by_eq => CompOp::Eq,
            TokenKind::Punct('!') if followed_by_eq => CompOp::Ne,
            TokenKind::Punct('<') if followed_by_eq => CompOp::Le,
            TokenKind::Punct('>') if followed_by_eq => CompOp::Ge,
            TokenKind::Punct('<') => return Ok(CompOp::Lt),
            TokenKind::Punct('>') => return Ok(CompOp::Gt),
            _ => return Err(unexpected(&token)),
        };
        self.next_token();
        Ok(op)
    }

    /// Literal, singular query or value-typed function
    fn parse_comparable(&mut self) -> ParseResult<Comparable> {
        self.skip_blank();
        let position = self.peek().position;
        match self.peek_kind() {
            _ if self.peek().is_query_start() => {
                let query = self.parse_embedded_query()?;
                self.comparable_query(query, position)
            }
            TokenKind::Identifier => {
                let function = self.parse_function_expr()?;
                self.comparable_function(function, position)
            }
            _ if self.peek().is_literal() => Ok(Comparable::Literal(self.parse_literal()?)),
            _ => Err(unexpected(&self.next_token())),
        }
    }

    pub(crate) fn comparable_query(&self, query: Query, position: usize) -> ParseResult<Comparable> {
        query
            .to_singular()
            .map(Comparable::SingularQuery)
            .ok_or_else(|| non_singular_query(position))
    }

    pub(crate) fn comparable_function(
        &self,
        function: FunctionExpr,
        position: usize,
    ) -> ParseResult<Comparable> {
        if function.result_type() != PathType::Value {
            return Err(not_comparable(function.name(), position));
        }
        Ok(Comparable::Function(function))
    }
}
