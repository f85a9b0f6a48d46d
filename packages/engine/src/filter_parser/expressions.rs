//! Logical expressions and test expressions

use serde_json::{Number, Value};

use crate::ast::{BasicExpr, Comparable, FunctionExpr, LogicalAnd, LogicalOr, Query};
use crate::compiler::QueryParser;
use crate::error::{ParseResult, missing_comparison, not_logical, out_of_range, unexpected};
use crate::selector_parser::parse_integer;
use crate::tokens::TokenKind;
use crate::type_system::PathType;

impl QueryParser<'_> {
    pub(crate) fn parse_logical_or(&mut self) -> ParseResult<LogicalOr> {
        let first = self.parse_basic_expr()?;
        self.parse_logical_or_from(first)
    }

    /// Continue a disjunction whose first basic expression is already parsed
    pub(crate) fn parse_logical_or_from(&mut self, first: BasicExpr) -> ParseResult<LogicalOr> {
        let mut ands = vec![self.parse_logical_and_from(first)?];
        loop {
            self.skip_blank();
            if !self.eat_double('|') {
                return Ok(LogicalOr(ands));
            }
            let next = self.parse_basic_expr()?;
            ands.push(self.parse_logical_and_from(next)?);
        }
    }

    fn parse_logical_and_from(&mut self, first: BasicExpr) -> ParseResult<LogicalAnd> {
        let mut exprs = vec![first];
        loop {
            self.skip_blank();
            if !self.eat_double('&') {
                return Ok(LogicalAnd(exprs));
            }
            exprs.push(self.parse_basic_expr()?);
        }
    }

    /// Whether `&&` or `||` follows, after optional blank space
    pub(crate) fn at_logical_operator(&mut self) -> bool {
        self.skip_blank();
        let first = self.peek();
        let c = match first.kind {
            TokenKind::Punct(c @ ('&' | '|')) => c,
            _ => return false,
        };
        self.peek_nth(1).is_punct(c)
    }

    fn parse_basic_expr(&mut self) -> ParseResult<BasicExpr> {
        self.skip_blank();
        let position = self.peek().position;

        match self.peek_kind() {
            TokenKind::Punct('!') => {
                self.next_token();
                self.skip_blank();
                self.parse_negated_expr()
            }
            TokenKind::Punct('(') => Ok(BasicExpr::Paren(self.parse_group()?)),
            _ if self.peek().is_query_start() => {
                let query = self.parse_embedded_query()?;
                if self.at_comparison() {
                    let left = self.comparable_query(query, position)?;
                    return self.parse_comparison(left);
                }
                Ok(BasicExpr::Exists(query))
            }
            TokenKind::Identifier => {
                let function = self.parse_function_expr()?;
                if self.at_comparison() {
                    let left = self.comparable_function(function, position)?;
                    return self.parse_comparison(left);
                }
                self.test_function(function, position)
            }
            _ if self.peek().is_literal() => {
                let literal = self.parse_literal()?;
                self.parse_comparison(Comparable::Literal(literal))
            }
            _ => Err(unexpected(&self.next_token())),
        }
    }

    /// Operand of `!`: a query, a group or a logical function
    fn parse_negated_expr(&mut self) -> ParseResult<BasicExpr> {
        let position = self.peek().position;
        match self.peek_kind() {
            TokenKind::Punct('(') => Ok(BasicExpr::NotParen(self.parse_group()?)),
            _ if self.peek().is_query_start() => {
                Ok(BasicExpr::NotExists(self.parse_embedded_query()?))
            }
            TokenKind::Identifier => {
                let function = self.parse_function_expr()?;
                if function.result_type() == PathType::Value {
                    return Err(not_logical(function.name(), position));
                }
                Ok(BasicExpr::NotFunctionCall(function))
            }
            _ => Err(unexpected(&self.next_token())),
        }
    }

    /// `(` logical-or `)`
    fn parse_group(&mut self) -> ParseResult<LogicalOr> {
        let open = self.expect_punct('(')?;
        self.enter(open.position)?;
        self.skip_blank();
        let expr = self.parse_logical_or()?;
        self.skip_blank();
        self.expect_punct(')')?;
        self.leave();
        Ok(expr)
    }

    /// `@` or `$` followed by segments
    pub(crate) fn parse_embedded_query(&mut self) -> ParseResult<Query> {
        let anchor = self.next_token();
        self.parse_segments(anchor.is_punct('$'))
    }

    /// A function used as a test expression must produce a logical value or
    /// a node list
    pub(crate) fn test_function(
        &self,
        function: FunctionExpr,
        position: usize,
    ) -> ParseResult<BasicExpr> {
        match function.result_type() {
            PathType::Logical | PathType::Nodes => Ok(BasicExpr::FunctionCall(function)),
            PathType::Value => Err(missing_comparison(position)),
        }
    }

    /// String, number, `true`, `false` or `null`
    pub(crate) fn parse_literal(&mut self) -> ParseResult<Value> {
        let token = self.next_token();
        match token.kind {
            TokenKind::String => Ok(Value::String(token.text)),
            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::Null => Ok(Value::Null),
            // -0 is a valid number literal even though it is not a valid index.
            TokenKind::Integer if token.text == "-0" => {
                Ok(Number::from_f64(-0.0).map_or(Value::from(0), Value::Number))
            }
            TokenKind::Integer => parse_integer(&token).map(Value::from),
            TokenKind::Number => token
                .text
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| out_of_range(&token.text, token.position)),
            _ => Err(unexpected(&token)),
        }
    }
}
