//! Function calls and function arguments

use crate::ast::{BasicExpr, Comparable, FunctionExpr, FunctionExprArg};
use crate::compiler::QueryParser;
use crate::error::{ParseResult, function_argument, unexpected, unknown_function};
use crate::tokens::TokenKind;

impl QueryParser<'_> {
    /// `name(args)`, resolved against the registry and validated
    pub(crate) fn parse_function_expr(&mut self) -> ParseResult<FunctionExpr> {
        let name = self.next_token();
        if !self.peek().is_punct('(') {
            return Err(unexpected(&name));
        }
        let Some(function) = self.registry.lookup(&name.text) else {
            return Err(unknown_function(&name.text, name.position));
        };
        self.next_token();
        self.enter(name.position)?;

        let mut args = Vec::new();
        self.skip_blank();
        if self.peek().is_punct(')') {
            self.next_token();
        } else {
            loop {
                args.push(self.parse_function_arg()?);
                self.skip_blank();
                let token = self.next_token();
                if token.is_punct(')') {
                    break;
                }
                if !token.is_punct(',') {
                    return Err(unexpected(&token));
                }
            }
        }
        self.leave();

        function
            .validate(&args)
            .map_err(|message| function_argument(message, name.position))?;
        Ok(FunctionExpr::new(function, args))
    }

    /// One argument: a literal, a query, a function call or a logical
    /// expression
    ///
    /// Literals, queries and calls become logical expressions when an
    /// operator follows them.
    fn parse_function_arg(&mut self) -> ParseResult<FunctionExprArg> {
        self.skip_blank();
        let position = self.peek().position;

        match self.peek_kind() {
            _ if self.peek().is_query_start() => {
                let query = self.parse_embedded_query()?;
                if self.at_comparison() {
                    let left = self.comparable_query(query, position)?;
                    let comparison = self.parse_comparison(left)?;
                    return self.logical_arg(comparison);
                }
                if self.at_logical_operator() {
                    return self.logical_arg(BasicExpr::Exists(query));
                }
                Ok(match query.to_singular() {
                    Some(singular) => FunctionExprArg::SingularQuery(singular),
                    None => FunctionExprArg::FilterQuery(query),
                })
            }
            TokenKind::Identifier => {
                let function = self.parse_function_expr()?;
                if self.at_comparison() {
                    let left = self.comparable_function(function, position)?;
                    let comparison = self.parse_comparison(left)?;
                    return self.logical_arg(comparison);
                }
                if self.at_logical_operator() {
                    let test = self.test_function(function, position)?;
                    return self.logical_arg(test);
                }
                Ok(FunctionExprArg::Function(function))
            }
            _ if self.peek().is_literal() => {
                let literal = self.parse_literal()?;
                if self.at_comparison() {
                    let comparison = self.parse_comparison(Comparable::Literal(literal))?;
                    return self.logical_arg(comparison);
                }
                Ok(FunctionExprArg::Literal(literal))
            }
            _ => Ok(FunctionExprArg::Logical(self.parse_logical_or()?)),
        }
    }

    fn logical_arg(&mut self, first: BasicExpr) -> ParseResult<FunctionExprArg> {
        Ok(FunctionExprArg::Logical(self.parse_logical_or_from(first)?))
    }
}
