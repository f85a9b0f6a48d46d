//! Helper constructors for the parser's error messages

use super::types::{ErrorKind, ParseError};
use crate::tokens::{Token, TokenKind};

/// Error for a token that does not fit the grammar
///
/// Invalid tokens surface the lexer's own message instead.
pub(crate) fn unexpected(token: &Token) -> ParseError {
    match token.kind {
        TokenKind::Invalid => ParseError::new(ErrorKind::Lexical, &*token.text, token.position),
        _ => ParseError::new(
            ErrorKind::Syntax,
            format!("unexpected {}", token.describe()),
            token.position,
        ),
    }
}

pub(crate) fn invalid_number(offset: usize) -> ParseError {
    ParseError::new(ErrorKind::Lexical, "invalid number literal", offset)
}

pub(crate) fn out_of_range(literal: &str, offset: usize) -> ParseError {
    ParseError::new(
        ErrorKind::OutOfRange,
        format!("cannot parse \"{literal}\", value out of range"),
        offset,
    )
}

pub(crate) fn unknown_function(name: &str, offset: usize) -> ParseError {
    ParseError::new(
        ErrorKind::UnknownFunction,
        format!("unknown function {name}()"),
        offset,
    )
}

pub(crate) fn function_argument(message: String, offset: usize) -> ParseError {
    ParseError::new(ErrorKind::FunctionArgument, message, offset)
}

pub(crate) fn missing_comparison(offset: usize) -> ParseError {
    ParseError::new(
        ErrorKind::MissingComparison,
        "missing comparison to function result",
        offset,
    )
}

pub(crate) fn not_comparable(name: &str, offset: usize) -> ParseError {
    ParseError::new(
        ErrorKind::FunctionType,
        format!("function {name}() result is not comparable"),
        offset,
    )
}

pub(crate) fn not_logical(name: &str, offset: usize) -> ParseError {
    ParseError::new(
        ErrorKind::FunctionType,
        format!("function {name}() result is not logical"),
        offset,
    )
}

pub(crate) fn non_singular_query(offset: usize) -> ParseError {
    ParseError::new(
        ErrorKind::Syntax,
        "non-singular query is not comparable",
        offset,
    )
}

pub(crate) fn nesting_too_deep(limit: usize, offset: usize) -> ParseError {
    ParseError::new(
        ErrorKind::NestingDepth,
        format!("nesting depth exceeds {limit}"),
        offset,
    )
}
