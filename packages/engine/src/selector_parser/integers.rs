//! Integer literal conversion shared by selectors and filter literals

use crate::ast::MAX_SAFE_INTEGER;
use crate::error::{ParseResult, invalid_number, out_of_range};
use crate::tokens::Token;

/// Convert an integer token, enforcing the I-JSON safe integer range
///
/// `-0` is not a valid index or slice bound.
pub(crate) fn parse_integer(token: &Token) -> ParseResult<i64> {
    if token.text == "-0" {
        return Err(invalid_number(token.position));
    }
    token
        .text
        .parse::<i64>()
        .ok()
        .filter(|value| (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(value))
        .ok_or_else(|| out_of_range(&token.text, token.position))
}
