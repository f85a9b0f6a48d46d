//! Segment and selector grammar
//!
//! `.name`, `.*`, `..name`, `..*`, `..[...]` and `[...]` segments, and the
//! selectors allowed inside brackets.

mod brackets;
mod integers;
mod segments;

pub(crate) use integers::parse_integer;
