//! `JSONPath` lexer
//!
//! Decomposed into the scanning loop and one module per token family.

mod characters;
mod core;
mod numbers;
mod strings;

pub use self::core::{Lexer, tokenize};
