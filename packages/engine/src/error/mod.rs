//! Error types for query compilation and function registration
//!
//! Compilation failures carry a 1-based source position and render in the
//! `jsonpath: <message> at position <n>` form. Evaluation never fails.

mod constructors;
mod types;

pub(crate) use constructors::*;
pub use types::{ErrorKind, ParseError, ParseResult, RegistryError};
