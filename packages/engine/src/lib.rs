//! # rfcpath engine
//!
//! Compiler and evaluator for RFC 9535 `JSONPath` queries over
//! [`serde_json::Value`] documents.
//!
//! Query text is tokenized by [`tokenizer::Lexer`], parsed by [`Parser`] into
//! an [`ast::Query`], and evaluated with [`ast::Query::select`] or
//! [`ast::Query::select_located`]. Function calls are resolved at parse time
//! against a [`FunctionRegistry`].
//!
//! ```
//! use rfcpath_engine::parse;
//! use serde_json::json;
//!
//! let query = parse("$.a[?@ > 1]").expect("valid query");
//! let doc = json!({"a": [1, 2, 3]});
//! assert_eq!(query.select(&doc).to_values(), vec![json!(2), json!(3)]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod ast;
pub mod compiler;
pub mod config;
pub mod core_evaluator;
pub mod error;
pub mod filter;
pub mod functions;
pub mod normalized_paths;
pub mod tokenizer;
pub mod tokens;
pub mod type_system;

mod filter_parser;
mod selector_parser;

pub use ast::Query;
pub use compiler::{Parser, parse};
pub use config::{ConfigurationError, ParserConfig};
pub use core_evaluator::{LocatedNode, LocatedNodeList, NodeList};
pub use error::{ErrorKind, ParseError, ParseResult, RegistryError};
pub use functions::{Function, FunctionRegistry};
pub use normalized_paths::{NormalizedPath, PathElement};
pub use type_system::{FuncType, FunctionSignature, PathType, PathValue};
