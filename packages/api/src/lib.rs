//! rfcpath public API
//!
//! RFC 9535 `JSONPath` for [`serde_json::Value`] documents. A [`JsonPath`] is
//! compiled once and can then be evaluated against any number of documents,
//! yielding plain node lists or nodes paired with their normalized paths.
//!
//! ```
//! use rfcpath::JsonPath;
//! use serde_json::json;
//!
//! let path = JsonPath::parse("$.store.book[?@.price < 10].title").expect("valid query");
//! let doc = json!({"store": {"book": [
//!     {"title": "Sayings", "price": 8.95},
//!     {"title": "Sword", "price": 12.99}
//! ]}});
//!
//! let titles = path.select(&doc);
//! assert_eq!(titles.exactly_one(), Some(&json!("Sayings")));
//!
//! let located = path.select_located(&doc);
//! let paths: Vec<String> = located.paths().map(ToString::to_string).collect();
//! assert_eq!(paths, vec!["$['store']['book'][0]['title']"]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

mod path;

pub use path::JsonPath;

// Re-export the engine surface most callers need
pub use rfcpath_engine::{
    ConfigurationError, ErrorKind, FuncType, Function, FunctionRegistry, FunctionSignature,
    LocatedNode, LocatedNodeList, NodeList, NormalizedPath, ParseError, ParseResult, Parser,
    ParserConfig, PathElement, PathType, PathValue, Query, RegistryError,
};

/// Query syntax tree, for callers that inspect compiled queries
pub use rfcpath_engine::ast;

/// Compile a query with the standard function registry
///
/// Shorthand for [`JsonPath::parse`].
pub fn parse(text: &str) -> ParseResult<JsonPath> {
    JsonPath::parse(text)
}
