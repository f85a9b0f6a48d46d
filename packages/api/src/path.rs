//! Compiled query handle

use std::fmt;
use std::str::FromStr;

use rfcpath_engine::{LocatedNodeList, NodeList, ParseResult, Parser, Query};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A compiled `JSONPath` query
///
/// Two paths are equal when their compiled forms are equal, so `$.a` and
/// `$['a']` compare equal. Display renders the canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPath {
    query: Query,
}

impl JsonPath {
    /// Compile `text` against the standard function registry
    ///
    /// # Errors
    /// Returns a [`rfcpath_engine::ParseError`] describing the first problem
    /// found, with its 1-based position in `text`.
    pub fn parse(text: &str) -> ParseResult<Self> {
        Self::parse_with(&Parser::default(), text)
    }

    /// Compile `text` with a parser carrying its own registry or settings
    ///
    /// # Errors
    /// See [`JsonPath::parse`].
    pub fn parse_with(parser: &Parser, text: &str) -> ParseResult<Self> {
        parser.parse(text).map(|query| Self { query })
    }

    #[inline]
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Nodes selected from `value`, in selection order
    #[inline]
    #[must_use]
    pub fn select<'a>(&self, value: &'a Value) -> NodeList<'a> {
        self.query.select(value)
    }

    /// Nodes selected from `value` with their normalized paths
    #[inline]
    #[must_use]
    pub fn select_located<'a>(&self, value: &'a Value) -> LocatedNodeList<'a> {
        self.query.select_located(value)
    }
}

impl From<Query> for JsonPath {
    fn from(query: Query) -> Self {
        Self { query }
    }
}

impl FromStr for JsonPath {
    type Err = rfcpath_engine::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.query, f)
    }
}

impl Serialize for JsonPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for JsonPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}
