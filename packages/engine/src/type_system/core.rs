//! Core kinds for `JSONPath` function expressions

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

/// Runtime kind of a function parameter, function result, or filter
/// sub-expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    /// A single JSON value, or nothing
    Value,
    /// A list of nodes
    Nodes,
    /// A boolean test result
    Logical,
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "ValueType",
            Self::Nodes => "NodesType",
            Self::Logical => "LogicalType",
        })
    }
}

/// Static kind of an expression in argument position
///
/// Literals and singular queries get kinds of their own because they convert
/// to more parameter types than a plain value or node list does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuncType {
    Literal,
    SingularQuery,
    Value,
    Nodes,
    Logical,
}

impl FuncType {
    /// Compatibility table for passing an expression to a parameter
    #[must_use]
    pub fn converts_to(self, target: PathType) -> bool {
        match self {
            Self::Literal | Self::Value => target == PathType::Value,
            Self::SingularQuery => true,
            Self::Nodes => matches!(target, PathType::Nodes | PathType::Logical),
            Self::Logical => target == PathType::Logical,
        }
    }
}

impl From<PathType> for FuncType {
    fn from(kind: PathType) -> Self {
        match kind {
            PathType::Value => Self::Value,
            PathType::Nodes => Self::Nodes,
            PathType::Logical => Self::Logical,
        }
    }
}

/// A value flowing into or out of a function during evaluation
///
/// Values borrow from the document or the query where possible.
#[derive(Debug, Clone, PartialEq)]
pub enum PathValue<'a> {
    /// `None` is the absent value ("Nothing")
    Value(Option<Cow<'a, Value>>),
    Nodes(Vec<&'a Value>),
    Logical(bool),
}

impl<'a> PathValue<'a> {
    /// The absent value
    #[inline]
    #[must_use]
    pub fn nothing() -> Self {
        Self::Value(None)
    }

    #[inline]
    #[must_use]
    pub fn owned(value: Value) -> Self {
        Self::Value(Some(Cow::Owned(value)))
    }

    #[inline]
    #[must_use]
    pub fn borrowed(value: &'a Value) -> Self {
        Self::Value(Some(Cow::Borrowed(value)))
    }

    #[inline]
    #[must_use]
    pub fn path_type(&self) -> PathType {
        match self {
            Self::Value(_) => PathType::Value,
            Self::Nodes(_) => PathType::Nodes,
            Self::Logical(_) => PathType::Logical,
        }
    }
}
