//! Conversions between runtime kinds
//!
//! Arguments arrive in their natural kind: literals as values, queries as
//! node lists, logical expressions as booleans. Functions convert them to
//! their declared parameter kinds with these methods. Conversions the type
//! checker rules out panic, as they can only come from a function whose
//! validator accepted arguments it cannot handle.

use std::borrow::Cow;

use serde_json::Value;

use super::core::{PathType, PathValue};

#[cold]
fn contract_violation(found: PathType, wanted: PathType) -> ! {
    panic!("jsonpath: cannot convert {found} to {wanted}; function validator accepted an incompatible argument")
}

impl<'a> PathValue<'a> {
    /// Convert to a single value; a node list converts only when it holds
    /// exactly one node
    #[must_use]
    pub fn into_value(self) -> Option<Cow<'a, Value>> {
        match self {
            Self::Value(value) => value,
            Self::Nodes(nodes) => match nodes.as_slice() {
                [node] => Some(Cow::Borrowed(*node)),
                _ => None,
            },
            Self::Logical(_) => contract_violation(PathType::Logical, PathType::Value),
        }
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<&'a Value> {
        match self {
            Self::Nodes(nodes) => nodes,
            other => contract_violation(other.path_type(), PathType::Nodes),
        }
    }

    /// Convert to a boolean; a node list is true when non-empty
    #[must_use]
    pub fn into_logical(self) -> bool {
        match self {
            Self::Logical(value) => value,
            Self::Nodes(nodes) => !nodes.is_empty(),
            Self::Value(_) => contract_violation(PathType::Value, PathType::Logical),
        }
    }
}

impl From<Value> for PathValue<'_> {
    fn from(value: Value) -> Self {
        Self::owned(value)
    }
}

impl From<bool> for PathValue<'_> {
    fn from(value: bool) -> Self {
        Self::Logical(value)
    }
}
