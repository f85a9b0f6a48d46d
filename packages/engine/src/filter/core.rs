//! Logical evaluation of filter expressions
//!
//! `&&` and `||` short-circuit from left to right.

use std::borrow::Cow;

use serde_json::Value;

use crate::ast::{
    BasicExpr, Comparable, Comparison, FunctionExpr, FunctionExprArg, LogicalAnd, LogicalOr,
};
use crate::type_system::PathValue;

impl LogicalOr {
    /// Evaluate for one candidate node
    #[must_use]
    pub fn test(&self, current: &Value, root: &Value) -> bool {
        self.0.iter().any(|and| and.test(current, root))
    }
}

impl LogicalAnd {
    #[must_use]
    pub fn test(&self, current: &Value, root: &Value) -> bool {
        self.0.iter().all(|expr| expr.test(current, root))
    }
}

impl BasicExpr {
    #[must_use]
    pub fn test(&self, current: &Value, root: &Value) -> bool {
        match self {
            Self::Exists(query) => query.matches_any(current, root),
            Self::NotExists(query) => !query.matches_any(current, root),
            Self::Paren(expr) => expr.test(current, root),
            Self::NotParen(expr) => !expr.test(current, root),
            Self::Comparison(comparison) => comparison.test(current, root),
            Self::FunctionCall(function) => function.evaluate(current, root).into_logical(),
            Self::NotFunctionCall(function) => !function.evaluate(current, root).into_logical(),
        }
    }
}

impl Comparison {
    #[must_use]
    pub fn test(&self, current: &Value, root: &Value) -> bool {
        let left = self.left.evaluate(current, root);
        let right = self.right.evaluate(current, root);
        self.op.apply(left.as_deref(), right.as_deref())
    }
}

impl Comparable {
    /// The operand's value, `None` when absent
    fn evaluate<'a>(&'a self, current: &'a Value, root: &'a Value) -> Option<Cow<'a, Value>> {
        match self {
            Self::Literal(value) => Some(Cow::Borrowed(value)),
            Self::SingularQuery(query) => query.locate(current, root).map(Cow::Borrowed),
            Self::Function(function) => function.evaluate(current, root).into_value(),
        }
    }
}

impl FunctionExpr {
    /// Evaluate arguments in their natural kinds and call the function
    #[must_use]
    pub fn evaluate<'a>(&'a self, current: &'a Value, root: &'a Value) -> PathValue<'a> {
        let args = self
            .args
            .iter()
            .map(|arg| arg.evaluate(current, root))
            .collect();
        let result = self.function.evaluate(args);
        tracing::trace!(
            target: "rfcpath::filter",
            function = self.name(),
            result = ?result,
            "function evaluated"
        );
        result
    }
}

impl FunctionExprArg {
    fn evaluate<'a>(&'a self, current: &'a Value, root: &'a Value) -> PathValue<'a> {
        match self {
            Self::Literal(value) => PathValue::borrowed(value),
            Self::SingularQuery(query) => {
                PathValue::Nodes(query.locate(current, root).into_iter().collect())
            }
            Self::FilterQuery(query) => PathValue::Nodes(query.select_from(current, root).into_vec()),
            Self::Logical(expr) => PathValue::Logical(expr.test(current, root)),
            Self::Function(function) => function.evaluate(current, root),
        }
    }
}
