//! Comparison semantics (RFC 9535 section 2.3.5.2.2)
//!
//! Operands are single values or absent. Numbers compare by value after
//! widening to `f64`, strings by code point sequence, and arrays and objects
//! by deep equality. Only numbers and strings are ordered.

use serde_json::Value;

use crate::ast::CompOp;

impl CompOp {
    /// Apply the operator to two operands
    #[must_use]
    pub fn apply(self, left: Option<&Value>, right: Option<&Value>) -> bool {
        match self {
            Self::Eq => equal_to(left, right),
            Self::Ne => !equal_to(left, right),
            Self::Lt => less_than(left, right),
            Self::Gt => less_than(right, left),
            Self::Le => less_than(left, right) || equal_to(left, right),
            Self::Ge => less_than(right, left) || equal_to(left, right),
        }
    }
}

/// Equality of two operands; two absent operands are equal
#[must_use]
pub fn equal_to(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => values_equal(left, right),
        _ => false,
    }
}

/// Ordering of two operands; false unless both are numbers or both strings
#[must_use]
pub fn less_than(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (Some(Value::Number(left)), Some(Value::Number(right))) => {
            match (left.as_f64(), right.as_f64()) {
                (Some(left), Some(right)) => left < right,
                _ => false,
            }
        }
        (Some(Value::String(left)), Some(Value::String(right))) => left < right,
        _ => false,
    }
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => {
            match (left.as_f64(), right.as_f64()) {
                (Some(l), Some(r)) => l == r,
                _ => left == right,
            }
        }
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Bool(left), Value::Bool(right)) => left == right,
        (Value::Null, Value::Null) => true,
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(l, r)| values_equal(l, r))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, l)| right.get(key).is_some_and(|r| values_equal(l, r)))
        }
        _ => false,
    }
}
