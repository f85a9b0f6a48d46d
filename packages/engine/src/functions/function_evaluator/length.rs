//! `length(value)`: size of a string, array or object

use serde_json::Value;

use crate::functions::Function;
use crate::type_system::{FunctionSignature, PathType, PathValue};

pub(super) fn function() -> Function {
    Function::with_signature(
        FunctionSignature::new("length", vec![PathType::Value], PathType::Value),
        evaluate,
    )
}

/// Strings count Unicode scalar values, not bytes
fn evaluate<'a>(args: Vec<PathValue<'a>>) -> PathValue<'a> {
    let Some(value) = args.into_iter().next().and_then(PathValue::into_value) else {
        return PathValue::nothing();
    };
    let length = match &*value {
        Value::String(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(members) => members.len(),
        _ => return PathValue::nothing(),
    };
    PathValue::owned(Value::from(length))
}
