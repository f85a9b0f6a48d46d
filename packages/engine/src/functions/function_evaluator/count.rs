//! `count(nodes)`: number of nodes in a node list

use serde_json::Value;

use crate::functions::Function;
use crate::type_system::{FunctionSignature, PathType, PathValue};

pub(super) fn function() -> Function {
    Function::with_signature(
        FunctionSignature::new("count", vec![PathType::Nodes], PathType::Value),
        evaluate,
    )
}

fn evaluate<'a>(args: Vec<PathValue<'a>>) -> PathValue<'a> {
    let count = args
        .into_iter()
        .next()
        .map_or(0, |arg| arg.into_nodes().len());
    PathValue::owned(Value::from(count))
}
