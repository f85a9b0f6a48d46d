//! `value(nodes)`: the only node of a node list

use crate::functions::Function;
use crate::type_system::{FunctionSignature, PathType, PathValue};

pub(super) fn function() -> Function {
    Function::with_signature(
        FunctionSignature::new("value", vec![PathType::Nodes], PathType::Value),
        evaluate,
    )
}

fn evaluate<'a>(args: Vec<PathValue<'a>>) -> PathValue<'a> {
    let nodes = args
        .into_iter()
        .next()
        .map(PathValue::into_nodes)
        .unwrap_or_default();
    match nodes.as_slice() {
        [node] => PathValue::borrowed(*node),
        _ => PathValue::nothing(),
    }
}
