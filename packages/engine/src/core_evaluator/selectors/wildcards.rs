//! Wildcard selection

use serde_json::Value;

use crate::normalized_paths::PathStep;

/// Emit array elements in index order or object members in map order
pub(crate) fn visit_children<'a>(node: &'a Value, emit: &mut dyn FnMut(PathStep<'a>, &'a Value)) {
    match node {
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                emit(PathStep::Index(i), child);
            }
        }
        Value::Object(members) => {
            for (key, child) in members {
                emit(PathStep::Name(key), child);
            }
        }
        _ => {}
    }
}
