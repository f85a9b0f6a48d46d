//! Filter selection

use serde_json::Value;

use super::wildcards::visit_children;
use crate::ast::LogicalOr;
use crate::normalized_paths::PathStep;

/// Emit the children of `node` for which `expr` holds
pub(super) fn visit_filter<'a>(
    expr: &LogicalOr,
    node: &'a Value,
    root: &'a Value,
    emit: &mut dyn FnMut(PathStep<'a>, &'a Value),
) {
    visit_children(node, &mut |step, child| {
        if expr.test(child, root) {
            emit(step, child);
        }
    });
}
