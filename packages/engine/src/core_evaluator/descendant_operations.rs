//! Segment application, including descendant search
//!
//! A descendant segment applies its selectors to a node, then to each child
//! of that node recursively: depth first, parent before children, children
//! in wildcard order.

use serde_json::Value;

use crate::ast::Segment;
use crate::normalized_paths::PathStep;

impl Segment {
    /// Emit every node selected from `node`, with the steps leading to it
    pub(crate) fn visit<'a>(
        &self,
        node: &'a Value,
        root: &'a Value,
        emit: &mut dyn FnMut(&[PathStep<'a>], &'a Value),
    ) {
        if self.descendant {
            let mut trail = Vec::new();
            self.descend(node, root, &mut trail, emit);
        } else {
            for selector in &self.selectors {
                selector.visit(node, root, &mut |step, child| {
                    emit(std::slice::from_ref(&step), child);
                });
            }
        }
    }

    fn descend<'a>(
        &self,
        node: &'a Value,
        root: &'a Value,
        trail: &mut Vec<PathStep<'a>>,
        emit: &mut dyn FnMut(&[PathStep<'a>], &'a Value),
    ) {
        for selector in &self.selectors {
            selector.visit(node, root, &mut |step, child| {
                trail.push(step);
                emit(trail.as_slice(), child);
                trail.pop();
            });
        }

        match node {
            Value::Array(items) => {
                for (i, child) in items.iter().enumerate() {
                    trail.push(PathStep::Index(i));
                    self.descend(child, root, trail, emit);
                    trail.pop();
                }
            }
            Value::Object(members) => {
                for (key, child) in members {
                    trail.push(PathStep::Name(key));
                    self.descend(child, root, trail, emit);
                    trail.pop();
                }
            }
            _ => {}
        }
    }
}
