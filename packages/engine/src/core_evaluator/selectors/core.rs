//! Dispatch from a selector to its implementation

use serde_json::Value;

use super::{arrays, filters, wildcards};
use crate::ast::{Selector, SingularQuery, SingularSelector};
use crate::normalized_paths::PathStep;

impl Selector {
    /// Emit each child of `node` picked by this selector, in selection order
    pub(crate) fn visit<'a>(
        &self,
        node: &'a Value,
        root: &'a Value,
        emit: &mut dyn FnMut(PathStep<'a>, &'a Value),
    ) {
        match self {
            Self::Name(name) => {
                if let Some((key, child)) = node.as_object().and_then(|map| map.get_key_value(name))
                {
                    emit(PathStep::Name(key), child);
                }
            }
            Self::Index(index) => arrays::visit_index(*index, node, emit),
            Self::Slice(slice) => arrays::visit_slice(slice, node, emit),
            Self::Wildcard => wildcards::visit_children(node, emit),
            Self::Filter(expr) => filters::visit_filter(expr, node, root, emit),
        }
    }
}

impl SingularQuery {
    /// The single node addressed by this query, if present
    pub(crate) fn locate<'a>(&self, current: &'a Value, root: &'a Value) -> Option<&'a Value> {
        let anchor = if self.root { root } else { current };
        self.selectors
            .iter()
            .try_fold(anchor, |node, selector| match selector {
                SingularSelector::Name(name) => node.as_object()?.get(name),
                SingularSelector::Index(index) => {
                    let items = node.as_array()?;
                    items.get(arrays::resolve_index(*index, items.len())?)
                }
            })
    }
}
