//! Query evaluation over a working set
//!
//! The working set starts as the anchor node. Each segment replaces it with
//! the concatenation of its selections from every member, in member order.

use serde_json::Value;

use super::node_list::{LocatedNode, LocatedNodeList, NodeList};
use crate::ast::Query;
use crate::normalized_paths::NormalizedPath;

impl Query {
    /// Evaluate against a document
    ///
    /// Relative queries are evaluated with the root as current node.
    #[must_use]
    pub fn select<'a>(&self, root: &'a Value) -> NodeList<'a> {
        self.select_from(root, root)
    }

    /// Evaluate against a document, recording the location of every node
    #[must_use]
    pub fn select_located<'a>(&self, root: &'a Value) -> LocatedNodeList<'a> {
        self.select_located_from(root, root)
    }

    /// Evaluate with explicit current and root nodes
    #[must_use]
    pub fn select_from<'a>(&self, current: &'a Value, root: &'a Value) -> NodeList<'a> {
        let mut nodes = vec![self.anchor(current, root)];
        for segment in &self.segments {
            let mut next = Vec::new();
            for &node in &nodes {
                segment.visit(node, root, &mut |_, child| next.push(child));
            }
            nodes = next;
        }
        NodeList::new(nodes)
    }

    /// Located variant of [`Query::select_from`]
    ///
    /// Paths are relative to the anchor node.
    #[must_use]
    pub fn select_located_from<'a>(
        &self,
        current: &'a Value,
        root: &'a Value,
    ) -> LocatedNodeList<'a> {
        let mut nodes = vec![LocatedNode::new(
            NormalizedPath::root(),
            self.anchor(current, root),
        )];
        for segment in &self.segments {
            let mut next = Vec::new();
            for located in &nodes {
                segment.visit(located.node, root, &mut |steps, child| {
                    next.push(LocatedNode::new(located.path.extended(steps), child));
                });
            }
            nodes = next;
        }
        LocatedNodeList::new(nodes)
    }

    /// Whether the query selects at least one node
    pub(crate) fn matches_any(&self, current: &Value, root: &Value) -> bool {
        !self.select_from(current, root).is_empty()
    }

    #[inline]
    fn anchor<'a>(&self, current: &'a Value, root: &'a Value) -> &'a Value {
        if self.root { root } else { current }
    }
}
