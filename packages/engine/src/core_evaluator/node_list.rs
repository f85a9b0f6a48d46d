//! Query results

use hashbrown::HashSet;
use serde_json::Value;

use crate::normalized_paths::NormalizedPath;

/// Ordered nodes produced by a query, borrowed from the queried document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeList<'a>(Vec<&'a Value>);

impl<'a> NodeList<'a> {
    #[inline]
    #[must_use]
    pub fn new(nodes: Vec<&'a Value>) -> Self {
        Self(nodes)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, &'a Value> {
        self.0.iter()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a Value> {
        self.0.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&'a Value> {
        self.0.first().copied()
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&'a Value> {
        self.0.last().copied()
    }

    /// The only node, if the list holds exactly one
    #[must_use]
    pub fn exactly_one(&self) -> Option<&'a Value> {
        match self.0.as_slice() {
            [node] => Some(*node),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<&'a Value> {
        self.0
    }

    /// Clone every node out of the document
    #[must_use]
    pub fn to_values(&self) -> Vec<Value> {
        self.0.iter().map(|&node| node.clone()).collect()
    }
}

impl<'a> IntoIterator for NodeList<'a> {
    type Item = &'a Value;
    type IntoIter = std::vec::IntoIter<&'a Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, 'l> IntoIterator for &'l NodeList<'a> {
    type Item = &'l &'a Value;
    type IntoIter = std::slice::Iter<'l, &'a Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A node together with its location
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedNode<'a> {
    pub(crate) path: NormalizedPath,
    pub(crate) node: &'a Value,
}

impl<'a> LocatedNode<'a> {
    #[inline]
    #[must_use]
    pub fn new(path: NormalizedPath, node: &'a Value) -> Self {
        Self { path, node }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn node(&self) -> &'a Value {
        self.node
    }
}

/// Located query results
///
/// Cloning copies every path, so a clone can be deduplicated or sorted
/// without touching the original.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocatedNodeList<'a>(Vec<LocatedNode<'a>>);

impl<'a> LocatedNodeList<'a> {
    #[inline]
    #[must_use]
    pub fn new(nodes: Vec<LocatedNode<'a>>) -> Self {
        Self(nodes)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, LocatedNode<'a>> {
        self.0.iter()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LocatedNode<'a>> {
        self.0.get(index)
    }

    pub fn paths(&self) -> impl Iterator<Item = &NormalizedPath> {
        self.0.iter().map(LocatedNode::path)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &'a Value> + '_ {
        self.0.iter().map(LocatedNode::node)
    }

    /// Keep the first node seen for each distinct path, preserving order
    pub fn deduplicate(&mut self) {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.retain(|located| seen.insert(located.path.clone()));
    }

    /// Stable sort by normalized path
    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| a.path.compare(&b.path));
    }

    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<LocatedNode<'a>> {
        self.0
    }
}

impl<'a> IntoIterator for LocatedNodeList<'a> {
    type Item = LocatedNode<'a>;
    type IntoIter = std::vec::IntoIter<LocatedNode<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, 'l> IntoIterator for &'l LocatedNodeList<'a> {
    type Item = &'l LocatedNode<'a>;
    type IntoIter = std::slice::Iter<'l, LocatedNode<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
