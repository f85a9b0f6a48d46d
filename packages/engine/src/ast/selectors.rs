//! Selector nodes

use super::filter::LogicalOr;

/// Largest magnitude accepted for indexes, slice bounds and integer literals
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// A rule picking zero or more children of one node
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Object member with exactly this key
    Name(String),
    /// Array element, negative values count from the end
    Index(i64),
    /// Array slice
    Slice(Slice),
    /// All children
    Wildcard,
    /// Children for which the expression holds
    Filter(LogicalOr),
}

impl Selector {
    /// Name and index selectors select at most one node
    #[inline]
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Name(_) | Self::Index(_))
    }
}

/// `start:end:step` with every component optional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slice {
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub step: Option<i64>,
}

impl Slice {
    #[inline]
    #[must_use]
    pub fn new(start: Option<i64>, end: Option<i64>, step: Option<i64>) -> Self {
        Self { start, end, step }
    }
}

/// A query restricted to name and index child segments
#[derive(Debug, Clone, PartialEq)]
pub struct SingularQuery {
    pub(crate) selectors: Vec<SingularSelector>,
    pub(crate) root: bool,
}

impl SingularQuery {
    #[inline]
    #[must_use]
    pub fn new(root: bool, selectors: Vec<SingularSelector>) -> Self {
        Self { selectors, root }
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn selectors(&self) -> &[SingularSelector] {
        &self.selectors
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingularSelector {
    Name(String),
    Index(i64),
}
