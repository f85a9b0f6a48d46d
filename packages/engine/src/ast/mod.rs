//! Abstract syntax tree for compiled `JSONPath` queries
//!
//! The tree is immutable once built by the parser and owns everything it
//! needs, including resolved registry functions.

mod display;
mod filter;
mod selectors;

pub use filter::{
    BasicExpr, CompOp, Comparable, Comparison, FunctionExpr, FunctionExprArg, LogicalAnd,
    LogicalOr,
};
pub use selectors::{MAX_SAFE_INTEGER, Selector, SingularQuery, SingularSelector, Slice};

/// A query: an anchor followed by segments
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub(crate) segments: Vec<Segment>,
    pub(crate) root: bool,
}

impl Query {
    /// Create a root (`$`) or current node (`@`) query
    #[inline]
    #[must_use]
    pub fn new(root: bool, segments: Vec<Segment>) -> Self {
        Self { segments, root }
    }

    /// Whether the query is anchored at the document root
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// A query is singular when every segment is a child segment with one
    /// name or index selector; it never produces more than one node
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.segments.iter().all(Segment::is_singular)
    }

    /// Convert to the singular form used by comparisons, if possible
    #[must_use]
    pub fn to_singular(&self) -> Option<SingularQuery> {
        let selectors = self
            .segments
            .iter()
            .map(|segment| match (segment.descendant, segment.selectors.as_slice()) {
                (false, [Selector::Name(name)]) => Some(SingularSelector::Name(name.clone())),
                (false, [Selector::Index(index)]) => Some(SingularSelector::Index(*index)),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;
        Some(SingularQuery::new(self.root, selectors))
    }
}

/// One step of a query: child (`[...]`) or descendant (`..[...]`)
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub(crate) selectors: Vec<Selector>,
    pub(crate) descendant: bool,
}

impl Segment {
    #[inline]
    #[must_use]
    pub fn child(selectors: Vec<Selector>) -> Self {
        Self {
            selectors,
            descendant: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn descendant(selectors: Vec<Selector>) -> Self {
        Self {
            selectors,
            descendant: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    #[inline]
    #[must_use]
    pub fn is_descendant(&self) -> bool {
        self.descendant
    }

    #[inline]
    #[must_use]
    pub fn is_singular(&self) -> bool {
        !self.descendant && matches!(self.selectors.as_slice(), [selector] if selector.is_singular())
    }
}
