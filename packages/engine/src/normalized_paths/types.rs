//! Core types for normalized paths

use std::cmp::Ordering;

/// One concrete step of a normalized path
///
/// Variant order is significant: indexes sort before names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathElement {
    Index(usize),
    Name(String),
}

impl From<&str> for PathElement {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PathElement {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for PathElement {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Location of a single node, relative to the document root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath(Vec<PathElement>);

impl NormalizedPath {
    /// The root path `$`
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[PathElement] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the root path
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total order: element by element, indexes before names, a prefix before
    /// any longer path
    #[inline]
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Path extended by steps borrowed from the document
    pub(crate) fn extended(&self, steps: &[PathStep<'_>]) -> Self {
        self.0
            .iter()
            .cloned()
            .chain(steps.iter().map(|step| step.to_element()))
            .collect()
    }
}

impl From<Vec<PathElement>> for NormalizedPath {
    fn from(elements: Vec<PathElement>) -> Self {
        Self(elements)
    }
}

impl FromIterator<PathElement> for NormalizedPath {
    fn from_iter<I: IntoIterator<Item = PathElement>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Borrowed step produced while walking a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathStep<'a> {
    Name(&'a str),
    Index(usize),
}

impl PathStep<'_> {
    pub(crate) fn to_element(self) -> PathElement {
        match self {
            Self::Name(name) => PathElement::Name(name.to_string()),
            Self::Index(index) => PathElement::Index(index),
        }
    }
}
