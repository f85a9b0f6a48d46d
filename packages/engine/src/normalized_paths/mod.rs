//! RFC 9535 normalized paths
//!
//! A normalized path names exactly one location in a document using only
//! member names and array indexes.

mod rendering;
mod types;

pub use types::{NormalizedPath, PathElement};
pub(crate) use types::PathStep;
