//! Query evaluation
//!
//! Segments map over a working set of nodes; selectors emit each matched
//! child together with the concrete step that reached it, so one traversal
//! serves both plain and located results.

mod descendant_operations;
mod engine;
mod node_list;
mod selectors;

pub use node_list::{LocatedNode, LocatedNodeList, NodeList};
