//! Filter expression evaluation

mod comparisons;
mod core;

pub use comparisons::{equal_to, less_than};
