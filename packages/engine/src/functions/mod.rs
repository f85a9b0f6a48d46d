//! Function extensions: the registry consulted by the parser and the
//! standard function library

pub mod function_evaluator;
pub mod iregexp;
pub mod regex_cache;
mod registry;

pub use registry::{Evaluator, Function, FunctionRegistry, Validator};
