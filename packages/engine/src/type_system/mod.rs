//! RFC 9535 function expression type system
//!
//! Static kinds checked while parsing, runtime values exchanged with
//! registered functions, and the signature validation shared by the
//! standard library.

mod conversions;
mod core;
mod signatures;

pub use self::core::{FuncType, PathType, PathValue};
pub use self::signatures::{FunctionSignature, check_arg_type, check_arity};
