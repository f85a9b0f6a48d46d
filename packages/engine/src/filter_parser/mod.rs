//! Filter expression grammar
//!
//! ```text
//! logical-or  = logical-and *("||" logical-and)
//! logical-and = basic-expr *("&&" basic-expr)
//! basic-expr  = "!" (query / "(" logical-or ")" / function)
//!             / "(" logical-or ")"
//!             / comparable [comparison-op comparable]
//! ```
//!
//! Function result kinds are checked as calls are parsed.

mod comparisons;
mod expressions;
mod functions;
