//! RFC 9535 JSONPath compliance tests
//!
//! Each module covers one area of the standard, exercised through the public
//! `rfcpath` API.

mod support;

// Syntax and selectors
mod array_slice_selectors;
mod string_literals;

mod segment_traversal;

// Functions and errors
mod error_handling;
mod function_extensions;
