//! Core error types for `JSONPath` compilation

use thiserror::Error;

/// Classification of a compilation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed token: bad escape, unterminated string, malformed number
    Lexical,
    /// Token that does not fit the grammar at its position
    Syntax,
    /// Integer or number literal outside the supported range
    OutOfRange,
    /// Function name with no registry entry
    UnknownFunction,
    /// Function arguments rejected by the function's validator
    FunctionArgument,
    /// Function result kind not usable at its position
    FunctionType,
    /// Non-logical function result used as a test expression
    MissingComparison,
    /// Nested filters, groups or function calls deeper than configured
    NestingDepth,
}

/// A single, non-recoverable query compilation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("jsonpath: {message} at position {position}")]
pub struct ParseError {
    kind: ErrorKind,
    message: String,
    position: usize,
}

impl ParseError {
    /// Create an error at a 0-based byte offset into the query text
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            position: offset + 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Message without the namespace prefix or position suffix
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based position of the offending input
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Result type for query compilation
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised while registering extension functions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("jsonpath: function {0}() is already registered")]
    DuplicateFunction(String),

    #[error("jsonpath: invalid function name {0:?}")]
    InvalidName(String),

    #[error("jsonpath: cannot register {0}() in a read-only registry")]
    ReadOnly(String),
}
