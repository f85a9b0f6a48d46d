//! Filter expression nodes
//!
//! Precedence is encoded structurally: a filter is a disjunction of
//! conjunctions of basic expressions.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::{Query, SingularQuery};
use crate::functions::Function;
use crate::type_system::{FuncType, PathType};

/// `a || b || ...`
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalOr(pub Vec<LogicalAnd>);

/// `a && b && ...`
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalAnd(pub Vec<BasicExpr>);

/// Operand of `&&` and `||`
#[derive(Debug, Clone, PartialEq)]
pub enum BasicExpr {
    /// Query yields at least one node
    Exists(Query),
    /// Query yields no nodes
    NotExists(Query),
    Paren(LogicalOr),
    NotParen(LogicalOr),
    Comparison(Comparison),
    /// Function with a logical or nodes result used as a test
    FunctionCall(FunctionExpr),
    NotFunctionCall(FunctionExpr),
}

/// `left op right`
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left: Comparable,
    pub op: CompOp,
    pub right: Comparable,
}

impl Comparison {
    #[inline]
    #[must_use]
    pub fn new(left: Comparable, op: CompOp, right: Comparable) -> Self {
        Self { left, op, right }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CompOp {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
        }
    }
}

/// Operand of a comparison; always produces a single value or nothing
#[derive(Debug, Clone, PartialEq)]
pub enum Comparable {
    Literal(Value),
    SingularQuery(SingularQuery),
    /// Function whose declared result is a value
    Function(FunctionExpr),
}

/// A resolved call to a registered function
#[derive(Clone)]
pub struct FunctionExpr {
    pub(crate) function: Arc<Function>,
    pub(crate) args: Vec<FunctionExprArg>,
}

impl FunctionExpr {
    #[inline]
    #[must_use]
    pub fn new(function: Arc<Function>, args: Vec<FunctionExprArg>) -> Self {
        Self { function, args }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        self.function.name()
    }

    #[inline]
    #[must_use]
    pub fn args(&self) -> &[FunctionExprArg] {
        &self.args
    }

    #[inline]
    #[must_use]
    pub fn result_type(&self) -> PathType {
        self.function.result_type()
    }
}

impl fmt::Debug for FunctionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionExpr")
            .field("name", &self.name())
            .field("result", &self.result_type())
            .field("args", &self.args)
            .finish()
    }
}

// Functions are identified by name within a registry.
impl PartialEq for FunctionExpr {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.args == other.args
    }
}

/// Argument of a function call, kept in its syntactic form for validation
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionExprArg {
    Literal(Value),
    SingularQuery(SingularQuery),
    /// Query that may produce any number of nodes
    FilterQuery(Query),
    Logical(LogicalOr),
    Function(FunctionExpr),
}

impl FunctionExprArg {
    /// Declared kind of the argument expression
    #[must_use]
    pub fn result_type(&self) -> FuncType {
        match self {
            Self::Literal(_) => FuncType::Literal,
            Self::SingularQuery(_) => FuncType::SingularQuery,
            Self::FilterQuery(_) => FuncType::Nodes,
            Self::Logical(_) => FuncType::Logical,
            Self::Function(function) => function.result_type().into(),
        }
    }

    /// Whether the argument can be passed for a parameter of `target` type
    #[inline]
    #[must_use]
    pub fn converts_to(&self, target: PathType) -> bool {
        self.result_type().converts_to(target)
    }
}
