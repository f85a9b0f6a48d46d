//! Canonical string rendering
//!
//! Rendering is stable: parsing the rendered form of a query and rendering it
//! again produces the same text. Names are written as JSON strings and every
//! segment in bracket form.

use std::fmt::{self, Display, Formatter, Write};

use super::filter::{
    BasicExpr, Comparable, Comparison, FunctionExpr, FunctionExprArg, LogicalAnd, LogicalOr,
};
use super::selectors::{Selector, SingularQuery, SingularSelector, Slice};
use super::{Query, Segment};

fn write_name(f: &mut Formatter<'_>, name: &str) -> fmt::Result {
    let quoted = serde_json::to_string(name).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}

fn write_joined<T: Display>(f: &mut Formatter<'_>, items: &[T], separator: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_anchor(f: &mut Formatter<'_>, root: bool) -> fmt::Result {
    f.write_char(if root { '$' } else { '@' })
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_anchor(f, self.root)?;
        self.segments.iter().try_for_each(|segment| write!(f, "{segment}"))
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.descendant {
            f.write_str("..")?;
        }
        f.write_char('[')?;
        write_joined(f, &self.selectors, ",")?;
        f.write_char(']')
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write_name(f, name),
            Self::Index(index) => write!(f, "{index}"),
            Self::Slice(slice) => write!(f, "{slice}"),
            Self::Wildcard => f.write_char('*'),
            Self::Filter(expr) => write!(f, "?{expr}"),
        }
    }
}

impl Display for Slice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        f.write_char(':')?;
        if let Some(end) = self.end {
            write!(f, "{end}")?;
        }
        if let Some(step) = self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}

impl Display for SingularQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_anchor(f, self.root)?;
        for selector in &self.selectors {
            match selector {
                SingularSelector::Name(name) => {
                    f.write_char('[')?;
                    write_name(f, name)?;
                    f.write_char(']')?;
                }
                SingularSelector::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Display for LogicalOr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0, " || ")
    }
}

impl Display for LogicalAnd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0, " && ")
    }
}

impl Display for BasicExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exists(query) => write!(f, "{query}"),
            Self::NotExists(query) => write!(f, "!{query}"),
            Self::Paren(expr) => write!(f, "({expr})"),
            Self::NotParen(expr) => write!(f, "!({expr})"),
            Self::Comparison(comparison) => write!(f, "{comparison}"),
            Self::FunctionCall(function) => write!(f, "{function}"),
            Self::NotFunctionCall(function) => write!(f, "!{function}"),
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op.as_str(), self.right)
    }
}

impl Display for Comparable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::SingularQuery(query) => write!(f, "{query}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}

impl Display for FunctionExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        write_joined(f, &self.args, ",")?;
        f.write_char(')')
    }
}

impl Display for FunctionExprArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::SingularQuery(query) => write!(f, "{query}"),
            Self::FilterQuery(query) => write!(f, "{query}"),
            Self::Logical(expr) => write!(f, "{expr}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}
