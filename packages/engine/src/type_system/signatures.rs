//! Function signatures and argument validation helpers

use crate::ast::FunctionExprArg;

use super::core::PathType;

/// Check the number of arguments passed to `name`
pub fn check_arity(name: &str, args: &[FunctionExprArg], expected: usize) -> Result<(), String> {
    if args.len() == expected {
        return Ok(());
    }
    let noun = if expected == 1 { "argument" } else { "arguments" };
    Err(format!(
        "function {name}() expected {expected} {noun} but found {}",
        args.len()
    ))
}

/// Check that argument `index` of `name` converts to `expected`
pub fn check_arg_type(
    name: &str,
    args: &[FunctionExprArg],
    index: usize,
    expected: PathType,
) -> Result<(), String> {
    match args.get(index) {
        Some(arg) if arg.converts_to(expected) => Ok(()),
        Some(_) => Err(format!(
            "function {name}() argument {} cannot be converted to {expected}",
            index + 1
        )),
        None => Err(format!(
            "function {name}() missing argument {}",
            index + 1
        )),
    }
}

/// Fixed parameter list and result kind of a function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub parameters: Vec<PathType>,
    pub result: PathType,
}

impl FunctionSignature {
    #[must_use]
    pub fn new(name: impl Into<String>, parameters: Vec<PathType>, result: PathType) -> Self {
        Self {
            name: name.into(),
            parameters,
            result,
        }
    }

    /// Validate arity, then each argument against its parameter kind
    pub fn validate(&self, args: &[FunctionExprArg]) -> Result<(), String> {
        check_arity(&self.name, args, self.parameters.len())?;
        self.parameters
            .iter()
            .enumerate()
            .try_for_each(|(index, kind)| check_arg_type(&self.name, args, index, *kind))
    }
}
