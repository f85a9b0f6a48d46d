//! Name-keyed function registry
//!
//! Parsers look functions up concurrently while registration takes an
//! exclusive write lock. Compiled queries hold their own `Arc` to every
//! function they call, so later registrations never affect them.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use hashbrown::HashMap;
use once_cell::sync::Lazy;

use super::function_evaluator;
use crate::ast::FunctionExprArg;
use crate::error::RegistryError;
use crate::type_system::{FunctionSignature, PathType, PathValue};

/// Parse-time argument check returning a message on failure
pub type Validator = dyn Fn(&[FunctionExprArg]) -> Result<(), String> + Send + Sync;

/// Evaluation of a call with arguments in their natural kinds
pub type Evaluator = dyn for<'a> Fn(Vec<PathValue<'a>>) -> PathValue<'a> + Send + Sync;

/// A function extension
pub struct Function {
    name: String,
    result: PathType,
    validator: Box<Validator>,
    evaluator: Box<Evaluator>,
}

impl Function {
    pub fn new<V, E>(name: impl Into<String>, result: PathType, validator: V, evaluator: E) -> Self
    where
        V: Fn(&[FunctionExprArg]) -> Result<(), String> + Send + Sync + 'static,
        E: for<'a> Fn(Vec<PathValue<'a>>) -> PathValue<'a> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            result,
            validator: Box::new(validator),
            evaluator: Box::new(evaluator),
        }
    }

    /// Build a function whose validator checks a fixed signature
    pub fn with_signature<E>(signature: FunctionSignature, evaluator: E) -> Self
    where
        E: for<'a> Fn(Vec<PathValue<'a>>) -> PathValue<'a> + Send + Sync + 'static,
    {
        let name = signature.name.clone();
        let result = signature.result;
        Self::new(name, result, move |args| signature.validate(args), evaluator)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn result_type(&self) -> PathType {
        self.result
    }

    /// Run the validator against parsed arguments
    pub fn validate(&self, args: &[FunctionExprArg]) -> Result<(), String> {
        (self.validator)(args)
    }

    /// Evaluate the function
    ///
    /// # Panics
    ///
    /// Panics when the evaluator returns a kind other than the declared one.
    #[must_use]
    pub fn evaluate<'a>(&self, args: Vec<PathValue<'a>>) -> PathValue<'a> {
        let result = (self.evaluator)(args);
        assert!(
            result.path_type() == self.result,
            "jsonpath: function {}() declared {} result but returned {}",
            self.name,
            self.result,
            result.path_type()
        );
        result
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

/// Whether `name` matches the function name grammar `[a-z][a-z0-9_]*`
fn is_function_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

static SHARED_STANDARD: Lazy<Arc<FunctionRegistry>> =
    Lazy::new(|| Arc::new(FunctionRegistry::standard().into_read_only()));

/// Thread-safe table of function extensions
#[derive(Default)]
pub struct FunctionRegistry {
    functions: RwLock<HashMap<String, Arc<Function>>>,
    read_only: bool,
}

impl FunctionRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `length`, `count`, `value`, `match` and
    /// `search`
    #[must_use]
    pub fn standard() -> Self {
        let functions = function_evaluator::standard_functions()
            .into_iter()
            .map(|function| (function.name.clone(), Arc::new(function)))
            .collect();
        Self {
            functions: RwLock::new(functions),
            read_only: false,
        }
    }

    /// Read-only standard registry behind `Parser::default()`
    pub(crate) fn shared_standard() -> Arc<Self> {
        Arc::clone(&SHARED_STANDARD)
    }

    /// Seal the registry; later calls to [`FunctionRegistry::register`] fail
    #[must_use]
    pub fn into_read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Add a function; names must be unique and match `[a-z][a-z0-9_]*`
    pub fn register(&self, function: Function) -> Result<(), RegistryError> {
        if self.read_only {
            return Err(RegistryError::ReadOnly(function.name));
        }
        if !is_function_name(&function.name) {
            return Err(RegistryError::InvalidName(function.name));
        }

        let mut functions = self.functions.write().unwrap_or_else(PoisonError::into_inner);
        if functions.contains_key(&function.name) {
            return Err(RegistryError::DuplicateFunction(function.name));
        }

        tracing::debug!(
            target: "rfcpath::registry",
            function = %function.name,
            result = %function.result,
            "registered function"
        );
        functions.insert(function.name.clone(), Arc::new(function));
        Ok(())
    }

    /// Find a function by name
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Arc<Function>> {
        let functions = self.functions.read().unwrap_or_else(PoisonError::into_inner);
        let found = functions.get(name).cloned();
        tracing::trace!(target: "rfcpath::registry", function = name, found = found.is_some(), "function lookup");
        found
    }

    /// Registered names in sorted order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let functions = self.functions.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = functions.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .field("read_only", &self.read_only)
            .finish()
    }
}
