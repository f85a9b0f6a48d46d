//! `match(string, pattern)` and `search(string, pattern)`
//!
//! Both are false unless both arguments are strings and the pattern is a
//! valid I-Regexp.

use serde_json::Value;

use crate::functions::iregexp;
use crate::functions::regex_cache::REGEX_CACHE;
use crate::functions::Function;
use crate::type_system::{FunctionSignature, PathType, PathValue};

fn signature(name: &str) -> FunctionSignature {
    FunctionSignature::new(
        name,
        vec![PathType::Value, PathType::Value],
        PathType::Logical,
    )
}

pub(super) fn match_function() -> Function {
    Function::with_signature(signature("match"), evaluate_match)
}

pub(super) fn search_function() -> Function {
    Function::with_signature(signature("search"), evaluate_search)
}

fn evaluate_match<'a>(args: Vec<PathValue<'a>>) -> PathValue<'a> {
    PathValue::Logical(regex_test(args, true))
}

fn evaluate_search<'a>(args: Vec<PathValue<'a>>) -> PathValue<'a> {
    PathValue::Logical(regex_test(args, false))
}

fn regex_test(args: Vec<PathValue<'_>>, anchored: bool) -> bool {
    let mut args = args.into_iter().map(PathValue::into_value);
    let (Some(Some(input)), Some(Some(pattern))) = (args.next(), args.next()) else {
        return false;
    };
    let (Value::String(input), Value::String(pattern)) = (&*input, &*pattern) else {
        return false;
    };

    match REGEX_CACHE.get_or_compile(&iregexp::translate(pattern, anchored)) {
        Ok(regex) => regex.is_match(input),
        Err(err) => {
            log::debug!("invalid I-Regexp {pattern:?}: {err}");
            false
        }
    }
}
