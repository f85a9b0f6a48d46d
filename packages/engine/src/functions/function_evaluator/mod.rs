//! Standard function library (RFC 9535 section 2.4)

mod count;
mod length;
mod regex_functions;
mod value;

use super::Function;

/// The five functions every registry starts with
#[must_use]
pub fn standard_functions() -> Vec<Function> {
    vec![
        length::function(),
        count::function(),
        value::function(),
        regex_functions::match_function(),
        regex_functions::search_function(),
    ]
}
