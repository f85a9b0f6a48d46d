//! Rejection of invalid queries and the shape of error messages

use std::sync::Arc;

use rfcpath::{ErrorKind, FunctionRegistry, JsonPath, Parser, ParserConfig};

use crate::support::{assert_invalid, error_message};

#[test]
fn test_message_format() {
    assert_eq!(error_message("$.62"), "jsonpath: unexpected integer at position 3");
    assert_eq!(error_message("$[010]"), "jsonpath: invalid number literal at position 3");
    assert_eq!(error_message("$[?@.a = 1]"), "jsonpath: unexpected '=' at position 8");
}

#[test]
fn test_error_accessors() {
    let err = JsonPath::parse("$.a[?nope(@) == 1]").expect_err("unknown function");
    assert_eq!(err.kind(), ErrorKind::UnknownFunction);
    assert_eq!(err.message(), "unknown function nope()");
    assert_eq!(err.position(), 6);
}

#[test]
fn test_missing_root() {
    assert_eq!(error_message(""), "jsonpath: unexpected end of input at position 1");
    assert_eq!(error_message("@.a"), "jsonpath: unexpected '@' at position 1");
    assert_eq!(error_message("a"), "jsonpath: unexpected identifier at position 1");
}

#[test]
fn test_trailing_input() {
    assert_eq!(error_message("$$"), "jsonpath: unexpected '$' at position 2");
    assert_eq!(error_message("$.a]"), "jsonpath: unexpected ']' at position 4");
    assert_eq!(error_message("$ "), "jsonpath: unexpected blank space at position 2");
}

#[test]
fn test_lexical_errors() {
    assert_eq!(
        error_message("$['abc"),
        "jsonpath: unterminated string literal at position 3"
    );
    assert_eq!(
        error_message(r"$['\q']"),
        "jsonpath: invalid escape sequence at position 4"
    );
    assert_eq!(
        error_message("$['a\u{1}']"),
        "jsonpath: invalid control character in string literal at position 5"
    );
    assert_eq!(error_message("$[-]"), "jsonpath: invalid number literal at position 3");
    assert_eq!(error_message("$[1e]"), "jsonpath: invalid number literal at position 3");
}

#[test]
fn test_out_of_range_integers() {
    let err = JsonPath::parse("$[9007199254740992]").expect_err("out of range");
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(
        err.to_string(),
        "jsonpath: cannot parse \"9007199254740992\", value out of range at position 3"
    );
    assert_invalid(&["$[-9007199254740992]", "$[0:9007199254740992]", "$[?@ == 9007199254740992]"]);
}

#[test]
fn test_function_errors() {
    assert_eq!(
        error_message("$[?length(@)]"),
        "jsonpath: missing comparison to function result at position 4"
    );
    assert_eq!(
        error_message("$[?length(@, 1) == 1]"),
        "jsonpath: function length() expected 1 argument but found 2 at position 4"
    );
    assert_eq!(
        error_message("$[?count(@.a) == 1 && match(1, 'a') == true]"),
        "jsonpath: function match() result is not comparable at position 23"
    );
}

#[test]
fn test_comparison_errors() {
    assert_eq!(
        error_message("$[?@.* == 1]"),
        "jsonpath: non-singular query is not comparable at position 4"
    );
    assert_invalid(&["$[?@ == ]", "$[?@ <> 1]", "$[?@ => 1]", "$[?== 1]"]);
}

#[test]
fn test_unbalanced_brackets() {
    assert_invalid(&["$[", "$[0", "$]", "$[0]]", "$[?(@.a]", "$[?(@.a))]"]);
}

#[test]
fn test_nesting_depth_limit() {
    let deep = format!("$[?{}@{}]", "(".repeat(150), ")".repeat(150));
    let err = JsonPath::parse(&deep).expect_err("too deep");
    assert_eq!(err.kind(), ErrorKind::NestingDepth);

    let config = ParserConfig::default().with_max_nesting_depth(160);
    let parser = Parser::with_config(Arc::new(FunctionRegistry::standard()), config)
        .expect("valid config");
    assert!(JsonPath::parse_with(&parser, &deep).is_ok());
}

#[test]
fn test_errors_do_not_panic_on_arbitrary_input() {
    let inputs = [
        "$[?@.a == 'x' &&]",
        "$..",
        "$...a",
        "$[?@[?@[?@]]]]",
        "$[\u{0}]",
        "$['\u{10FFFF}'",
        "$.a\\",
        "$[?length(@.a",
        "$[?@.a == -]",
        "$[?@ == 1.]",
        "$[?@ == .5]",
        "$[?@ == 01]",
    ];
    for input in inputs {
        assert!(JsonPath::parse(input).is_err(), "'{input}' should be rejected");
    }
}
