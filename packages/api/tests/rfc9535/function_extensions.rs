//! Function extensions (RFC 9535 section 2.4)

use std::sync::Arc;

use rfcpath::{
    ErrorKind, Function, FunctionRegistry, FunctionSignature, JsonPath, Parser, PathType,
    PathValue, RegistryError,
};
use serde_json::json;

use crate::support::{assert_invalid, assert_valid, select};

#[test]
fn test_length() {
    let doc = json!(["abc", "ü日本", [1, 2, 3], {"a": 1, "b": 2, "c": 3}, 3, null, true]);
    assert_eq!(
        select("$[?length(@) == 3]", &doc),
        vec![
            json!("abc"),
            json!("ü日本"),
            json!([1, 2, 3]),
            json!({"a": 1, "b": 2, "c": 3})
        ]
    );
    // Numbers, booleans and null have no length
    assert!(select("$[?length(@) == 0]", &json!([1, true, null])).is_empty());
}

#[test]
fn test_length_of_missing_member() {
    let doc = json!([{"a": "xy"}, {"b": "xy"}]);
    assert_eq!(select("$[?length(@.a) == 2]", &doc), vec![json!({"a": "xy"})]);
}

#[test]
fn test_count() {
    let doc = json!([{"a": 1, "b": 2}, {"a": 1}, [1, 2], []]);
    assert_eq!(
        select("$[?count(@.*) == 2]", &doc),
        vec![json!({"a": 1, "b": 2}), json!([1, 2])]
    );
    assert_eq!(select("$[?count(@..*) == 0]", &doc), vec![json!([])]);
}

#[test]
fn test_value() {
    let doc = json!([
        {"color": "red"},
        {"a": {"color": "red"}, "b": {"color": "red"}},
        {"color": "blue"}
    ]);
    assert_eq!(
        select("$[?value(@..color) == 'red']", &doc),
        vec![json!({"color": "red"})]
    );
}

#[test]
fn test_match_is_anchored() {
    let doc = json!(["1974-05-01", "1974-05-011", "x1974-05-01", 1974]);
    assert_eq!(
        select(r"$[?match(@, '1974-05-\\d\\d')]", &doc),
        vec![json!("1974-05-01")]
    );
}

#[test]
fn test_search_finds_substrings() {
    let doc = json!(["Bob", "Robert", "Alice", 7]);
    assert_eq!(
        select("$[?search(@, '[BR]ob')]", &doc),
        vec![json!("Bob"), json!("Robert")]
    );
}

#[test]
fn test_regex_dot_excludes_line_breaks() {
    let doc = json!(["a\nc", "a\rc", "abc", "a\u{1F600}c"]);
    assert_eq!(
        select("$[?match(@, 'a.c')]", &doc),
        vec![json!("abc"), json!("a\u{1F600}c")]
    );
}

#[test]
fn test_regex_from_document() {
    let doc = json!({"pattern": "^b", "values": ["ab", "ba", "a^b"]});
    // Anchors are ordinary characters in I-Regexp
    assert_eq!(
        select("$.values[?search(@, $.pattern)]", &doc),
        vec![json!("a^b")]
    );
}

#[test]
fn test_invalid_pattern_never_matches() {
    let doc = json!(["a", "("]);
    assert!(select("$[?match(@, '(')]", &doc).is_empty());
    assert!(select("$[?search(@, '[')]", &doc).is_empty());
    assert_eq!(select("$[?!search(@, '(')]", &doc).len(), 2);
}

#[test]
fn test_function_composition() {
    let doc = json!([{"a": ["x", "y"]}, {"a": "xyz"}, {"a": ["x"]}]);
    assert_eq!(
        select("$[?length(value(@.a)) == 3]", &doc),
        vec![json!({"a": "xyz"})]
    );
}

#[test]
fn test_well_typedness() {
    assert_valid(&[
        "$[?length(@) < 3]",
        "$[?count(@.*) == 1]",
        "$[?match(@.timezone, 'Europe/.*')]",
        "$[?!match(@.timezone, 'Europe/.*')]",
        "$[?value(@..color) == \"red\"]",
        "$[?length(@.a) == length($.b)]",
        "$[?count(@[?@.a]) > 0]",
    ]);
    assert_invalid(&[
        "$[?length(@.*) < 3]",
        "$[?count(1) == 1]",
        "$[?count(foo(@.*)) == 1]",
        "$[?match(@.timezone, 'Europe/.*') == true]",
        "$[?value(@..color)]",
        "$[?bar(@.a)]",
        "$[?length(@)]",
        "$[?!length(@)]",
        "$[?length()]",
        "$[?length(@, @) == 1]",
        "$[?match(@.a) == 1]",
        "$[?length (@) == 1]",
        "$[?Length(@) == 1]",
    ]);
}

#[test]
fn test_error_kinds() {
    let kind = |query: &str| {
        JsonPath::parse(query)
            .expect_err("query should be rejected")
            .kind()
    };
    assert_eq!(kind("$[?nope(@) == 1]"), ErrorKind::UnknownFunction);
    assert_eq!(kind("$[?count(1) == 1]"), ErrorKind::FunctionArgument);
    assert_eq!(kind("$[?length(@)]"), ErrorKind::MissingComparison);
    assert_eq!(kind("$[?match(@, 'a') == true]"), ErrorKind::FunctionType);
}

fn negate(args: Vec<PathValue<'_>>) -> PathValue<'_> {
    PathValue::Logical(!args.into_iter().next().is_some_and(PathValue::into_logical))
}

fn first(args: Vec<PathValue<'_>>) -> PathValue<'_> {
    args.into_iter()
        .next()
        .and_then(|arg| arg.into_nodes().into_iter().next())
        .map_or_else(PathValue::nothing, PathValue::borrowed)
}

fn custom_parser() -> Parser {
    let registry = FunctionRegistry::standard();
    registry
        .register(Function::with_signature(
            FunctionSignature::new("not", vec![PathType::Logical], PathType::Logical),
            negate,
        ))
        .expect("name is free");
    registry
        .register(Function::with_signature(
            FunctionSignature::new("first", vec![PathType::Nodes], PathType::Value),
            first,
        ))
        .expect("name is free");
    Parser::new(Arc::new(registry))
}

#[test]
fn test_custom_logical_function() {
    let parser = custom_parser();
    let doc = json!([{"a": 1}, {"a": 2}, {"b": 3}]);

    let path = JsonPath::parse_with(&parser, "$[?not(@.a == 1)]").expect("valid query");
    assert_eq!(path.select(&doc).to_values(), vec![json!({"a": 2}), json!({"b": 3})]);

    let path = JsonPath::parse_with(&parser, "$[?not(@.a)]").expect("valid query");
    assert_eq!(path.select(&doc).to_values(), vec![json!({"b": 3})]);
}

#[test]
fn test_custom_value_function() {
    let parser = custom_parser();
    let doc = json!([[3, 1], [1, 3], []]);
    let path = JsonPath::parse_with(&parser, "$[?first(@.*) == 1]").expect("valid query");
    assert_eq!(path.select(&doc).to_values(), vec![json!([1, 3])]);
    assert_eq!(path.to_string(), "$[?first(@[*]) == 1]");
}

#[test]
fn test_custom_functions_are_scoped_to_their_registry() {
    assert!(JsonPath::parse("$[?not(@.a)]").is_err());
    assert!(JsonPath::parse_with(&custom_parser(), "$[?not(@.a)]").is_ok());
}

#[test]
fn test_registry_rejects_duplicates_and_bad_names() {
    let registry = FunctionRegistry::standard();
    let duplicate = registry.register(Function::with_signature(
        FunctionSignature::new("length", vec![PathType::Value], PathType::Value),
        first,
    ));
    assert!(matches!(duplicate, Err(RegistryError::DuplicateFunction(name)) if name == "length"));

    let invalid = registry.register(Function::with_signature(
        FunctionSignature::new("Upper", vec![PathType::Value], PathType::Value),
        first,
    ));
    assert!(matches!(invalid, Err(RegistryError::InvalidName(_))));
    assert_eq!(registry.len(), 5);
}

fn always_true<'a>(_args: Vec<PathValue<'a>>) -> PathValue<'a> {
    PathValue::Logical(true)
}

#[test]
fn test_user_registry_never_changes_default_parsing() {
    let query = "$[?sneaky()]";
    assert!(rfcpath::parse(query).is_err());

    let registry = Arc::new(FunctionRegistry::standard());
    registry
        .register(Function::new("sneaky", PathType::Logical, |_| Ok(()), always_true))
        .expect("name is free");
    let parser = Parser::new(Arc::clone(&registry));
    assert!(JsonPath::parse_with(&parser, query).is_ok());

    assert!(rfcpath::parse(query).is_err());
    assert!(JsonPath::parse(query).is_err());
    assert!(query.parse::<JsonPath>().is_err());
}

#[test]
fn test_default_parser_registry_is_read_only() {
    let parser = Parser::default();
    let result = parser
        .registry()
        .register(Function::new("sneaky", PathType::Logical, |_| Ok(()), always_true));
    assert!(matches!(result, Err(RegistryError::ReadOnly(name)) if name == "sneaky"));
    assert!(Parser::default().parse("$[?sneaky()]").is_err());
    assert!(rfcpath::parse("$[?sneaky()]").is_err());
}
