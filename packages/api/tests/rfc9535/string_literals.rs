//! String literals in name selectors and filters (RFC 9535 section 2.3.1.1)

use serde_json::json;

use crate::support::{assert_invalid, assert_valid, select};

#[test]
fn test_quote_styles() {
    let doc = json!({"a'b": 1, "a\"b": 2});
    assert_eq!(select(r#"$["a'b"]"#, &doc), vec![json!(1)]);
    assert_eq!(select(r"$['a\'b']", &doc), vec![json!(1)]);
    assert_eq!(select(r#"$['a"b']"#, &doc), vec![json!(2)]);
    assert_eq!(select(r#"$["a\"b"]"#, &doc), vec![json!(2)]);
}

#[test]
fn test_short_escapes() {
    let doc = json!({"\u{8}\u{c}\n\r\t/\\": 1});
    assert_eq!(select(r"$['\b\f\n\r\t\/\\']", &doc), vec![json!(1)]);
}

#[test]
fn test_unicode_escapes() {
    let doc = json!({"é": 1, "\u{1D11E}": 2, "☺": 3});
    assert_eq!(select(r"$['\u00e9']", &doc), vec![json!(1)]);
    assert_eq!(select(r"$['\u00E9']", &doc), vec![json!(1)]);
    assert_eq!(select(r"$['\uD834\uDD1E']", &doc), vec![json!(2)]);
    assert_eq!(select("$['☺']", &doc), vec![json!(3)]);
}

#[test]
fn test_literal_strings_in_filters() {
    let doc = json!(["a\nb", "a\\nb"]);
    assert_eq!(select(r"$[?@ == 'a\nb']", &doc), vec![json!("a\nb")]);
    assert_eq!(select(r"$[?@ == 'a\\nb']", &doc), vec![json!("a\\nb")]);
}

#[test]
fn test_empty_name() {
    let doc = json!({"": 1, "a": 2});
    assert_eq!(select("$['']", &doc), vec![json!(1)]);
    assert_eq!(select(r#"$[""]"#, &doc), vec![json!(1)]);
}

#[test]
fn test_escaped_shorthand_names() {
    let doc = json!({"true": 1, "ab": 2});
    assert_eq!(select(r"$.\u0074rue", &doc), vec![json!(1)]);
    assert_eq!(select(r"$.a\u{62}", &doc), vec![json!(2)]);
}

#[test]
fn test_escaped_keyword_is_not_a_literal() {
    let doc = json!([{"true": 1}, {"x": 2}]);
    // An escaped `true` is a name, so it cannot stand as a comparable
    assert!(select("$[?@.x == true]", &doc).is_empty());
    assert_valid(&["$[?@.x == true]"]);
    assert_invalid(&[r"$[?@.x == \u0074rue]"]);
}

#[test]
fn test_invalid_strings() {
    assert_invalid(&[
        r"$['\a']",
        r#"$['\"']"#,
        r#"$["\'"]"#,
        r"$['\u00']",
        r"$['\u{41}']",
        r"$['\uD834']",
        r"$['\uDD1E']",
        r"$['\uD834A']",
        "$['a\u{1}']",
        "$['a\nb']",
        "$['abc",
        "$[\"abc']",
    ]);
}

#[test]
fn test_delete_character_is_allowed() {
    let doc = json!({"a\u{7f}": 1});
    assert_eq!(select("$['a\u{7f}']", &doc), vec![json!(1)]);
}
