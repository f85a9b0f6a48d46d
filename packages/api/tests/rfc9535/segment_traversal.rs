//! Child and descendant segments (RFC 9535 section 2.5)

use serde_json::{Value, json};

use crate::support::{paths, select, select_set, sorted};

/// Document behind the examples of RFC 9535 table 16
fn table_doc() -> Value {
    json!({
        "o": {"j": 1, "k": 2},
        "a": [5, 3, [{"j": 4}, {"k": 6}]]
    })
}

#[test]
fn test_child_segment_concatenates_selections() {
    let doc = json!(["a", "b", "c", "d", "e", "f", "g"]);
    assert_eq!(
        select("$[0, 3]", &doc),
        vec![json!("a"), json!("d")]
    );
    assert_eq!(
        select("$[0:2, 5]", &doc),
        vec![json!("a"), json!("b"), json!("f")]
    );
}

#[test]
fn test_descendant_name() {
    let doc = table_doc();
    assert_eq!(select_set("$..j", &doc), sorted(vec![json!(1), json!(4)]));
}

#[test]
fn test_descendant_index() {
    let doc = table_doc();
    assert_eq!(select("$..[0]", &doc), vec![json!(5), json!({"j": 4})]);
}

#[test]
fn test_descendant_wildcard() {
    let doc = table_doc();
    let expected = sorted(vec![
        json!({"j": 1, "k": 2}),
        json!([5, 3, [{"j": 4}, {"k": 6}]]),
        json!(1),
        json!(2),
        json!(5),
        json!(3),
        json!([{"j": 4}, {"k": 6}]),
        json!({"j": 4}),
        json!({"k": 6}),
        json!(4),
        json!(6),
    ]);
    assert_eq!(select_set("$..[*]", &doc), expected);
    assert_eq!(select_set("$..*", &doc), expected);
}

#[test]
fn test_descendant_selector_lists() {
    let doc = table_doc();
    assert_eq!(select("$..o", &doc), vec![json!({"j": 1, "k": 2})]);
    assert_eq!(
        select_set("$.o..[*, *]", &doc),
        sorted(vec![json!(1), json!(2), json!(1), json!(2)])
    );
    assert_eq!(
        select("$.a..[0, 1]", &doc),
        vec![json!(5), json!(3), json!({"j": 4}), json!({"k": 6})]
    );
}

#[test]
fn test_descendants_visit_parents_before_children() {
    let doc = json!([{"x": 1, "y": [{"x": 2}]}, {"x": 3}]);
    assert_eq!(select("$..x", &doc), vec![json!(1), json!(2), json!(3)]);
    assert_eq!(
        paths("$..x", &doc),
        vec!["$[0]['x']", "$[0]['y'][0]['x']", "$[1]['x']"]
    );
}

#[test]
fn test_descendant_filter() {
    let doc = json!({"a": [{"v": 1}, {"v": 5, "b": [{"v": 7}]}]});
    assert_eq!(
        select("$..[?@.v > 2].v", &doc),
        vec![json!(5), json!(7)]
    );
}

#[test]
fn test_segments_on_empty_results() {
    let doc = json!({"a": 1});
    assert!(select("$.b.c", &doc).is_empty());
    assert!(select("$.a.b", &doc).is_empty());
    assert!(select("$.a..b", &doc).is_empty());
    assert!(select("$..x", &json!([])).is_empty());
}

#[test]
fn test_root_selects_document() {
    let doc = table_doc();
    assert_eq!(select("$", &doc), vec![doc.clone()]);
}
