//! Array slice selector (RFC 9535 section 2.3.4)

use serde_json::{Value, json};

use crate::support::{assert_invalid, assert_valid, select};

fn letters() -> Value {
    json!(["a", "b", "c", "d", "e", "f", "g"])
}

#[test]
fn test_slice_with_default_step() {
    assert_eq!(select("$[1:3]", &letters()), vec![json!("b"), json!("c")]);
}

#[test]
fn test_slice_with_no_end() {
    assert_eq!(select("$[5:]", &letters()), vec![json!("f"), json!("g")]);
}

#[test]
fn test_slice_with_step() {
    assert_eq!(
        select("$[1:5:2]", &letters()),
        vec![json!("b"), json!("d")]
    );
}

#[test]
fn test_slice_with_negative_step() {
    assert_eq!(
        select("$[5:1:-2]", &letters()),
        vec![json!("f"), json!("d")]
    );
}

#[test]
fn test_slice_in_reverse_order() {
    assert_eq!(
        select("$[::-1]", &letters()),
        vec![
            json!("g"),
            json!("f"),
            json!("e"),
            json!("d"),
            json!("c"),
            json!("b"),
            json!("a")
        ]
    );
}

#[test]
fn test_zero_step_selects_nothing() {
    assert!(select("$[::0]", &letters()).is_empty());
    assert!(select("$[1:5:0]", &letters()).is_empty());
}

#[test]
fn test_bounds_are_clamped() {
    assert_eq!(select("$[-100:2]", &letters()), vec![json!("a"), json!("b")]);
    assert_eq!(select("$[5:100]", &letters()), vec![json!("f"), json!("g")]);
    assert_eq!(select("$[-2:]", &letters()), vec![json!("f"), json!("g")]);
    assert!(select("$[10:20]", &letters()).is_empty());
    assert!(select("$[3:1]", &letters()).is_empty());
}

#[test]
fn test_extreme_bounds() {
    assert_eq!(
        select("$[-9007199254740991:9007199254740991:9007199254740991]", &letters()),
        vec![json!("a")]
    );
    assert_eq!(
        select("$[9007199254740991::-9007199254740991]", &letters()),
        vec![json!("g")]
    );
}

#[test]
fn test_slice_ignores_non_arrays() {
    assert!(select("$[0:2]", &json!({"0": 1, "1": 2})).is_empty());
    assert!(select("$[0:2]", &json!("ab")).is_empty());
}

#[test]
fn test_slice_on_empty_array() {
    assert!(select("$[:]", &json!([])).is_empty());
    assert!(select("$[::-1]", &json!([])).is_empty());
}

#[test]
fn test_slice_syntax() {
    assert_valid(&["$[:]", "$[::]", "$[1:]", "$[:1]", "$[::2]", "$[ 1 : 2 : 3 ]"]);
    assert_invalid(&["$[1:2:3:4]", "$[-0:]", "$[:01]", "$[1:2:-0]", "$[a:1]"]);
}
