//! Shared fixtures and helpers

use rfcpath::JsonPath;
use serde_json::{Value, json};

/// The bookstore document from RFC 9535 section 1.5
pub fn bookstore() -> Value {
    json!({
        "store": {
            "book": [
                {
                    "category": "reference",
                    "author": "Nigel Rees",
                    "title": "Sayings of the Century",
                    "price": 8.95
                },
                {
                    "category": "fiction",
                    "author": "Evelyn Waugh",
                    "title": "Sword of Honour",
                    "price": 12.99
                },
                {
                    "category": "fiction",
                    "author": "Herman Melville",
                    "title": "Moby Dick",
                    "isbn": "0-553-21311-3",
                    "price": 8.99
                },
                {
                    "category": "fiction",
                    "author": "J. R. R. Tolkien",
                    "title": "The Lord of the Rings",
                    "isbn": "0-395-19395-8",
                    "price": 22.99
                }
            ],
            "bicycle": {
                "color": "red",
                "price": 399
            }
        }
    })
}

pub fn compile(query: &str) -> JsonPath {
    JsonPath::parse(query).unwrap_or_else(|err| panic!("'{query}' should compile: {err}"))
}

/// Selected values in selection order
pub fn select(query: &str, doc: &Value) -> Vec<Value> {
    compile(query).select(doc).to_values()
}

/// Selected values sorted by their JSON text, for results whose order
/// depends on object member order
pub fn select_set(query: &str, doc: &Value) -> Vec<Value> {
    sorted(select(query, doc))
}

pub fn sorted(mut values: Vec<Value>) -> Vec<Value> {
    values.sort_by_key(ToString::to_string);
    values
}

/// Normalized paths of the selected nodes in selection order
pub fn paths(query: &str, doc: &Value) -> Vec<String> {
    compile(query)
        .select_located(doc)
        .paths()
        .map(ToString::to_string)
        .collect()
}

pub fn assert_valid(queries: &[&str]) {
    for query in queries {
        assert!(
            JsonPath::parse(query).is_ok(),
            "'{query}' should compile: {:?}",
            JsonPath::parse(query).err()
        );
    }
}

pub fn assert_invalid(queries: &[&str]) {
    for query in queries {
        assert!(
            JsonPath::parse(query).is_err(),
            "'{query}' should be rejected"
        );
    }
}

/// Display text of the parse error for `query`
pub fn error_message(query: &str) -> String {
    match JsonPath::parse(query) {
        Ok(path) => panic!("'{query}' should be rejected, compiled to {path}"),
        Err(err) => err.to_string(),
    }
}
