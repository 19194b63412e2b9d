use std::collections::BTreeMap;

use serde_json::json;
use serr::ContextValue;

#[derive(serde::Serialize)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn to_json_serializes_payload() {
    assert_eq!(ContextValue::new(Point { x: 1, y: -2 }).to_json().unwrap(), json!({ "x": 1, "y": -2 }));
    assert_eq!(ContextValue::new(None::<u8>).to_json().unwrap(), json!(null));
}

#[test]
fn equality_compares_json_forms() {
    assert_eq!(ContextValue::new("a"), ContextValue::new(String::from("a")));
    assert_eq!(ContextValue::new(vec![1, 2]), ContextValue::new([1u64, 2]));
    assert_ne!(ContextValue::new(1), ContextValue::new("1"));
}

#[test]
fn unserializable_values_never_compare_equal() {
    let mut bad = BTreeMap::new();
    bad.insert((1, 2), "tuple key");

    let value = ContextValue::new(bad);
    assert!(value.to_json().is_err());
    assert_ne!(value.clone(), value);
}

#[test]
fn render_substitutes_marker() {
    let mut bad = BTreeMap::new();
    bad.insert((1, 2), "tuple key");

    let rendered = ContextValue::new(bad).render();
    assert_eq!(rendered, json!("<unserializable: key must be a string>"));
}

#[test]
fn debug_prints_json() {
    assert_eq!(format!("{:?}", ContextValue::new(Point { x: 3, y: 4 })), r#"{"x":3,"y":4}"#);
}

#[test]
fn serialize_propagates_failures() {
    let mut bad = BTreeMap::new();
    bad.insert((1, 2), "tuple key");

    assert!(serde_json::to_string(&ContextValue::new(bad)).is_err());
    assert_eq!(serde_json::to_string(&ContextValue::new(7)).unwrap(), "7");
}
