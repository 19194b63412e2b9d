use serde_json::json;
use serr::{context, Context};

#[test]
fn empty_invocation_builds_empty_context() {
    let ctx: Context = context! {};
    assert!(ctx.is_empty());
}

#[test]
fn mixed_value_types_share_one_key() {
    let ctx = context! { "mixed" => ["text", 42, true, 1.5] };

    assert_eq!(ctx.to_json(), json!({ "mixed": ["text", 42, true, 1.5] }));
}

#[test]
fn repeated_keys_append() {
    let ctx = context! {
        "k" => ["a"],
        "k" => ["b", "c"],
    };

    assert_eq!(ctx.to_json(), json!({ "k": ["a", "b", "c"] }));
}

#[test]
fn accepts_owned_keys_and_expressions() {
    let key = String::from("user");
    let id = 41;
    let ctx = context! { key => [id + 1], "empty" => [] };

    assert_eq!(ctx.to_json(), json!({ "empty": [], "user": [42] }));
}

#[test]
fn nested_serializable_values() {
    #[derive(serde::Serialize)]
    struct Request {
        method: &'static str,
        retries: u8,
    }

    let ctx = context! { "request" => [Request { method: "GET", retries: 2 }] };

    assert_eq!(ctx.to_json(), json!({ "request": [{ "method": "GET", "retries": 2 }] }));
}
