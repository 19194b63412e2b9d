use serde_json::json;
use serr::traits::{ResultExt, StructuredResultExt};
use serr::{context, StructuredResult};

#[test]
fn wrap_err_on_err() {
    let result: Result<(), &str> = Err("original");
    let err = result.wrap_err().unwrap_err();

    assert_eq!(err.cause(), &"original");
    assert!(err.context().is_empty());
}

#[test]
fn wrap_err_on_ok_passes_through() {
    let result: Result<i32, &str> = Ok(42);
    assert_eq!(result.wrap_err().unwrap(), 42);
}

#[test]
fn wrap_err_in_uses_base_snapshot() {
    let mut base = context! { "request_id" => ["req-1"] };
    let err = Err::<(), _>("timeout").wrap_err_in(&base).unwrap_err();

    base.add("request_id", ["req-2"]);

    assert_eq!(err.context(), context! { "request_id" => ["req-1"] });
}

#[test]
fn err_context_attaches_values() {
    let result: Result<(), &str> = Err("not found");
    let err = result.err_context("user_id", [42, 43]).unwrap_err();

    assert_eq!(err.to_string(), "Error: not found\nContext: {\"user_id\":[42,43]}");
}

#[test]
fn err_context_with_is_lazy_on_ok() {
    let mut called = false;
    let result: Result<(), &str> = Ok(());

    let _ = result.err_context_with(|| {
        called = true;
        context! { "never" => [1] }
    });
    assert!(!called, "context closure must not run on Ok");
}

#[test]
fn err_context_with_runs_on_err() {
    let mut called = false;
    let result: Result<(), &str> = Err("error");

    let err = result
        .err_context_with(|| {
            called = true;
            context! { "built" => [true] }
        })
        .unwrap_err();
    assert!(called, "context closure must run on Err");
    assert_eq!(err.context().to_json(), json!({ "built": [true] }));
}

#[test]
fn structured_results_keep_accumulating() {
    fn repository() -> StructuredResult<(), &'static str> {
        Err("row missing").err_context("layer", ["repository"])
    }

    fn service() -> StructuredResult<(), &'static str> {
        repository()
            .add_err_context("layer", ["service"])
            .add_err_context_map(&context! { "table" => ["users"] })
    }

    let err = service().add_err_context_with(|| context! { "layer" => ["handler"] }).unwrap_err();

    assert_eq!(
        err.context().to_json(),
        json!({ "layer": ["repository", "service", "handler"], "table": ["users"] })
    );
    assert_eq!(err.cause(), &"row missing");
}

#[test]
fn structured_results_lazy_on_ok() {
    let mut called = false;
    let result: StructuredResult<u8, &str> = Ok(1);

    let value = result
        .add_err_context_with(|| {
            called = true;
            context! {}
        })
        .unwrap();
    assert_eq!(value, 1);
    assert!(!called);
}
