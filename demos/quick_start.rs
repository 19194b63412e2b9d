//! Quick start: wrap an error, add context as it propagates, print it.

use serr::prelude::*;

#[derive(Debug)]
struct QueryError(&'static str);

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for QueryError {}

fn query(user_id: u64) -> StructuredResult<String, QueryError> {
    Err(QueryError("connection reset")).err_context("user_id", [user_id])
}

fn load_profile(request: &Context, user_id: u64) -> StructuredResult<String, QueryError> {
    query(user_id)
        .add_err_context_map(request)
        .add_err_context("stage", ["load_profile"])
}

fn main() {
    let request = context! {
        "request_id" => ["req-5f2a"],
        "route" => ["/profile"],
    };

    if let Err(err) = load_profile(&request, 42) {
        println!("{err}");
        // Error: connection reset
        // Context: {"request_id":["req-5f2a"],"route":["/profile"],"stage":["load_profile"],"user_id":[42]}

        let pretty = wrap_with(err.cause().to_string(), JsonFormatter::pretty())
            .add_context_map(&err.context());
        println!("\n{pretty}");
    }

    // The request context is still untouched.
    assert_eq!(request.len(), 2);
}
