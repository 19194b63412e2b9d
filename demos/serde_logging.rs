//! Example: Structured Logging with Serde
//!
//! A `StructuredError` serializes as `{"error": ..., "context": ...}`, which
//! fits JSON log pipelines (ELK, Loki, CloudWatch) without extra glue.

use serde::Serialize;
use serr::{context, wrap};

#[derive(Debug, Serialize)]
struct Endpoint {
    host: &'static str,
    port: u16,
}

fn main() {
    let error = wrap("database connection timeout")
        .add_context("endpoint", [Endpoint { host: "db-primary-01", port: 5432 }])
        .add_context("retry_count", [3])
        .add_context_map(&context! { "tags" => ["database", "critical"] });

    match serde_json::to_string_pretty(&error) {
        Ok(json) => println!("Structured Error Log:\n{json}"),
        Err(e) => eprintln!("Failed to serialize error: {e}"),
    }
}
