//! Integration tests for async and tracing extensions.

#[cfg(feature = "async")]
mod context_future;
