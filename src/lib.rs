//! Structured, key-tagged context for errors.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `serr::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Wrapping an Error
//!
//! ```
//! use serr::wrap;
//!
//! let err = wrap("base error").add_context("single", ["single data"]);
//!
//! assert_eq!(
//!     err.to_string(),
//!     "Error: base error\nContext: {\"single\":[\"single data\"]}"
//! );
//! ```
//!
//! ## Starting From a Base Context
//!
//! ```
//! use serr::context;
//!
//! let base = context! { "base" => ["data"] };
//! let err = base
//!     .wrap("base error")
//!     .add_context("single", ["single data"])
//!     .add_context_map(&context! { "multi_1" => ["multi", "one"] });
//!
//! assert_eq!(err.context().len(), 3);
//! assert_eq!(base, context! { "base" => ["data"] });
//! ```
//!
//! ## Swapping the Formatter
//!
//! ```
//! use serr::{wrap_with, KeyValueFormatter};
//!
//! let err = wrap_with("timeout", KeyValueFormatter::new()).add_context("host", ["db-01"]);
//! assert_eq!(err.to_string(), "Error: timeout\nContext: host=[\"db-01\"]");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Context maps and the wrap entry points
pub mod context;
/// Macros for building context literals
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for `Result`
pub mod traits;
/// StructuredError, context values and formatters
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use context::*;
pub use traits::*;
pub use types::{
    formatter_fn, ContextFormatter, ContextValue, FnFormatter, JsonFormatter, KeyValueFormatter,
    SharedFormatter, StructuredError, StructuredResult, ValueVec,
};
