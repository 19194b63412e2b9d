//! Error and context value types.
//!
//! This module provides the value types behind the crate: the type-erased
//! [`ContextValue`], the [`StructuredError`] wrapper and the formatter
//! strategies that render a context.
//!
//! # Examples
//!
//! ```
//! use serr::{context, wrap};
//!
//! let err = wrap("database connection failed")
//!     .add_context("db", ["primary"])
//!     .add_context_map(&context! { "retry_count" => [3] });
//!
//! println!("{err}");
//! // Error: database connection failed
//! // Context: {"db":["primary"],"retry_count":[3]}
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod context_value;
pub mod formatter;
pub mod structured_error;

pub use context_value::*;
pub use formatter::*;
pub use structured_error::*;

/// SmallVec-backed sequence of values stored under one key.
///
/// Inline storage covers the common case of one or two values per key.
pub type ValueVec = SmallVec<[ContextValue; 2]>;

/// Result alias that wraps failures in [`StructuredError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The cause type
pub type StructuredResult<T, E> = Result<T, StructuredError<E>>;
