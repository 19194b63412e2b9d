//! Extension traits for attaching structured context to `Result` types.
//!
//! This module provides [`ResultExt`], which wraps a plain error into a
//! [`StructuredError`] without verbose `.map_err()` chains, and
//! [`StructuredResultExt`], which keeps adding context to an already wrapped
//! error as it propagates.
//!
//! # Examples
//!
//! ```
//! use serr::{ResultExt, StructuredResult, StructuredResultExt};
//!
//! fn load_config(path: &str) -> StructuredResult<String, std::io::Error> {
//!     std::fs::read_to_string(path).err_context("path", [path.to_string()])
//! }
//!
//! fn boot() -> StructuredResult<String, std::io::Error> {
//!     load_config("/definitely/missing.toml").add_err_context("stage", ["boot"])
//! }
//!
//! let err = boot().unwrap_err();
//! assert!(err.context().contains_key("path"));
//! assert!(err.context().contains_key("stage"));
//! ```

use serde::Serialize;

use crate::context::Context;
use crate::types::alloc_type::String;
use crate::types::StructuredError;

/// Extension trait for wrapping `Result` errors into [`StructuredError`].
///
/// # Examples
///
/// ## Eager Context
///
/// ```
/// use serr::ResultExt;
///
/// let result: Result<(), &str> = Err("not found");
/// let err = result.err_context("user_id", [42]).unwrap_err();
/// assert_eq!(err.to_string(), "Error: not found\nContext: {\"user_id\":[42]}");
/// ```
///
/// ## Lazy Context
///
/// ```
/// use serr::{context, ResultExt};
///
/// let result: Result<u8, &str> = Ok(7);
/// let value = result.err_context_with(|| context! { "expensive" => ["never built"] });
/// assert_eq!(value.unwrap(), 7);
/// ```
pub trait ResultExt<T, E> {
    /// Wraps the error with an empty context.
    fn wrap_err(self) -> Result<T, StructuredError<E>>;

    /// Wraps the error using `base` as the starting context.
    fn wrap_err_in(self, base: &Context) -> Result<T, StructuredError<E>>;

    /// Wraps the error and attaches `values` at `key`.
    ///
    /// The values are dropped unused on `Ok`.
    fn err_context<K, I>(self, key: K, values: I) -> Result<T, StructuredError<E>>
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Serialize + Send + Sync + 'static;

    /// Wraps the error with a lazily built context.
    ///
    /// The closure only runs when the `Result` is an `Err`.
    fn err_context_with<F>(self, f: F) -> Result<T, StructuredError<E>>
    where
        F: FnOnce() -> Context;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn wrap_err(self) -> Result<T, StructuredError<E>> {
        self.map_err(StructuredError::new)
    }

    #[inline]
    fn wrap_err_in(self, base: &Context) -> Result<T, StructuredError<E>> {
        self.map_err(|e| base.wrap(e))
    }

    #[inline]
    fn err_context<K, I>(self, key: K, values: I) -> Result<T, StructuredError<E>>
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Serialize + Send + Sync + 'static,
    {
        self.map_err(|e| StructuredError::new(e).with_context(key, values))
    }

    #[inline]
    fn err_context_with<F>(self, f: F) -> Result<T, StructuredError<E>>
    where
        F: FnOnce() -> Context,
    {
        self.map_err(|e| f().wrap(e))
    }
}

/// Extension trait for adding context to results that already carry a
/// [`StructuredError`].
///
/// # Examples
///
/// ```
/// use serr::{ResultExt, StructuredResultExt};
///
/// let result: Result<(), &str> = Err("inner error");
/// let err = result
///     .err_context("layer", ["repository"])
///     .add_err_context("layer", ["service"])
///     .unwrap_err();
///
/// assert_eq!(
///     err.to_string(),
///     "Error: inner error\nContext: {\"layer\":[\"repository\",\"service\"]}"
/// );
/// ```
pub trait StructuredResultExt<T, E> {
    /// Appends `values` at `key` on the wrapped error.
    fn add_err_context<K, I>(self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Serialize + Send + Sync + 'static;

    /// Merges `ctx` into the wrapped error's context.
    fn add_err_context_map(self, ctx: &Context) -> Self;

    /// Merges a lazily built context; the closure only runs on `Err`.
    fn add_err_context_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Context;
}

impl<T, E> StructuredResultExt<T, E> for Result<T, StructuredError<E>> {
    #[inline]
    fn add_err_context<K, I>(self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Serialize + Send + Sync + 'static,
    {
        self.map_err(|e| e.with_context(key, values))
    }

    #[inline]
    fn add_err_context_map(self, ctx: &Context) -> Self {
        self.map_err(|e| e.with_context_map(ctx))
    }

    #[inline]
    fn add_err_context_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Context,
    {
        self.map_err(|e| e.with_context_map(&f()))
    }
}
