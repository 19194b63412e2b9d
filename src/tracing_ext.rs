//! Tracing integration for serr.
//!
//! This module records span information as structured context and emits
//! structured errors as `tracing` events.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! serr = { version = "0.3", features = ["tracing"] }
//! ```

use core::fmt::Display;

use tracing::Span;

use crate::types::{StructuredError, StructuredResult};

/// Context key under which span names are recorded.
pub const SPAN_KEY: &str = "span";

impl<E> StructuredError<E> {
    /// Appends the name of `span` under [`SPAN_KEY`].
    ///
    /// Disabled spans are recorded as `"unknown"`.
    pub fn with_span(self, span: &Span) -> Self {
        self.with_context(SPAN_KEY, [span_name(span)])
    }

    /// Appends the name of the current span under [`SPAN_KEY`].
    pub fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    /// Emits this error as an `ERROR` level event.
    ///
    /// The cause and the rendered context are recorded as the `error` and
    /// `context` fields.
    pub fn trace(&self)
    where
        E: Display,
    {
        tracing::error!(
            error = %self.cause(),
            context = %self.render_context(),
            "structured error"
        );
    }
}

fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}

/// Extension trait for span-aware error wrapping on `Result` types.
///
/// # Example
///
/// ```rust
/// use serr::tracing_ext::ResultSpanExt;
/// use tracing::info_span;
///
/// let span = info_span!("load_profile");
/// let _guard = span.enter();
///
/// let result: Result<(), &str> = Err("profile missing");
/// let err = result.wrap_err_in_span().unwrap_err();
/// assert!(err.context().contains_key("span"));
/// ```
pub trait ResultSpanExt<T, E> {
    /// Wraps the error and records the current span.
    fn wrap_err_in_span(self) -> StructuredResult<T, E>;
}

impl<T, E> ResultSpanExt<T, E> for Result<T, E> {
    fn wrap_err_in_span(self) -> StructuredResult<T, E> {
        self.map_err(|e| StructuredError::new(e).with_current_span())
    }
}

/// Extension trait that logs structured errors as they pass through.
pub trait TraceErrExt {
    /// Emits the error (if any) with [`StructuredError::trace`] and returns
    /// `self` unchanged.
    fn trace_err(self) -> Self;
}

impl<T, E: Display> TraceErrExt for StructuredResult<T, E> {
    fn trace_err(self) -> Self {
        if let Err(err) = &self {
            err.trace();
        }
        self
    }
}
