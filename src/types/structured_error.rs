//! Error wrapper carrying a cause, a context snapshot and a formatter.
//!
//! [`StructuredError`] is a persistent value. The `add_*` methods borrow the
//! receiver and return a new error, so one base error can feed several
//! independent chains. The `with_*` methods consume the receiver and skip the
//! copy when the context is not shared.

use core::fmt::{self, Debug, Display};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::context::Context;
use crate::types::alloc_type::{Arc, String};
use crate::types::formatter::{ContextFormatter, JsonFormatter, SharedFormatter};
use crate::types::ContextValue;

/// An error decorated with key-tagged structured context.
///
/// Its message is always two lines:
///
/// ```text
/// Error: <cause>
/// Context: <rendered context>
/// ```
///
/// # Examples
///
/// ```
/// use serr::{context, StructuredError};
///
/// let base = StructuredError::new("base error").add_context("single", ["single data"]);
/// let derived = base.add_context_map(&context! { "multi" => ["multi", "one"] });
///
/// assert_eq!(base.context().len(), 1);
/// assert_eq!(derived.context().len(), 2);
/// assert_eq!(
///     derived.error_string(),
///     "Error: base error\nContext: {\"multi\":[\"multi\",\"one\"],\"single\":[\"single data\"]}"
/// );
/// ```
#[must_use]
pub struct StructuredError<E> {
    cause: Arc<E>,
    context: Context,
    formatter: SharedFormatter,
}

impl<E> StructuredError<E> {
    /// Wraps `cause` with an empty context and the default [`JsonFormatter`].
    #[inline]
    pub fn new(cause: E) -> Self {
        Self::with_formatter(cause, JsonFormatter::new())
    }

    /// Wraps `cause` with an empty context rendered by `formatter`.
    #[inline]
    pub fn with_formatter<F>(cause: E, formatter: F) -> Self
    where
        F: ContextFormatter + 'static,
    {
        Self::from_parts(cause, Context::new(), Arc::new(formatter))
    }

    #[inline]
    pub(crate) fn from_parts(cause: E, context: Context, formatter: SharedFormatter) -> Self {
        Self { cause: Arc::new(cause), context, formatter }
    }

    /// Returns a new error with `values` appended at `key`.
    ///
    /// The receiver is left untouched.
    #[inline]
    pub fn add_context<K, I>(&self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Serialize + Send + Sync + 'static,
    {
        self.clone().with_context(key, values)
    }

    /// Returns a new error with already-erased `values` appended at `key`.
    #[inline]
    pub fn add_context_values<K, I>(&self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = ContextValue>,
    {
        self.clone().with_context_values(key, values)
    }

    /// Returns a new error with every sequence of `ctx` merged into its context.
    #[inline]
    pub fn add_context_map(&self, ctx: &Context) -> Self {
        self.clone().with_context_map(ctx)
    }

    /// Consuming form of [`add_context`](Self::add_context).
    #[inline]
    pub fn with_context<K, I>(mut self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Serialize + Send + Sync + 'static,
    {
        self.context.add(key, values);
        self
    }

    /// Consuming form of [`add_context_values`](Self::add_context_values).
    #[inline]
    pub fn with_context_values<K, I>(mut self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = ContextValue>,
    {
        self.context.add_values(key, values);
        self
    }

    /// Consuming form of [`add_context_map`](Self::add_context_map).
    #[inline]
    pub fn with_context_map(mut self, ctx: &Context) -> Self {
        self.context.merge(ctx);
        self
    }

    /// Returns a snapshot of the accumulated context.
    ///
    /// Mutating the snapshot copies it first; the error never changes.
    #[inline]
    pub fn context(&self) -> Context {
        self.context.clone()
    }

    /// Returns a reference to the underlying error.
    #[inline]
    pub fn cause(&self) -> &E {
        &self.cause
    }

    /// Returns the formatter used for the `Context:` line.
    #[inline]
    pub fn formatter(&self) -> &dyn ContextFormatter {
        &*self.formatter
    }

    /// Renders only the context through the bound formatter.
    #[inline]
    pub fn render_context(&self) -> String {
        self.formatter.render(&self.context)
    }

    /// Returns the full two-line message, identical to `to_string()`.
    #[must_use]
    pub fn error_string(&self) -> String
    where
        E: Display,
    {
        alloc::format!("{self}")
    }
}

impl<E> Clone for StructuredError<E> {
    fn clone(&self) -> Self {
        Self {
            cause: Arc::clone(&self.cause),
            context: self.context.clone(),
            formatter: Arc::clone(&self.formatter),
        }
    }
}

impl<E: Display> Display for StructuredError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}\nContext: {}", self.cause, self.render_context())
    }
}

impl<E: Debug> Debug for StructuredError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredError")
            .field("cause", &self.cause)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl<E> core::error::Error for StructuredError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&*self.cause)
    }
}

impl<E> From<E> for StructuredError<E> {
    #[inline]
    fn from(cause: E) -> Self {
        Self::new(cause)
    }
}

/// Serializes as `{"error": "<cause>", "context": {...}}`, substituting markers
/// for context values that fail to serialize.
impl<E: Display> Serialize for StructuredError<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("error", &alloc::format!("{}", self.cause))?;
        map.serialize_entry("context", &self.context.to_json())?;
        map.end()
    }
}
