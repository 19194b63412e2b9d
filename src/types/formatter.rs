//! Context rendering strategies.
//!
//! A [`StructuredError`](crate::StructuredError) delegates the second line of
//! its message to a [`ContextFormatter`]. [`JsonFormatter`] is the default;
//! any type implementing the trait can be supplied at wrap time.

use core::fmt;

use crate::context::Context;
use crate::types::alloc_type::{Arc, String, Vec};

/// Renders a [`Context`] into the string appended to an error message.
///
/// Implementations must be pure: the same context always renders to the same
/// string. They must not panic on values that fail to serialize.
///
/// # Examples
///
/// ```
/// use serr::{wrap_with, Context, ContextFormatter};
///
/// struct KeyCount;
///
/// impl ContextFormatter for KeyCount {
///     fn render(&self, context: &Context) -> String {
///         format!("{} keys", context.len())
///     }
/// }
///
/// let err = wrap_with("boom", KeyCount).add_context("attempt", [3]);
/// assert_eq!(err.to_string(), "Error: boom\nContext: 1 keys");
/// ```
pub trait ContextFormatter: Send + Sync {
    /// Renders `context` as a string.
    fn render(&self, context: &Context) -> String;
}

/// Formatter handle shared between a [`StructuredError`](crate::StructuredError)
/// and everything derived from it.
pub type SharedFormatter = Arc<dyn ContextFormatter>;

impl<F> ContextFormatter for Arc<F>
where
    F: ContextFormatter + ?Sized,
{
    #[inline]
    fn render(&self, context: &Context) -> String {
        (**self).render(context)
    }
}

impl<F> ContextFormatter for &'static F
where
    F: ContextFormatter + ?Sized,
{
    #[inline]
    fn render(&self, context: &Context) -> String {
        (**self).render(context)
    }
}

/// Renders the context as a JSON object of value arrays.
///
/// Keys appear in sorted order; each array preserves insertion order.
///
/// ```
/// use serr::{context, ContextFormatter, JsonFormatter};
///
/// let ctx = context! { "user" => ["alice"], "attempt" => [1, 2] };
/// assert_eq!(JsonFormatter::new().render(&ctx), r#"{"attempt":[1,2],"user":["alice"]}"#);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Compact, single-line output. This is the default.
    #[inline]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented, multi-line output.
    #[inline]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Returns `true` for the indented variant.
    #[inline]
    pub const fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl ContextFormatter for JsonFormatter {
    fn render(&self, context: &Context) -> String {
        let value = context.to_json();
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        rendered.unwrap_or_else(|err| alloc::format!("<unrenderable context: {err}>"))
    }
}

/// Renders `key=[values]` pairs joined by a separator.
///
/// Values are written as JSON arrays, so strings stay quoted and nested data
/// stays unambiguous.
///
/// ```
/// use serr::{context, ContextFormatter, KeyValueFormatter};
///
/// let ctx = context! { "host" => ["db-01"], "retries" => [3] };
/// assert_eq!(KeyValueFormatter::new().render(&ctx), r#"host=["db-01"] retries=[3]"#);
/// assert_eq!(
///     KeyValueFormatter::with_separator(", ").render(&ctx),
///     r#"host=["db-01"], retries=[3]"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueFormatter {
    separator: String,
}

impl KeyValueFormatter {
    /// Pairs separated by a single space.
    #[inline]
    pub fn new() -> Self {
        Self::with_separator(" ")
    }

    /// Pairs separated by `separator`.
    #[inline]
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self { separator: separator.into() }
    }

    /// The configured separator.
    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for KeyValueFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextFormatter for KeyValueFormatter {
    fn render(&self, context: &Context) -> String {
        let pairs: Vec<String> = context
            .iter()
            .map(|(key, values)| {
                let rendered: Vec<_> = values.iter().map(|value| value.render()).collect();
                let array = serde_json::to_string(&rendered)
                    .unwrap_or_else(|err| alloc::format!("<unrenderable values: {err}>"));
                alloc::format!("{key}={array}")
            })
            .collect();
        pairs.join(self.separator.as_str())
    }
}

/// Adapts a closure into a [`ContextFormatter`].
///
/// Created by [`formatter_fn`].
#[derive(Clone, Copy)]
pub struct FnFormatter<F> {
    render: F,
}

/// Builds a formatter from a closure.
///
/// ```
/// use serr::{formatter_fn, wrap_with};
///
/// let keys_only = formatter_fn(|ctx| ctx.keys().collect::<Vec<_>>().join(","));
/// let err = wrap_with("boom", keys_only)
///     .add_context("b", [1])
///     .add_context("a", [2]);
///
/// assert_eq!(err.to_string(), "Error: boom\nContext: a,b");
/// ```
#[inline]
pub fn formatter_fn<F>(render: F) -> FnFormatter<F>
where
    F: Fn(&Context) -> String + Send + Sync,
{
    FnFormatter { render }
}

impl<F> ContextFormatter for FnFormatter<F>
where
    F: Fn(&Context) -> String + Send + Sync,
{
    #[inline]
    fn render(&self, context: &Context) -> String {
        (self.render)(context)
    }
}

impl<F> fmt::Debug for FnFormatter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFormatter").finish_non_exhaustive()
    }
}
