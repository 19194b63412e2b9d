//! Key-tagged context maps and the entry points that bind them to errors.
//!
//! Key features:
//! - [`Context`] maps string keys to ordered sequences of [`ContextValue`]s.
//!   It is a persistent value: clones share storage, and any mutation of a
//!   shared map first makes a private copy.
//! - [`wrap`] / [`wrap_with`] turn a plain error into a [`StructuredError`]
//!   with an empty context; [`Context::wrap`] uses an existing context as the
//!   base.
//!
//! # Examples
//!
//! ```
//! use serr::Context;
//!
//! let mut base = Context::new();
//! base.add("request_id", ["req-7"]);
//!
//! let err = base.wrap("timeout").add_context("attempt", [1, 2]);
//!
//! // The caller keeps using its base; the error is unaffected.
//! base.add("request_id", ["req-8"]);
//! assert_eq!(err.context().get("request_id").map(<[_]>::len), Some(1));
//! ```

use core::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::types::alloc_type::{Arc, BTreeMap, String};
use crate::types::formatter::{ContextFormatter, JsonFormatter};
use crate::types::{ContextValue, StructuredError, ValueVec};

/// Mapping from key to an insertion-ordered sequence of values.
///
/// Keys iterate in sorted order. Cloning is O(1); the first mutation of a
/// shared clone copies the key table, so no holder ever observes another
/// holder's additions.
#[derive(Clone, Default, PartialEq)]
pub struct Context {
    entries: Arc<BTreeMap<String, ValueVec>>,
}

impl Context {
    /// Creates an empty context.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `values` to the sequence stored at `key`, creating it if absent.
    ///
    /// An empty `values` still registers `key` with an empty sequence.
    ///
    /// ```
    /// use serr::Context;
    /// use serde_json::json;
    ///
    /// let mut ctx = Context::new();
    /// ctx.add("ids", [1, 2]).add("ids", [3]).add("user", ["alice"]);
    ///
    /// assert_eq!(ctx.to_json(), json!({ "ids": [1, 2, 3], "user": ["alice"] }));
    /// ```
    pub fn add<K, I>(&mut self, key: K, values: I) -> &mut Self
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Serialize + Send + Sync + 'static,
    {
        self.add_values(key, values.into_iter().map(ContextValue::new))
    }

    /// Appends already-erased values, allowing mixed payload types per key.
    pub fn add_values<K, I>(&mut self, key: K, values: I) -> &mut Self
    where
        K: Into<String>,
        I: IntoIterator<Item = ContextValue>,
    {
        Arc::make_mut(&mut self.entries).entry(key.into()).or_default().extend(values);
        self
    }

    /// Consuming form of [`add`](Self::add), convenient for building literals.
    #[inline]
    pub fn with<K, I>(mut self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Serialize + Send + Sync + 'static,
    {
        self.add(key, values);
        self
    }

    /// Appends every sequence of `other` to the sequence at the same key.
    ///
    /// Overlapping keys are concatenated, never overwritten.
    ///
    /// ```
    /// use serr::context;
    ///
    /// let mut ctx = context! { "k" => ["a"] };
    /// ctx.merge(&context! { "k" => ["b"], "other" => [1] });
    ///
    /// assert_eq!(ctx, context! { "k" => ["a", "b"], "other" => [1] });
    /// ```
    pub fn merge(&mut self, other: &Context) -> &mut Self {
        if other.is_empty() {
            return self;
        }
        let entries = Arc::make_mut(&mut self.entries);
        for (key, values) in other.entries.iter() {
            entries.entry(key.clone()).or_default().extend(values.iter().cloned());
        }
        self
    }

    /// Binds a snapshot of this context to `cause` using [`JsonFormatter`].
    ///
    /// Later changes to `self` are never visible through the returned error.
    #[inline]
    pub fn wrap<E>(&self, cause: E) -> StructuredError<E> {
        self.wrap_with(cause, JsonFormatter::new())
    }

    /// Binds a snapshot of this context to `cause` using `formatter`.
    #[inline]
    pub fn wrap_with<E, F>(&self, cause: E, formatter: F) -> StructuredError<E>
    where
        F: ContextFormatter + 'static,
    {
        StructuredError::from_parts(cause, self.clone(), Arc::new(formatter))
    }

    /// Returns the values stored at `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&[ContextValue]> {
        self.entries.get(key).map(|values| values.as_slice())
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, values)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ContextValue])> + '_ {
        self.entries.iter().map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Converts the context into a JSON object of arrays.
    ///
    /// Values that fail to serialize are replaced by a marker string, so this
    /// never fails.
    pub fn to_json(&self) -> Value {
        let object = self
            .iter()
            .map(|(key, values)| {
                let array = values.iter().map(ContextValue::render).collect();
                (String::from(key), Value::Array(array))
            })
            .collect();
        Value::Object(object)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, I> Extend<(K, I)> for Context
where
    K: Into<String>,
    I: IntoIterator<Item = ContextValue>,
{
    fn extend<T: IntoIterator<Item = (K, I)>>(&mut self, iter: T) {
        for (key, values) in iter {
            self.add_values(key, values);
        }
    }
}

impl<K, I> FromIterator<(K, I)> for Context
where
    K: Into<String>,
    I: IntoIterator<Item = ContextValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut ctx = Context::new();
        ctx.extend(iter);
        ctx
    }
}

impl Serialize for Context {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, values) in self.iter() {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

/// Wraps `cause` with an empty context and the default [`JsonFormatter`].
///
/// # Examples
///
/// ```
/// use serr::wrap;
///
/// let err = wrap("base error").add_context("single", ["single data"]);
/// assert_eq!(
///     err.to_string(),
///     "Error: base error\nContext: {\"single\":[\"single data\"]}"
/// );
/// ```
#[inline]
pub fn wrap<E>(cause: E) -> StructuredError<E> {
    Context::new().wrap(cause)
}

/// Wraps `cause` with an empty context rendered by `formatter`.
///
/// # Examples
///
/// ```
/// use serr::{wrap_with, KeyValueFormatter};
///
/// let err = wrap_with("disk full", KeyValueFormatter::new()).add_context("mount", ["/var"]);
/// assert_eq!(err.to_string(), "Error: disk full\nContext: mount=[\"/var\"]");
/// ```
#[inline]
pub fn wrap_with<E, F>(cause: E, formatter: F) -> StructuredError<E>
where
    F: ContextFormatter + 'static,
{
    Context::new().wrap_with(cause, formatter)
}
