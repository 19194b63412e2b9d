//! Type-erased values stored in a [`Context`](crate::Context).
//!
//! A [`ContextValue`] can hold anything that implements [`serde::Serialize`].
//! Serialization is deferred until the value is rendered, so attaching context
//! on the error path costs one reference-counted allocation per value.
//!
//! # Examples
//!
//! ```
//! use serr::ContextValue;
//! use serde_json::json;
//!
//! let value = ContextValue::new(vec![1, 2, 3]);
//! assert_eq!(value.to_json().unwrap(), json!([1, 2, 3]));
//! assert_eq!(value, ContextValue::new([1, 2, 3]));
//! ```
use core::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::types::alloc_type::{Arc, String};

/// Prefix of the marker rendered in place of a value that fails to serialize.
pub const UNSERIALIZABLE_MARKER: &str = "<unserializable: ";

/// Object-safe view over a `Serialize` payload.
trait ErasedValue: Send + Sync {
    fn to_json(&self) -> Result<Value, serde_json::Error>;
}

impl<T> ErasedValue for T
where
    T: Serialize + Send + Sync,
{
    #[inline]
    fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// An opaque, cheaply clonable, serializable datum.
///
/// Cloning shares the underlying payload; payloads are never mutated after
/// construction, so clones are indistinguishable from deep copies.
#[derive(Clone)]
pub struct ContextValue {
    inner: Arc<dyn ErasedValue>,
}

impl ContextValue {
    /// Erases `value` behind a shared handle.
    #[inline]
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + Send + Sync + 'static,
    {
        Self { inner: Arc::new(value) }
    }

    /// Serializes the payload into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns the serializer error when the payload's `Serialize` impl fails,
    /// e.g. a map with non-string keys.
    #[inline]
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        self.inner.to_json()
    }

    /// Serializes the payload, substituting a marker string on failure.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use serr::ContextValue;
    ///
    /// let mut bad = BTreeMap::new();
    /// bad.insert((1, 2), "tuple keys are not valid JSON keys");
    ///
    /// let rendered = ContextValue::new(bad).render();
    /// assert!(rendered.as_str().unwrap().starts_with("<unserializable: "));
    /// ```
    pub fn render(&self) -> Value {
        self.to_json().unwrap_or_else(|err| Value::String(unserializable(&err)))
    }
}

pub(crate) fn unserializable(err: &serde_json::Error) -> String {
    alloc::format!("{UNSERIALIZABLE_MARKER}{err}>")
}

impl fmt::Debug for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(), f)
    }
}

impl PartialEq for ContextValue {
    fn eq(&self, other: &Self) -> bool {
        match (self.to_json(), other.to_json()) {
            (Ok(lhs), Ok(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl Serialize for ContextValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().map_err(serde::ser::Error::custom)?.serialize(serializer)
    }
}
