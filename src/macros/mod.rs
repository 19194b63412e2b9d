//! Ergonomic macros for building [`Context`](crate::Context) literals.
//!
//! - [`macro@crate::context`] - Builds a context from `key => [values]` pairs.
//!   Values inside one sequence may have different types.
//!
//! # Examples
//!
//! ```
//! use serr::{context, Context};
//!
//! let base: Context = context! {
//!     "user" => ["alice"],
//!     "attempt" => [1, 2],
//! };
//!
//! let err = base.wrap("login failed");
//! assert!(err.to_string().contains(r#""attempt":[1,2]"#));
//! ```

/// Builds a [`Context`](crate::Context) from a map literal.
///
/// Every value is erased with [`ContextValue::new`](crate::ContextValue::new),
/// so a single sequence can mix types. Repeated keys append, exactly like
/// [`Context::add`](crate::Context::add).
///
/// # Syntax
///
/// - `context!{}` - an empty context
/// - `context!{ key => [v1, v2, ...], ... }` - keys are anything `Into<String>`
///
/// # Examples
///
/// ```
/// use serr::context;
/// use serde_json::json;
///
/// let ctx = context! {
///     "mixed" => ["text", 42, true],
///     "empty" => [],
///     "mixed" => [1.5],
/// };
///
/// assert_eq!(ctx.to_json(), json!({ "empty": [], "mixed": ["text", 42, true, 1.5] }));
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::Context::new()
    };
    ($($key:expr => [$($value:expr),* $(,)?]),+ $(,)?) => {{
        let mut ctx = $crate::Context::new();
        $(
            ctx.add_values($key, [$($crate::ContextValue::new($value)),*]);
        )+
        ctx
    }};
}
