//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.wrap_err()` and `.err_context_with()` for futures, mirroring
//! the sync [`ResultExt`](crate::traits::ResultExt) trait.

use core::future::Future;

use crate::context::Context;

use super::context_future::WrapFuture;

/// Extension trait for wrapping the errors of result-producing futures.
///
/// # Examples
///
/// ```rust,no_run
/// use serr::async_ext::FutureResultExt;
/// use serr::{context, StructuredResult};
///
/// #[derive(Debug)]
/// struct User;
///
/// #[derive(Debug)]
/// struct ApiError;
///
/// async fn fetch_from_db(_id: u64) -> Result<User, ApiError> {
///     Err(ApiError)
/// }
///
/// async fn fetch_user(id: u64) -> StructuredResult<User, ApiError> {
///     fetch_from_db(id)
///         .err_context_with(|| context! { "user_id" => [id] })
///         .await
/// }
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the future's error with an empty context.
    fn wrap_err(self) -> WrapFuture<Self, fn() -> Context> {
        self.err_context_with(Context::new as fn() -> Context)
    }

    /// Wraps the future's error with a lazily built context.
    ///
    /// The closure is only called when the future resolves to an error.
    fn err_context_with<F>(self, f: F) -> WrapFuture<Self, F>
    where
        F: FnOnce() -> Context;
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn err_context_with<F>(self, f: F) -> WrapFuture<Self, F>
    where
        F: FnOnce() -> Context,
    {
        WrapFuture::new(self, f)
    }
}
