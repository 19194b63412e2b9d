//! Future wrapper that builds structured context only on failure.
//!
//! [`WrapFuture`] wraps a `Future<Output = Result<T, E>>` and turns an error
//! into a [`StructuredError`] when the inner future resolves to `Err`.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context as TaskContext, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::context::Context;
use crate::types::StructuredError;

pin_project! {
    /// A Future wrapper that attaches structured context lazily.
    ///
    /// The context closure is only evaluated when the inner future resolves to
    /// an error, so the success path allocates nothing.
    ///
    /// # Cancel Safety
    ///
    /// `WrapFuture` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serr::async_ext::FutureResultExt;
    /// use serr::{context, StructuredResult};
    ///
    /// async fn example() -> StructuredResult<i32, &'static str> {
    ///     async { Err("failed") }
    ///         .err_context_with(|| context! { "operation" => ["example"] })
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct WrapFuture<Fut, F> {
        #[pin]
        future: Fut,
        context_fn: Option<F>,
    }
}

impl<Fut, F> WrapFuture<Fut, F> {
    /// Creates a new `WrapFuture` from a future and a context generator.
    #[inline]
    pub fn new(future: Fut, context_fn: F) -> Self {
        Self { future, context_fn: Some(context_fn) }
    }
}

impl<Fut, F, T, E> Future for WrapFuture<Fut, F>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce() -> Context,
{
    type Output = Result<T, StructuredError<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            res.map_err(|err| {
                // A second completion has no closure left; fall back to an empty base.
                let base = this.context_fn.take().map(|f| f()).unwrap_or_default();
                base.wrap(err)
            })
        })
    }
}

impl<Fut, F, T, E> FusedFuture for WrapFuture<Fut, F>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    F: FnOnce() -> Context,
{
    fn is_terminated(&self) -> bool {
        self.context_fn.is_none() || self.future.is_terminated()
    }
}
