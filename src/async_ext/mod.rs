//! Async extensions for serr.
//!
//! These utilities keep the lazy philosophy of the sync helpers: context for
//! a future's error is only built when the future actually fails.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! serr = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use serr::async_ext::FutureResultExt;
//!
//! async fn fetch_user(id: u64) -> StructuredResult<User, ApiError> {
//!     fetch_from_db(id)
//!         .err_context_with(|| context! { "user_id" => [id] })
//!         .await
//! }
//! ```

mod context_future;
mod future_ext;

pub use context_future::WrapFuture;
pub use future_ext::FutureResultExt;
