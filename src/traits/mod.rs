//! Extension traits for attaching structured context.
//!
//! - [`ResultExt`]: wraps the error of any `Result` into a
//!   [`StructuredError`](crate::StructuredError)
//! - [`StructuredResultExt`]: keeps adding context to an already wrapped error
//!
//! # Examples
//!
//! ```
//! use serr::traits::{ResultExt, StructuredResultExt};
//!
//! let result: Result<i32, &str> = Err("failed");
//! let err = result
//!     .wrap_err()
//!     .add_err_context("operation", ["sync"])
//!     .unwrap_err();
//! assert_eq!(err.context().len(), 1);
//! ```

pub mod result_ext;

pub use result_ext::{ResultExt, StructuredResultExt};
