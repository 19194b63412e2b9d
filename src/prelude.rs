//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use serr::prelude::*;
//!
//! fn read_config(path: &str) -> StructuredResult<String, std::io::Error> {
//!     std::fs::read_to_string(path).err_context("path", [path.to_string()])
//! }
//!
//! let err = read_config("/missing/config.toml").unwrap_err();
//! assert!(err.to_string().starts_with("Error: "));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`context!`]
//! - **Types**: [`Context`], [`ContextValue`], [`StructuredError`], [`StructuredResult`]
//! - **Formatters**: [`ContextFormatter`], [`JsonFormatter`], [`KeyValueFormatter`]
//! - **Functions**: [`wrap`], [`wrap_with`]
//! - **Traits**: [`ResultExt`], [`StructuredResultExt`]

// Macros
pub use crate::context;

// Core types
pub use crate::context::{wrap, wrap_with, Context};
pub use crate::types::{
    ContextFormatter, ContextValue, JsonFormatter, KeyValueFormatter, StructuredError,
    StructuredResult,
};

// Traits
pub use crate::traits::{ResultExt, StructuredResultExt};
