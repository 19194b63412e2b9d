//! Allocation types shared by `std` and `no_std` builds.
//!
//! The crate always links `alloc`; with the `std` feature these resolve to the
//! very same types exported by `std`.
pub use alloc::collections::BTreeMap;
pub use alloc::string::String;
pub use alloc::sync::Arc;
pub use alloc::vec::Vec;
