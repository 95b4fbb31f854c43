//! Shared error types, the crate-wide result alias and path-safety checks.
pub mod error;
pub mod path_safety;
pub mod result;

pub use result::Result;
