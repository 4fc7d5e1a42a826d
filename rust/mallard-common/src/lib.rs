//! Core definitions (errors and common data structures), relied upon by all mallard-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use result::Result;
