//! Diagnostics for scripted doc values
//!
//! This crate provides the structured error codes used by the value types and
//! the script adapter, so that failures can be classified without matching on
//! message text.

mod error_code;

pub use error_code::*;
