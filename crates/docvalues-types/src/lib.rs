//! Script value model
//!
//! This crate defines the values a per-document script can hand back and the
//! rules for narrowing them to the `i64` representation used by numeric doc
//! values:
//! - `ScriptValue`, the shape-polymorphic script result (absent, scalar, array, collection)
//! - `ValueCollection`, the counted-iterable contract evaluators implement
//! - `coerce_to_long`, the per-element coercion (numbers, dates, booleans)

pub mod coercion;
pub mod value;

pub use coercion::*;
pub use value::*;
