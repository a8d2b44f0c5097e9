//! Script-backed numeric doc values for Rust
//!
//! This crate turns per-document script results into sorted numeric doc values:
//! - Script values of any shape (null, scalar, array, collection)
//! - Coercion of numbers, dates, and booleans to `i64`
//! - Sorted, reusable per-document buffers for aggregations
//!
//! # Example
//!
//! ```ignore
//! use docvalues::prelude::*;
//!
//! let mut values = ScriptLongValues::new(script);
//! values.set_scorer(scorer);
//! if values.advance_exact(doc)? {
//!     let sorted: &[i64] = values.values();
//! }
//! ```

// Re-export all public APIs from internal crates
pub use docvalues_diagnostics as diagnostics;
pub use docvalues_script as script;
pub use docvalues_types as types;

// Convenience re-exports
pub use docvalues_script::{EvalError, EvalResult, ScriptLongValues, SortedNumericDocValues};
pub use docvalues_types::{ScriptValue, coerce_to_long};

/// Commonly used traits and types
pub mod prelude {
    pub use docvalues_script::{
        AdapterOptions, DocId, LeafScript, Scorer, ScorerAware, ScriptLongValues,
        SizeMismatchPolicy, SortedNumericDocValues,
    };
    pub use docvalues_types::{ScriptValue, ValueCollection, ValueSet};
}
