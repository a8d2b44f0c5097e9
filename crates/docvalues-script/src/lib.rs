//! Script-backed numeric doc values
//!
//! This crate adapts a per-document script into sorted numeric doc values, the
//! form numeric aggregations consume: for every document, zero or more `i64`
//! values in ascending order.
//!
//! # Example
//!
//! ```ignore
//! use docvalues_script::{ScriptLongValues, SortedNumericDocValues};
//!
//! let mut values = ScriptLongValues::new(script);
//! if values.advance_exact(doc)? {
//!     for _ in 0..values.doc_value_count() {
//!         let value = values.next_value();
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! - `LeafScript`: the script collaborator, bound to one segment
//! - `SortingNumericBuffer`: reusable per-document value storage
//! - `ScriptLongValues`: runs the script, coerces and sorts its result
//! - `AdapterOptions`: tunables, loadable from JSON

pub mod buffer;
pub mod doc_values;
pub mod error;
pub mod long_values;
pub mod options;
pub mod script;

pub use buffer::SortingNumericBuffer;
pub use doc_values::SortedNumericDocValues;
pub use error::{EvalError, EvalResult};
pub use long_values::ScriptLongValues;
pub use options::{AdapterOptions, SizeMismatchPolicy};
pub use script::{DocId, LeafScript, Scorer, ScorerAware};
