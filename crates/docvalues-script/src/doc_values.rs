//! Consumer-facing numeric doc values contract

use crate::error::EvalResult;
use crate::script::DocId;

/// Per-document access to zero or more sorted `i64` values.
///
/// Aggregations call `advance_exact` for each matching document, then read
/// `doc_value_count` values through `next_value`. Values come back in
/// ascending order with duplicates kept.
pub trait SortedNumericDocValues {
    /// Position on `doc`; returns whether the document has any value
    fn advance_exact(&mut self, doc: DocId) -> EvalResult<bool>;

    /// Number of values for the current document
    fn doc_value_count(&self) -> usize;

    /// Next value of the current document, `None` once exhausted
    fn next_value(&mut self) -> Option<i64>;

    /// All values of the current document
    fn values(&self) -> &[i64];
}
