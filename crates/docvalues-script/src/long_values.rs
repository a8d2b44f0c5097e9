//! Sorted numeric doc values computed by a script
//!
//! For each document the script result is classified by shape, every element
//! is coerced to a long, and the buffer is sorted. A document whose script
//! returns null has no values.

use crate::buffer::SortingNumericBuffer;
use crate::doc_values::SortedNumericDocValues;
use crate::error::{EvalError, EvalResult};
use crate::options::{AdapterOptions, SizeMismatchPolicy};
use crate::script::{DocId, LeafScript, Scorer, ScorerAware};
use docvalues_types::{ScriptValue, ValueCollection, coerce_to_long};
use log::{debug, trace, warn};
use std::sync::Arc;

/// `SortedNumericDocValues` backed by a `LeafScript`.
///
/// One instance serves one scan over one segment. The buffer is owned by the
/// adapter and reused across documents, so values read for a document are only
/// valid until the next call to `advance_exact`.
pub struct ScriptLongValues<S> {
    script: S,
    buffer: SortingNumericBuffer,
    options: AdapterOptions,
}

impl<S: LeafScript> ScriptLongValues<S> {
    /// Create doc values over `script` with default options
    pub fn new(script: S) -> Self {
        Self::with_options(script, AdapterOptions::default())
    }

    /// Create doc values over `script` with the given options
    pub fn with_options(script: S, options: AdapterOptions) -> Self {
        debug!("creating script long values with {:?}", options);
        Self {
            script,
            buffer: SortingNumericBuffer::with_capacity(options.initial_capacity),
            options,
        }
    }

    /// Options in effect
    pub fn options(&self) -> &AdapterOptions {
        &self.options
    }

    /// The per-document value buffer
    pub fn buffer(&self) -> &SortingNumericBuffer {
        &self.buffer
    }

    /// The wrapped script
    pub fn script(&self) -> &S {
        &self.script
    }

    /// Unwrap the script
    pub fn into_script(self) -> S {
        self.script
    }

    /// Fill the buffer from a script result, returning whether the document has values
    fn fill(&mut self, value: &ScriptValue) -> EvalResult<bool> {
        match value {
            ScriptValue::Null => return Ok(false),
            ScriptValue::Array(elements) => {
                self.buffer.resize(elements.len());
                for (slot, element) in self.buffer.values_mut().iter_mut().zip(elements) {
                    *slot = coerce_to_long(element)?;
                }
                self.buffer.sort();
            }
            ScriptValue::Collection(elements) => {
                self.fill_collection(&**elements)?;
                self.buffer.sort();
            }
            scalar => {
                self.buffer.resize(1);
                self.buffer.set(0, coerce_to_long(scalar)?);
            }
        }
        Ok(true)
    }

    /// Single forward pass over a collection, appended in iteration order.
    ///
    /// Storage follows what the iterator yields, never the reported size alone,
    /// so a collection that overstates its length cannot force an allocation.
    fn fill_collection(&mut self, collection: &dyn ValueCollection) -> EvalResult<()> {
        let declared = collection.len();
        let mut elements = collection.values();
        let (lower, upper) = elements.size_hint();
        self.buffer.reserve(declared.min(upper.unwrap_or(lower)));

        let mut actual = 0;
        while let Some(element) = elements.next() {
            if actual == declared && self.options.size_mismatch == SizeMismatchPolicy::Fail {
                let yielded = actual + 1 + elements.count();
                return Err(EvalError::size_mismatch(declared, yielded));
            }
            self.buffer.push(coerce_to_long(element)?);
            actual += 1;
        }

        if actual != declared {
            match self.options.size_mismatch {
                SizeMismatchPolicy::Fail => return Err(EvalError::size_mismatch(declared, actual)),
                SizeMismatchPolicy::Trust => {
                    warn!("collection reported {} values but yielded {}", declared, actual);
                }
            }
        }
        Ok(())
    }
}

impl<S: LeafScript> SortedNumericDocValues for ScriptLongValues<S> {
    fn advance_exact(&mut self, doc: DocId) -> EvalResult<bool> {
        self.buffer.clear();
        self.script.set_document(doc)?;
        let value = self.script.run();

        match self.fill(&value) {
            Ok(has_values) => {
                trace!(
                    "doc {}: {:?} -> {} values",
                    doc,
                    value.shape(),
                    self.buffer.doc_value_count()
                );
                Ok(has_values)
            }
            Err(e) => {
                // Values written before the failure are not a valid result
                self.buffer.clear();
                Err(e)
            }
        }
    }

    fn doc_value_count(&self) -> usize {
        self.buffer.doc_value_count()
    }

    fn next_value(&mut self) -> Option<i64> {
        self.buffer.next_value()
    }

    fn values(&self) -> &[i64] {
        self.buffer.as_slice()
    }
}

impl<S: LeafScript> ScorerAware for ScriptLongValues<S> {
    fn set_scorer(&mut self, scorer: Arc<dyn Scorer>) {
        debug!("rebinding script scorer");
        self.script.set_scorer(scorer);
    }
}
