//! Mock implementations for testing
//!
//! Provides a `LeafScript` backed by a per-document value table, with
//! injectable binding failures and a recorded scorer.

use docvalues_script::{DocId, LeafScript, Scorer, ScorerAware};
use docvalues_types::{ScriptValue, ValueCollection};
use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Arc;

/// Mock script returning a configured value per document
#[derive(Default)]
pub struct MockScript {
    values: HashMap<DocId, ScriptValue>,
    failing_docs: HashSet<DocId>,
    current: Option<DocId>,
    scorer: Option<Arc<dyn Scorer>>,
    pub set_document_calls: usize,
    pub run_calls: usize,
}

impl MockScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the value returned for a document
    pub fn with_value(mut self, doc: DocId, value: impl Into<ScriptValue>) -> Self {
        self.values.insert(doc, value.into());
        self
    }

    /// Make binding to a document fail with an I/O error
    pub fn failing_on(mut self, doc: DocId) -> Self {
        self.failing_docs.insert(doc);
        self
    }

    pub fn current(&self) -> Option<DocId> {
        self.current
    }

    pub fn scorer(&self) -> Option<&Arc<dyn Scorer>> {
        self.scorer.as_ref()
    }
}

impl ScorerAware for MockScript {
    fn set_scorer(&mut self, scorer: Arc<dyn Scorer>) {
        self.scorer = Some(scorer);
    }
}

impl LeafScript for MockScript {
    fn set_document(&mut self, doc: DocId) -> io::Result<()> {
        self.set_document_calls += 1;
        if self.failing_docs.contains(&doc) {
            return Err(io::Error::other(format!("cannot read doc {doc}")));
        }
        self.current = Some(doc);
        Ok(())
    }

    fn run(&mut self) -> ScriptValue {
        self.run_calls += 1;
        self.current
            .and_then(|doc| self.values.get(&doc).cloned())
            .unwrap_or(ScriptValue::Null)
    }
}

/// Scorer with a fixed position and score
pub struct FixedScorer {
    pub doc: DocId,
    pub score: f32,
}

impl Scorer for FixedScorer {
    fn doc_id(&self) -> DocId {
        self.doc
    }

    fn score(&self) -> f32 {
        self.score
    }
}

/// Collection whose reported size does not match its contents
#[derive(Debug)]
pub struct MisreportedCollection {
    pub reported: usize,
    pub elements: Vec<ScriptValue>,
}

impl ValueCollection for MisreportedCollection {
    fn len(&self) -> usize {
        self.reported
    }

    fn values(&self) -> Box<dyn Iterator<Item = &ScriptValue> + '_> {
        Box::new(self.elements.iter())
    }

    fn is_ordered(&self) -> bool {
        false
    }
}
