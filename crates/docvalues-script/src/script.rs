//! Script collaborator contracts
//!
//! A `LeafScript` is a compiled script bound to one segment. The adapter moves
//! it from document to document and asks it for a value each time.

use docvalues_types::ScriptValue;
use std::io;
use std::sync::Arc;

/// Segment-local document ordinal
pub type DocId = u32;

/// Scoring context a script may read while it runs
pub trait Scorer: Send + Sync {
    /// Document the scorer is currently positioned on
    fn doc_id(&self) -> DocId;

    /// Score of the current document
    fn score(&self) -> f32;
}

/// Something that reads scores and must be told when the scorer changes
pub trait ScorerAware {
    /// Rebind to a new scoring context
    fn set_scorer(&mut self, scorer: Arc<dyn Scorer>);
}

/// A script bound to one segment, evaluated one document at a time
pub trait LeafScript: ScorerAware {
    /// Position the script on `doc`
    fn set_document(&mut self, doc: DocId) -> io::Result<()>;

    /// Evaluate the script for the current document
    fn run(&mut self) -> ScriptValue;
}

impl<S: LeafScript + ?Sized> ScorerAware for Box<S> {
    fn set_scorer(&mut self, scorer: Arc<dyn Scorer>) {
        (**self).set_scorer(scorer);
    }
}

impl<S: LeafScript + ?Sized> LeafScript for Box<S> {
    fn set_document(&mut self, doc: DocId) -> io::Result<()> {
        (**self).set_document(doc)
    }

    fn run(&mut self) -> ScriptValue {
        (**self).run()
    }
}
