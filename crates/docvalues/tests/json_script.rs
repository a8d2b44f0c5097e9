//! End-to-end test over the facade crate
//!
//! A script whose per-document results come from JSON, the way a scripting
//! runtime that speaks JSON would hand them back.

use docvalues::prelude::*;
use docvalues::diagnostics::DV0200;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io;
use std::sync::Arc;

struct JsonScript {
    docs: Vec<serde_json::Value>,
    current: usize,
}

impl ScorerAware for JsonScript {
    fn set_scorer(&mut self, _scorer: Arc<dyn Scorer>) {}
}

impl LeafScript for JsonScript {
    fn set_document(&mut self, doc: DocId) -> io::Result<()> {
        let doc = doc as usize;
        if doc >= self.docs.len() {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "doc out of range"));
        }
        self.current = doc;
        Ok(())
    }

    fn run(&mut self) -> ScriptValue {
        ScriptValue::from(self.docs[self.current].clone())
    }
}

#[test]
fn test_scan_over_json_documents() {
    let script = JsonScript {
        docs: vec![
            json!([3.7, -2.2, 5]),
            json!(null),
            json!(true),
            json!([false, true, true]),
            json!(["a", 1]),
        ],
        current: 0,
    };
    let mut values = ScriptLongValues::new(script);

    assert!(values.advance_exact(0).unwrap());
    assert_eq!(values.values(), &[-2, 3, 5]);

    assert!(!values.advance_exact(1).unwrap());
    assert_eq!(values.doc_value_count(), 0);

    assert!(values.advance_exact(2).unwrap());
    assert_eq!(values.values(), &[1]);

    assert!(values.advance_exact(3).unwrap());
    assert_eq!(values.values(), &[0, 1, 1]);

    let err = values.advance_exact(4).unwrap_err();
    assert_eq!(err.code(), DV0200);
    assert_eq!(
        err.to_string(),
        "Unsupported script value [a], expected a number, date, or boolean"
    );

    let err = values.advance_exact(5).unwrap_err();
    assert!(matches!(err, docvalues::EvalError::Io(_)));
}
