//! Adapter options

use crate::error::{EvalError, EvalResult};
use serde::{Deserialize, Serialize};

/// What to do when a collection yields a different number of values than it reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMismatchPolicy {
    /// Fail the document with `EvalError::CollectionSizeMismatch`
    #[default]
    Fail,
    /// Keep the values actually yielded and log a warning
    Trust,
}

/// Options for `ScriptLongValues`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterOptions {
    /// Handling of collections whose reported size is wrong
    pub size_mismatch: SizeMismatchPolicy,
    /// Values to reserve in the buffer up front
    pub initial_capacity: usize,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            size_mismatch: SizeMismatchPolicy::Fail,
            initial_capacity: 1,
        }
    }
}

impl AdapterOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size mismatch policy
    pub fn with_size_mismatch(mut self, policy: SizeMismatchPolicy) -> Self {
        self.size_mismatch = policy;
        self
    }

    /// Set the initial buffer capacity
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Load options from a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> EvalResult<Self> {
        serde_json::from_str(json).map_err(|e| EvalError::invalid_options(e.to_string()))
    }
}
