//! Script values - runtime representation of what a per-document script returns
//!
//! This module defines the ScriptValue enum and the collection contract used by
//! evaluators to hand back multi-valued results.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// The value a script produces for the current document.
///
/// Evaluators normalize their native results into one of these shapes: absent
/// (`Null`), a scalar, a fixed-length `Array`, or a counted `Collection`.
#[derive(Debug, Clone)]
pub enum ScriptValue {
    /// No value for the document
    Null,
    /// Boolean value
    Boolean(bool),
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer
    Long(i64),
    /// Double precision floating point
    Double(f64),
    /// Arbitrary precision decimal
    Decimal(Decimal),
    /// Instant in time, with the offset the script exposed it in
    Instant(DateTime<FixedOffset>),
    /// String value
    String(String),
    /// Object with named entries
    Map(IndexMap<String, ScriptValue>),
    /// Fixed-size array of values
    Array(Vec<ScriptValue>),
    /// Iterable collection with a reported size
    Collection(Arc<dyn ValueCollection>),
}

/// Dynamic kind of a script value, as named in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    Date,
    String,
    Object,
    Array,
    Collection,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::Date => write!(f, "date"),
            Self::String => write!(f, "string"),
            Self::Object => write!(f, "object"),
            Self::Array => write!(f, "array"),
            Self::Collection => write!(f, "collection"),
        }
    }
}

/// Shape of a script result, which decides how many values a document has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueShape {
    /// No value
    Absent,
    /// A single value
    Scalar,
    /// Fixed-size array of the given length
    Array(usize),
    /// Collection reporting the given size
    Collection(usize),
}

impl ScriptValue {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get the dynamic kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) | Self::Long(_) | Self::Double(_) | Self::Decimal(_) => {
                ValueKind::Number
            }
            Self::Instant(_) => ValueKind::Date,
            Self::String(_) => ValueKind::String,
            Self::Map(_) => ValueKind::Object,
            Self::Array(_) => ValueKind::Array,
            Self::Collection(_) => ValueKind::Collection,
        }
    }

    /// Get the shape of this value
    pub fn shape(&self) -> ValueShape {
        match self {
            Self::Null => ValueShape::Absent,
            Self::Array(values) => ValueShape::Array(values.len()),
            Self::Collection(values) => ValueShape::Collection(values.len()),
            _ => ValueShape::Scalar,
        }
    }

    /// Try to get as Boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as String
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Create a null value
    pub fn null() -> Self {
        Self::Null
    }

    /// Create a long value
    pub fn long(value: i64) -> Self {
        Self::Long(value)
    }

    /// Create a double value
    pub fn double(value: f64) -> Self {
        Self::Double(value)
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create an instant `millis` milliseconds after the Unix epoch, in UTC.
    ///
    /// Returns `None` when the instant is outside chrono's representable range.
    pub fn instant_from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|dt| Self::Instant(dt.fixed_offset()))
    }

    /// Create an array value
    pub fn array(values: impl IntoIterator<Item = ScriptValue>) -> Self {
        Self::Array(values.into_iter().collect())
    }

    /// Wrap a collection
    pub fn collection(values: impl ValueCollection + 'static) -> Self {
        Self::Collection(Arc::new(values))
    }
}

impl fmt::Display for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Long(l) => write!(f, "{}", l),
            Self::Double(d) => write!(f, "{}", d),
            Self::Decimal(d) => write!(f, "{}", d),
            Self::Instant(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::String(s) => write!(f, "{}", s),
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                write!(f, "}}")
            }
            Self::Array(values) => write_sequence(f, values.iter()),
            Self::Collection(values) => write_sequence(f, values.values()),
        }
    }
}

fn write_sequence<'a>(
    f: &mut fmt::Formatter<'_>,
    values: impl Iterator<Item = &'a ScriptValue>,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in values.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    write!(f, "]")
}

impl PartialEq for ScriptValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            (Self::Instant(a), Self::Instant(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Collection(a), Self::Collection(b)) => {
                a.len() == b.len() && a.values().eq(b.values())
            }
            _ => false,
        }
    }
}

// ============================================================================
// Collections
// ============================================================================

/// A counted iterable of script values.
///
/// `len` is the size the collection reports up front; `values` is a single
/// forward pass over its elements. Implementations are expected to keep the
/// two consistent, but consumers must not assume they do.
pub trait ValueCollection: fmt::Debug + Send + Sync {
    /// Number of elements the collection reports holding
    fn len(&self) -> usize;

    /// Check if the collection reports no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the elements in iteration order
    fn values(&self) -> Box<dyn Iterator<Item = &ScriptValue> + '_>;

    /// Whether iteration order is meaningful
    fn is_ordered(&self) -> bool {
        true
    }
}

impl ValueCollection for Vec<ScriptValue> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn values(&self) -> Box<dyn Iterator<Item = &ScriptValue> + '_> {
        Box::new(self.iter())
    }
}

impl ValueCollection for VecDeque<ScriptValue> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn values(&self) -> Box<dyn Iterator<Item = &ScriptValue> + '_> {
        Box::new(self.iter())
    }
}

/// Unordered collection of distinct script values.
///
/// Values are compared with `ScriptValue` equality; iteration follows
/// insertion order but callers should not rely on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSet {
    values: Vec<ScriptValue>,
}

impl ValueSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning `false` if an equal value was already present
    pub fn insert(&mut self, value: ScriptValue) -> bool {
        if self.values.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Check if an equal value is present
    pub fn contains(&self, value: &ScriptValue) -> bool {
        self.values.contains(value)
    }
}

impl FromIterator<ScriptValue> for ValueSet {
    fn from_iter<I: IntoIterator<Item = ScriptValue>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl ValueCollection for ValueSet {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn values(&self) -> Box<dyn Iterator<Item = &ScriptValue> + '_> {
        Box::new(self.values.iter())
    }

    fn is_ordered(&self) -> bool {
        false
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for ScriptValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for ScriptValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f64> for ScriptValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<Decimal> for ScriptValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<FixedOffset>> for ScriptValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Instant(value)
    }
}

impl From<DateTime<Utc>> for ScriptValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value.fixed_offset())
    }
}

impl From<Vec<ScriptValue>> for ScriptValue {
    fn from(values: Vec<ScriptValue>) -> Self {
        Self::Array(values)
    }
}

impl<T: Into<ScriptValue>> From<Option<T>> for ScriptValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<JsonValue> for ScriptValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Boolean(b),
            JsonValue::Number(n) => {
                if let Some(l) = n.as_i64() {
                    Self::Long(l)
                } else if let Some(u) = n.as_u64() {
                    Self::Decimal(Decimal::from(u))
                } else {
                    Self::Double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(values) => Self::Array(values.into_iter().map(Self::from).collect()),
            JsonValue::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}
