//! Long coercion rules
//!
//! Numeric doc values store every value as an `i64`. Script results are
//! narrowed to that representation the same way indexed fields are:
//! - Numbers are truncated toward zero, saturating at the `i64` bounds
//! - Dates become milliseconds since the Unix epoch
//! - Booleans become `1` and `0`
//!
//! Anything else cannot feed a numeric aggregation and is rejected.

use crate::{ScriptValue, ValueKind};
use docvalues_diagnostics::{DV0200, ErrorCode};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Coercion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    /// The value is not a number, date, or boolean
    #[error("Unsupported script value [{value}], expected a number, date, or boolean")]
    UnsupportedValue { value: String, kind: ValueKind },
}

impl CoercionError {
    /// Create an unsupported value error from the offending value
    pub fn unsupported(value: &ScriptValue) -> Self {
        Self::UnsupportedValue {
            value: value.to_string(),
            kind: value.kind(),
        }
    }

    /// Kind of the value that failed to coerce
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::UnsupportedValue { kind, .. } => *kind,
        }
    }

    /// Error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedValue { .. } => DV0200,
        }
    }
}

/// Coercion result
pub type CoercionResult<T> = Result<T, CoercionError>;

/// Coerce a single script value to its `i64` doc value representation.
///
/// `value` is one element: a scalar result or one entry of an array or
/// collection. Sequences and nulls are not elements and fail like any other
/// unsupported kind.
pub fn coerce_to_long(value: &ScriptValue) -> CoercionResult<i64> {
    match value {
        ScriptValue::Integer(i) => Ok(i64::from(*i)),
        ScriptValue::Long(l) => Ok(*l),
        ScriptValue::Double(d) => Ok(truncate_double(*d)),
        ScriptValue::Decimal(d) => Ok(truncate_decimal(d)),
        // Dates are exposed to scripts as instants but stored as epoch millis
        ScriptValue::Instant(dt) => Ok(dt.timestamp_millis()),
        // Booleans share the numeric representation; formatting renders them back
        ScriptValue::Boolean(b) => Ok(i64::from(*b)),
        ScriptValue::Null
        | ScriptValue::String(_)
        | ScriptValue::Map(_)
        | ScriptValue::Array(_)
        | ScriptValue::Collection(_) => Err(CoercionError::unsupported(value)),
    }
}

/// Truncate toward zero. `as` saturates out-of-range values and maps NaN to 0.
#[inline]
fn truncate_double(value: f64) -> i64 {
    value as i64
}

fn truncate_decimal(value: &Decimal) -> i64 {
    value.trunc().to_i64().unwrap_or(if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_integral() {
        assert_eq!(coerce_to_long(&ScriptValue::Integer(-7)), Ok(-7));
        assert_eq!(coerce_to_long(&ScriptValue::Long(i64::MAX)), Ok(i64::MAX));
    }

    #[test]
    fn test_double_truncates_toward_zero() {
        assert_eq!(coerce_to_long(&ScriptValue::Double(3.7)), Ok(3));
        assert_eq!(coerce_to_long(&ScriptValue::Double(-2.2)), Ok(-2));
        assert_eq!(coerce_to_long(&ScriptValue::Double(-0.9)), Ok(0));
    }

    #[test]
    fn test_double_saturates() {
        assert_eq!(coerce_to_long(&ScriptValue::Double(1e300)), Ok(i64::MAX));
        assert_eq!(coerce_to_long(&ScriptValue::Double(f64::NEG_INFINITY)), Ok(i64::MIN));
        assert_eq!(coerce_to_long(&ScriptValue::Double(f64::NAN)), Ok(0));
    }

    #[test]
    fn test_decimal() {
        let d = Decimal::from_str("-12.999").unwrap();
        assert_eq!(coerce_to_long(&ScriptValue::Decimal(d)), Ok(-12));
        assert_eq!(coerce_to_long(&ScriptValue::Decimal(Decimal::MAX)), Ok(i64::MAX));
        assert_eq!(coerce_to_long(&ScriptValue::Decimal(Decimal::MIN)), Ok(i64::MIN));
    }

    #[test]
    fn test_boolean() {
        assert_eq!(coerce_to_long(&ScriptValue::Boolean(true)), Ok(1));
        assert_eq!(coerce_to_long(&ScriptValue::Boolean(false)), Ok(0));
    }

    #[test]
    fn test_unsupported_kinds_share_code() {
        let err = coerce_to_long(&ScriptValue::string("abc")).unwrap_err();
        assert_eq!(err.code(), DV0200);
        assert_eq!(
            err.to_string(),
            "Unsupported script value [abc], expected a number, date, or boolean"
        );

        let nested = ScriptValue::array([ScriptValue::Long(1)]);
        let err = coerce_to_long(&nested).unwrap_err();
        assert_eq!(err.kind(), ValueKind::Array);
        assert_eq!(err.code(), DV0200);
    }
}
