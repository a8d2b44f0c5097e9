//! Evaluation errors for script-backed doc values

use docvalues_diagnostics::{DV0201, DV0400, DV0401, ErrorCode};
use docvalues_types::CoercionError;
use std::io;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while producing doc values from a script
#[derive(Debug, Error)]
pub enum EvalError {
    /// A script returned a value that cannot be stored as a long
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    /// A collection yielded a different number of elements than it reported
    #[error("Collection reported {declared} values but yielded {actual}")]
    CollectionSizeMismatch { declared: usize, actual: usize },

    /// Binding the script to a document failed
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Adapter options could not be loaded
    #[error("Invalid adapter options: {message}")]
    InvalidOptions { message: String },
}

impl EvalError {
    /// Create a collection size mismatch error
    pub fn size_mismatch(declared: usize, actual: usize) -> Self {
        Self::CollectionSizeMismatch { declared, actual }
    }

    /// Create an invalid options error
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Check if this error was caused by an unsupported script value
    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, Self::Coercion(CoercionError::UnsupportedValue { .. }))
    }

    /// Error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Coercion(e) => e.code(),
            Self::CollectionSizeMismatch { .. } => DV0201,
            Self::Io(_) => DV0400,
            Self::InvalidOptions { .. } => DV0401,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docvalues_diagnostics::DV0200;
    use docvalues_types::ScriptValue;

    #[test]
    fn test_coercion_message_passes_through() {
        let err = EvalError::from(CoercionError::unsupported(&ScriptValue::string("x")));
        assert!(err.is_unsupported_value());
        assert_eq!(err.code(), DV0200);
        assert_eq!(
            err.to_string(),
            "Unsupported script value [x], expected a number, date, or boolean"
        );
    }

    #[test]
    fn test_coercion_code_matches_source() {
        let source = CoercionError::unsupported(&ScriptValue::array([ScriptValue::Long(1)]));
        let code = source.code();
        assert_eq!(EvalError::from(source).code(), code);
    }

    #[test]
    fn test_io_is_transparent() {
        let err = EvalError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "segment closed"));
        assert_eq!(err.code(), DV0400);
        assert_eq!(err.to_string(), "segment closed");
        assert!(matches!(err, EvalError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_size_mismatch() {
        let err = EvalError::size_mismatch(3, 2);
        assert_eq!(err.code(), DV0201);
        assert_eq!(err.to_string(), "Collection reported 3 values but yielded 2");
    }
}
