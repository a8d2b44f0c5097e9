//! Doc values error codes following a structured numbering system
//!
//! Error code ranges:
//! - DV0200-DV0299: Evaluation errors (coercion, adapter invariants)
//! - DV0400-DV0499: System errors (I/O, configuration)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is an evaluation error (0200-0299)
    pub const fn is_evaluation_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DV{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Evaluation errors (0200-0299)
    map.insert(
        200,
        ErrorInfo::new("Unsupported script value")
            .with_help("Scripts feeding numeric aggregations must return numbers, dates, or booleans"),
    );
    map.insert(
        201,
        ErrorInfo::new("Collection size mismatch")
            .with_help("The collection reported a size that differs from the number of elements it yielded"),
    );

    // System errors (0400-0499)
    map.insert(400, ErrorInfo::new("I/O error"));
    map.insert(401, ErrorInfo::new("Configuration error"));

    map
});

// Evaluation errors
pub const DV0200: ErrorCode = ErrorCode::new(200);
pub const DV0201: ErrorCode = ErrorCode::new(201);

// System errors
pub const DV0400: ErrorCode = ErrorCode::new(400);
pub const DV0401: ErrorCode = ErrorCode::new(401);
