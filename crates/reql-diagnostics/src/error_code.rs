//! ReQL error codes
//!
//! Error code ranges:
//! - RQL0100-RQL0199: Construction errors (coercion, binding, dispatch, typing)
//! - RQL0200-RQL0299: Query document errors

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

    /// Check if this is a construction error (0100-0199)
    pub const fn is_construction_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a query document error (0200-0299)
    pub const fn is_document_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RQL{:04}", self.0)
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

    map.insert(
        100,
        ErrorInfo::new("Unsupported value type")
            .with_help("Only null, booleans, numbers, strings, arrays, objects, symbols and terms can be embedded in a query"),
    );
    map.insert(
        101,
        ErrorInfo::new("Incompatible branch types")
            .with_help("Both branches must produce JSON values, or both must produce sequences"),
    );
    map.insert(
        102,
        ErrorInfo::new("Malformed binding")
            .with_help("Each binding must be a [name, value] pair"),
    );
    map.insert(103, ErrorInfo::new("Unknown operation"));
    map.insert(104, ErrorInfo::new("Invalid argument count"));
    map.insert(105, ErrorInfo::new("Invalid operand category"));
    map.insert(
        200,
        ErrorInfo::new("Invalid query document")
            .with_help(r#"Invocations are written {"$op": name, "args": [...]} and symbols {"$sym": name}"#),
    );

    map
});

pub const RQL0100: ErrorCode = ErrorCode::new(100);
pub const RQL0101: ErrorCode = ErrorCode::new(101);
pub const RQL0102: ErrorCode = ErrorCode::new(102);
pub const RQL0103: ErrorCode = ErrorCode::new(103);
pub const RQL0104: ErrorCode = ErrorCode::new(104);
pub const RQL0105: ErrorCode = ErrorCode::new(105);
pub const RQL0200: ErrorCode = ErrorCode::new(200);
