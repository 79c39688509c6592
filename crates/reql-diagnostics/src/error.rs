//! ReQL error types

use crate::{ErrorCode, RQL0100, RQL0101, RQL0102, RQL0103, RQL0104, RQL0105, RQL0200};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Query construction cannot proceed
    Error,
    /// Potential issue, construction continues
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic report suitable for surfacing to host-language users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(help) = &self.help {
            write!(f, " ({})", help)?;
        }
        Ok(())
    }
}

/// What an operation rejected about its operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Wrong number of operands
    Arity { expected: String, found: usize },
    /// Operand at `position` has a category the operation does not accept
    Category {
        position: usize,
        expected: String,
        found: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Arity { expected, found } => {
                write!(f, "expected {} argument(s), got {}", expected, found)
            }
            Violation::Category {
                position,
                expected,
                found,
            } => write!(
                f,
                "argument {} must be {}, got {}",
                position, expected, found
            ),
        }
    }
}

/// Query construction error
///
/// Every variant is raised synchronously by the builder call that triggered it
/// and indicates a programming error in the query, not a transient condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReqlError {
    /// A native value has no mapping to a query term
    #[error("{code}: Cannot convert value of type {type_name} to a query term", code = RQL0100)]
    UnsupportedValueType { type_name: String },

    /// Branches of a conditional or union cannot be reconciled to one category
    #[error("{code}: {construct} branches have incompatible types {left} and {right}", code = RQL0101)]
    IncompatibleBranchTypes {
        construct: String,
        left: String,
        right: String,
    },

    /// A binding entry is not a well-formed (name, value) pair
    #[error("{code}: Malformed binding: {message}", code = RQL0102)]
    MalformedBinding { message: String },

    /// Neither a primary operation nor an alias matches
    #[error("{code}: No such operation: {name}", code = RQL0103)]
    UnknownOperation { name: String },

    /// Fixed-arity mismatch or category-incompatible operand
    #[error("{}: {operation}: {violation}", .violation.code())]
    ArityOrCategoryViolation {
        operation: String,
        violation: Violation,
    },

    /// A query document does not describe a query
    #[error("{code}: Invalid query document: {message}", code = RQL0200)]
    InvalidDocument { message: String },
}

impl Violation {
    /// Error code reported for this violation
    pub fn code(&self) -> ErrorCode {
        match self {
            Violation::Arity { .. } => RQL0104,
            Violation::Category { .. } => RQL0105,
        }
    }
}

impl ReqlError {
    /// Create an unsupported value type error
    pub fn unsupported_value(type_name: impl Into<String>) -> Self {
        Self::UnsupportedValueType {
            type_name: type_name.into(),
        }
    }

    /// Create an incompatible branch types error
    pub fn incompatible_branches(
        construct: impl Into<String>,
        left: impl ToString,
        right: impl ToString,
    ) -> Self {
        Self::IncompatibleBranchTypes {
            construct: construct.into(),
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Create a malformed binding error
    pub fn malformed_binding(message: impl Into<String>) -> Self {
        Self::MalformedBinding {
            message: message.into(),
        }
    }

    /// Create an unknown operation error
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    /// Create an invalid query document error
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Create an arity error
    pub fn arity(operation: impl Into<String>, expected: impl Into<String>, found: usize) -> Self {
        Self::ArityOrCategoryViolation {
            operation: operation.into(),
            violation: Violation::Arity {
                expected: expected.into(),
                found,
            },
        }
    }

    /// Create an operand category error
    pub fn category(
        operation: impl Into<String>,
        position: usize,
        expected: impl Into<String>,
        found: impl ToString,
    ) -> Self {
        Self::ArityOrCategoryViolation {
            operation: operation.into(),
            violation: Violation::Category {
                position,
                expected: expected.into(),
                found: found.to_string(),
            },
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedValueType { .. } => RQL0100,
            Self::IncompatibleBranchTypes { .. } => RQL0101,
            Self::MalformedBinding { .. } => RQL0102,
            Self::UnknownOperation { .. } => RQL0103,
            Self::ArityOrCategoryViolation { violation, .. } => violation.code(),
            Self::InvalidDocument { .. } => RQL0200,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = self.code();
        let diag = Diagnostic::error(code, self.to_string());
        match code.info().help {
            Some(help) => diag.with_help(help),
            None => diag,
        }
    }
}
