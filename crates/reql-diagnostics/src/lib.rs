//! ReQL diagnostics and error handling
//!
//! This crate provides the error infrastructure shared by every construction
//! layer: stable error codes, the [`ReqlError`] taxonomy and a serializable
//! [`Diagnostic`] report.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for query construction
pub type Result<T> = std::result::Result<T, ReqlError>;
