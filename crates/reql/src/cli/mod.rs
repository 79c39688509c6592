//! CLI functionality for the reql tool
//!
//! - Building query documents into serialized terms
//! - Listing operations and aliases
//! - Output formatting

#[cfg(feature = "cli")]
pub mod build;
#[cfg(feature = "cli")]
pub mod ops;
#[cfg(feature = "cli")]
pub mod output;
