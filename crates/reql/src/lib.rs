//! ReQL query construction for Rust
//!
//! This crate builds the typed query tree that a ReQL driver serializes and
//! sends to the server:
//! - Coercion of native values into terms
//! - Named builders for every operation, plus name/alias dispatch
//! - Lexical bindings and the implicit row variable
//! - Category checking and branch unification
//!
//! # Example
//!
//! ```ignore
//! use reql::{QueryBuilder, Value};
//!
//! let r = QueryBuilder::new();
//! let ctx = r.context();
//! let adults = r.filter(&ctx, r.table("users"), r.ge(&ctx, [Value::symbol("age"), 18.into()])?)?;
//! let json = serde_json::to_string(&adults)?;
//! ```
//!
//! # Operator sugar
//!
//! Adapters that map infix operators (`a + b`) onto builders may only do so
//! when the left operand is already a [`Term`]. A plain number on the left
//! would be evaluated locally and never reach the builder.

// Re-export all public APIs from internal crates
pub use reql_ast as ast;
pub use reql_builder as builder;
pub use reql_diagnostics as diagnostics;
pub use reql_types as types;

// Convenience re-exports
pub use reql_ast::{Category, Datum, MetaOp, Operation, Term, TermKind};
pub use reql_builder::QueryBuilder;
pub use reql_diagnostics::{ReqlError, Result};
pub use reql_types::{BuildContext, BuilderConfig, TableHandle, Value};

pub mod document;

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
