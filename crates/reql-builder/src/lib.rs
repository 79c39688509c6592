//! ReQL Query Builder
//!
//! Builds typed query terms from native values. Covers:
//!
//! - **Arithmetic**: add, subtract, multiply, divide, modulo
//! - **Logical**: any, all, not
//! - **Comparison**: eq, ne, lt, le, gt, ge (variadic chains)
//! - **Objects**: attribute access, pick, without, merge, append,
//!   and the implicit-variable forms of each
//! - **Sequences**: union, to_stream, to_array, map, filter, count, nth
//! - **Control**: if, let, func
//! - **Escapes**: javascript, raw JSON, error
//! - **Namespaces**: databases, tables and their admin commands
//!
//! # Example
//!
//! ```ignore
//! use reql_builder::QueryBuilder;
//!
//! let builder = QueryBuilder::new();
//! let ctx = builder.context();
//! let term = builder.invoke(&ctx, "plus", vec![1.into(), 2.into()])?;
//! assert_eq!(term, builder.add(&ctx, [1, 2])?);
//! ```
//!
//! # Architecture
//!
//! - `QueryBuilder`: entry point; owns the configuration
//! - `registry`: operation names, aliases and arity rules
//! - `operators`: one `impl QueryBuilder` block per operation family
//!
//! Every builder returns `Result<Term>`: arity, category and binding
//! violations are reported at construction time, never deferred.

pub mod builder;
pub mod operators;
pub mod registry;

pub use builder::QueryBuilder;
pub use registry::{Arity, Form, OperationSpec, aliases, operation_names, resolve};
