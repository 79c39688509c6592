//! ReQL value coercion and typing
//!
//! This crate turns native host values into query terms and enforces the
//! category discipline between them:
//! - [`Value`]: the closed set of values a host can hand to the builder
//! - [`coerce`]: value to term conversion
//! - [`Scope`] and [`BuildContext`]: lexical bindings and the implicit variable
//! - [`unify`]: category unification for conditionals and unions
//! - [`BuilderConfig`]: construction settings

pub mod coercion;
pub mod config;
pub mod scope;
pub mod unify;
pub mod value;

pub use coercion::{coerce, coerce_all, coerce_symbol};
pub use config::BuilderConfig;
pub use scope::{BuildContext, Scope};
pub use unify::{unify, unify_pair};
pub use value::{TableHandle, Value};
