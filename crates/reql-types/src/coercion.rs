//! Value to term coercion
//!
//! Every builder runs its operands through [`coerce`] before constructing a
//! node, so every child of every term is a proper term. Rules:
//! - terms are returned unchanged
//! - scalars become `Json` literals tagged with their primitive kind
//! - arrays and objects become `Json` array/object terms, recursively
//! - marked symbols become variables, bare symbols become implicit attribute access
//! - table handles become their table reference term
//! - anything else is an unsupported value type

use indexmap::IndexMap;
use log::{debug, trace};
use reql_ast::{Category, Datum, Operation, Term};
use reql_diagnostics::{ReqlError, Result};

use crate::{BuildContext, Value};

/// Convert a native value into a term
pub fn coerce(ctx: &BuildContext, value: Value) -> Result<Term> {
    match value {
        Value::Term(term) => Ok(term),
        Value::Null => Ok(Term::literal(Datum::Null)),
        Value::Bool(b) => Ok(Term::literal(Datum::Bool(b))),
        Value::Int(n) => Ok(Term::literal(Datum::Int(n))),
        Value::Float(n) if n.is_finite() => Ok(Term::literal(Datum::Float(n))),
        Value::Float(_) => Err(unsupported("non-finite float")),
        Value::String(s) => Ok(Term::literal(Datum::String(s))),
        Value::Array(items) => coerce_all(ctx, items).map(Term::array),
        Value::Object(fields) => {
            let mut coerced = IndexMap::with_capacity(fields.len());
            for (key, value) in fields {
                coerced.insert(key, coerce(ctx, value)?);
            }
            Ok(Term::object(coerced))
        }
        Value::Symbol(name) => coerce_symbol(ctx, &name),
        Value::Table(table) => Ok(table.into_term()),
        Value::Bytes(_) => Err(unsupported("bytes")),
        Value::Foreign(type_name) => Err(unsupported(type_name)),
    }
}

/// Convert a sequence of native values, preserving order
pub fn coerce_all(ctx: &BuildContext, values: impl IntoIterator<Item = Value>) -> Result<Vec<Term>> {
    values.into_iter().map(|v| coerce(ctx, v)).collect()
}

/// Convert a symbolic name
///
/// `$name` (with the configured marker) is a reference to the variable `name`,
/// carrying the category it was bound with; unbound variables are `Json`.
/// A bare `name` reads attribute `name` of the implicit variable.
pub fn coerce_symbol(ctx: &BuildContext, name: &str) -> Result<Term> {
    match ctx.strip_marker(name) {
        Some("") => {
            debug!("rejected empty variable reference {:?}", name);
            Err(ReqlError::malformed_binding(format!(
                "variable reference {:?} has no name",
                name
            )))
        }
        Some(var) => {
            let category = ctx.lookup(var).unwrap_or(Category::Json);
            trace!("symbol {:?} -> variable {} ({})", name, var, category);
            Ok(Term::variable(var, category))
        }
        None if name.is_empty() => {
            debug!("rejected empty symbol");
            Err(ReqlError::malformed_binding("symbol has no name"))
        }
        None => {
            trace!("symbol {:?} -> implicit attribute access", name);
            Ok(Term::call(
                Operation::ImplicitGetAttr,
                vec![Term::literal(name)],
                Category::Json,
            ))
        }
    }
}

fn unsupported(type_name: impl Into<String>) -> ReqlError {
    let err = ReqlError::unsupported_value(type_name);
    debug!("{}", err);
    err
}
