//! JSON query documents
//!
//! A query document is plain JSON with two reserved object shapes:
//! - `{"$op": name, "args": [...]}` invokes an operation by name or alias
//! - `{"$sym": name}` is a symbol: `"$x"` reads variable `x`, `"age"` reads
//!   attribute `age` of the row
//!
//! Everything else is data and is coerced as usual. The body of a `let` or
//! `func` invocation is built under the scope it opens, and each `let` binding
//! value sees the names bound before it.

use indexmap::IndexMap;
use reql_ast::Term;
use reql_builder::{Form, QueryBuilder, resolve};
use reql_diagnostics::{ReqlError, Result};
use reql_types::{BuildContext, Value};
use serde_json::{Map, Value as JsonValue};

/// Key naming the operation of an invocation
pub const OP_KEY: &str = "$op";
/// Key holding the arguments of an invocation
pub const ARGS_KEY: &str = "args";
/// Key naming a symbol
pub const SYM_KEY: &str = "$sym";

/// Parse and build a query document
pub fn parse(builder: &QueryBuilder, text: &str) -> Result<Term> {
    let doc: JsonValue =
        serde_json::from_str(text).map_err(|e| ReqlError::invalid_document(e.to_string()))?;
    build(builder, &builder.context(), &doc)
}

/// Build a parsed query document
pub fn build(builder: &QueryBuilder, ctx: &BuildContext, doc: &JsonValue) -> Result<Term> {
    let value = decode(builder, ctx, doc)?;
    builder.expr(ctx, value)
}

fn decode(builder: &QueryBuilder, ctx: &BuildContext, doc: &JsonValue) -> Result<Value> {
    match doc {
        JsonValue::Array(items) => items
            .iter()
            .map(|item| decode(builder, ctx, item))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        JsonValue::Object(fields) if fields.contains_key(OP_KEY) => {
            invocation(builder, ctx, fields).map(Value::Term)
        }
        JsonValue::Object(fields) if fields.contains_key(SYM_KEY) => symbol(fields),
        JsonValue::Object(fields) => fields
            .iter()
            .map(|(key, value)| decode(builder, ctx, value).map(|v| (key.clone(), v)))
            .collect::<Result<IndexMap<_, _>>>()
            .map(Value::Object),
        scalar => Ok(Value::from(scalar.clone())),
    }
}

fn invocation(
    builder: &QueryBuilder,
    ctx: &BuildContext,
    fields: &Map<String, JsonValue>,
) -> Result<Term> {
    if let Some(key) = fields.keys().find(|k| *k != OP_KEY && *k != ARGS_KEY) {
        return Err(ReqlError::invalid_document(format!(
            "unexpected key {:?} in invocation",
            key
        )));
    }
    let name = match fields.get(OP_KEY) {
        Some(JsonValue::String(name)) => name,
        _ => return Err(ReqlError::invalid_document("operation name must be a string")),
    };
    let items: &[JsonValue] = match fields.get(ARGS_KEY) {
        None => &[],
        Some(JsonValue::Array(items)) => items,
        Some(_) => {
            return Err(ReqlError::invalid_document(format!(
                "arguments of {} must be an array",
                name
            )));
        }
    };
    match (resolve(name)?.form, items) {
        (Form::Let, [bindings, body]) => scoped_let(builder, ctx, bindings, body),
        (Form::Func, [JsonValue::Array(params), body]) if params.iter().all(JsonValue::is_string) => {
            let params: Vec<&str> = params.iter().filter_map(JsonValue::as_str).collect();
            builder.func_with(ctx, params, |scope| build(builder, scope, body))
        }
        _ => {
            let args = items
                .iter()
                .map(|item| decode(builder, ctx, item))
                .collect::<Result<Vec<_>>>()?;
            builder.invoke(ctx, name, args)
        }
    }
}

/// Build a `let` whose pair values and body see the names bound before them
fn scoped_let(
    builder: &QueryBuilder,
    ctx: &BuildContext,
    bindings: &JsonValue,
    body: &JsonValue,
) -> Result<Term> {
    let bindings = match bindings {
        JsonValue::Array(pairs) => {
            let mut scope = ctx.child();
            let mut decoded = Vec::with_capacity(pairs.len());
            for pair in pairs {
                match pair.as_array().map(Vec::as_slice) {
                    Some([JsonValue::String(raw), value]) => {
                        let term = build(builder, &scope, value)?;
                        let name = ctx.strip_marker(raw).unwrap_or(raw.as_str());
                        scope.define(name, term.category());
                        decoded.push(Value::Array(vec![
                            Value::from(raw.as_str()),
                            Value::Term(term),
                        ]));
                    }
                    // malformed pairs are reported by `bind_with`
                    _ => decoded.push(decode(builder, &scope, pair)?),
                }
            }
            Value::Array(decoded)
        }
        other => decode(builder, ctx, other)?,
    };
    builder.bind_with(ctx, bindings, |scope| build(builder, scope, body))
}

fn symbol(fields: &Map<String, JsonValue>) -> Result<Value> {
    match fields.get(SYM_KEY) {
        Some(JsonValue::String(name)) if fields.len() == 1 => Ok(Value::symbol(name.clone())),
        _ => Err(ReqlError::invalid_document(
            "a symbol is an object with a single string \"$sym\" entry",
        )),
    }
}
