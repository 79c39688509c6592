//! The query builder
//!
//! [`QueryBuilder`] exposes one method per operation family (see the
//! `operators` module) plus [`QueryBuilder::invoke`], which dispatches on an
//! operation name or alias. Both paths share the same construction code, so an
//! aliased invocation yields exactly the node its canonical name does.

use log::trace;
use reql_ast::{Category, Operation, Term};
use reql_diagnostics::{ReqlError, Result};
use reql_types::{BuildContext, BuilderConfig, Value, coerce, coerce_all};
use serde_json::Value as JsonValue;
use std::sync::Arc;

use crate::registry::{self, Form, OperationSpec};

/// The query builder
///
/// Stateless apart from its configuration; share it freely across threads.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    config: Arc<BuilderConfig>,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Create a builder with a custom configuration
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Create a root build context
    pub fn context(&self) -> BuildContext {
        BuildContext::with_shared_config(Arc::clone(&self.config))
    }

    /// Coerce any native value into a term
    pub fn expr(&self, ctx: &BuildContext, value: impl Into<Value>) -> Result<Term> {
        coerce(ctx, value.into())
    }

    /// Build the operation named `name`, which may be an alias
    pub fn invoke(&self, ctx: &BuildContext, name: &str, args: Vec<Value>) -> Result<Term> {
        let spec = registry::resolve(name)?;
        trace!(
            "invoke {} as {} with {} argument(s)",
            name,
            spec.name,
            args.len()
        );
        spec.check_arity(args.len())?;

        match spec.form {
            Form::Call(op) => self.invoke_call(ctx, op, args),
            Form::If => {
                let [test, then_branch, else_branch] = fixed(spec, args)?;
                self.branch(ctx, test, then_branch, else_branch)
            }
            Form::Let => {
                let [bindings, body] = fixed(spec, args)?;
                self.bind(ctx, bindings, body)
            }
            Form::Func => {
                let [params, body] = fixed(spec, args)?;
                let params = match params {
                    Value::Array(items) => items
                        .into_iter()
                        .enumerate()
                        .map(|(i, v)| name_arg(spec.name, i + 1, v))
                        .collect::<Result<Vec<_>>>()?,
                    single => vec![name_arg(spec.name, 1, single)?],
                };
                self.func(ctx, params, body)
            }
            Form::Js => {
                let [source] = fixed(spec, args)?;
                Ok(self.js(string_arg(spec.name, 1, source)?))
            }
            Form::JsBody => {
                let [source] = fixed(spec, args)?;
                Ok(self.js_body(string_arg(spec.name, 1, source)?))
            }
            Form::Json => {
                let [payload] = fixed(spec, args)?;
                Ok(self.json(value_to_json(payload)?))
            }
            Form::Error => {
                let [message] = fixed(spec, args)?;
                Ok(self.error(string_arg(spec.name, 1, message)?))
            }
            Form::Db => {
                let [name] = fixed(spec, args)?;
                Ok(self.db(name_arg(spec.name, 1, name)?))
            }
            Form::Table => {
                let mut args = args.into_iter();
                let table = match (args.next(), args.next()) {
                    (Some(name), None) => self.table(name_arg(spec.name, 1, name)?),
                    (Some(db), Some(name)) => self.table_in(
                        name_arg(spec.name, 1, db)?,
                        name_arg(spec.name, 2, name)?,
                    ),
                    _ => return Err(ReqlError::arity(spec.name, spec.arity.to_string(), 0)),
                };
                Ok(table.into_term())
            }
            Form::DbCreate => {
                let [name] = fixed(spec, args)?;
                Ok(self.db_create(name_arg(spec.name, 1, name)?))
            }
            Form::DbDrop => {
                let [name] = fixed(spec, args)?;
                Ok(self.db_drop(name_arg(spec.name, 1, name)?))
            }
            Form::DbList => Ok(self.db_list()),
            Form::TableCreate => {
                let mut args = args.into_iter();
                let db = optional_name_arg(spec.name, 1, args.next().unwrap_or(Value::Null))?;
                let name = name_arg(spec.name, 2, args.next().unwrap_or(Value::Null))?;
                let primary_key =
                    optional_name_arg(spec.name, 3, args.next().unwrap_or(Value::Null))?;
                Ok(self.table_create(db, name, primary_key))
            }
            Form::TableDrop => {
                let [db, name] = fixed(spec, args)?;
                Ok(self.table_drop(
                    optional_name_arg(spec.name, 1, db)?,
                    name_arg(spec.name, 2, name)?,
                ))
            }
            Form::TableList => {
                let [db] = fixed(spec, args)?;
                Ok(self.table_list(optional_name_arg(spec.name, 1, db)?))
            }
        }
    }

    fn invoke_call(&self, ctx: &BuildContext, op: Operation, args: Vec<Value>) -> Result<Term> {
        use Operation as Op;

        let name = op.name();
        match op {
            Op::Add
            | Op::Subtract
            | Op::Multiply
            | Op::Divide
            | Op::Modulo
            | Op::Any
            | Op::All
            | Op::Not
            | Op::Eq
            | Op::Ne
            | Op::Lt
            | Op::Le
            | Op::Gt
            | Op::Ge => self.json_call(ctx, op, args),
            Op::GetAttr | Op::HasAttr => {
                let [receiver, attr] = fixed(registry::call_spec(op)?, args)?;
                let attr = name_arg(name, 2, attr)?;
                if op == Op::GetAttr {
                    self.get_attr(ctx, receiver, attr)
                } else {
                    self.has_attr(ctx, receiver, attr)
                }
            }
            Op::PickAttrs | Op::Without => {
                let mut args = args.into_iter();
                let receiver = args.next().unwrap_or(Value::Null);
                let attrs = attr_names(name, 2, args)?;
                if op == Op::PickAttrs {
                    self.pick(ctx, receiver, attrs)
                } else {
                    self.without(ctx, receiver, attrs)
                }
            }
            Op::ImplicitGetAttr | Op::ImplicitHasAttr => {
                let [attr] = fixed(registry::call_spec(op)?, args)?;
                let attr = name_arg(name, 1, attr)?;
                if op == Op::ImplicitGetAttr {
                    Ok(self.implicit_get_attr(attr))
                } else {
                    Ok(self.implicit_has_attr(attr))
                }
            }
            Op::ImplicitPickAttrs => Ok(self.implicit_pick(attr_names(name, 1, args)?)),
            Op::ImplicitWithout => Ok(self.implicit_without(attr_names(name, 1, args)?)),
            Op::MapMerge => {
                let [left, right] = fixed(registry::call_spec(op)?, args)?;
                self.merge(ctx, left, right)
            }
            Op::Append => {
                let [array, element] = fixed(registry::call_spec(op)?, args)?;
                self.append(ctx, array, element)
            }
            Op::Union => self.union(ctx, args),
            Op::ToStream => {
                let [value] = fixed(registry::call_spec(op)?, args)?;
                self.to_stream(ctx, value)
            }
            Op::ToArray => {
                let [sequence] = fixed(registry::call_spec(op)?, args)?;
                self.to_array(ctx, sequence)
            }
            Op::Map => {
                let [sequence, mapping] = fixed(registry::call_spec(op)?, args)?;
                self.map(ctx, sequence, mapping)
            }
            Op::Filter => {
                let [sequence, predicate] = fixed(registry::call_spec(op)?, args)?;
                self.filter(ctx, sequence, predicate)
            }
            Op::Count => {
                let [sequence] = fixed(registry::call_spec(op)?, args)?;
                self.count(ctx, sequence)
            }
            Op::Nth => {
                let [sequence, index] = fixed(registry::call_spec(op)?, args)?;
                self.nth(ctx, sequence, index)
            }
        }
    }

    /// Build a call whose operands must all be JSON values
    pub(crate) fn json_call(
        &self,
        ctx: &BuildContext,
        op: Operation,
        operands: Vec<Value>,
    ) -> Result<Term> {
        registry::call_spec(op)?.check_arity(operands.len())?;
        let args = coerce_all(ctx, operands)?
            .into_iter()
            .enumerate()
            .map(|(i, term)| require_json(op.name(), i + 1, term))
            .collect::<Result<Vec<_>>>()?;
        Ok(Term::call(op, args, Category::Json))
    }
}

/// Require a JSON-valued operand
pub(crate) fn require_json(operation: &str, position: usize, term: Term) -> Result<Term> {
    if term.category() == Category::Json {
        Ok(term)
    } else {
        Err(ReqlError::category(
            operation,
            position,
            Category::Json.name(),
            term.category(),
        ))
    }
}

/// Require a sequence-valued operand
pub(crate) fn require_sequence(operation: &str, position: usize, term: Term) -> Result<Term> {
    if term.category().is_sequence() {
        Ok(term)
    } else {
        Err(ReqlError::category(
            operation,
            position,
            "a sequence",
            term.category(),
        ))
    }
}

/// Require a JSON or sequence operand
pub(crate) fn require_value(operation: &str, position: usize, term: Term) -> Result<Term> {
    if term.category().is_value() {
        Ok(term)
    } else {
        Err(ReqlError::category(
            operation,
            position,
            "a JSON value or sequence",
            term.category(),
        ))
    }
}

/// Split arguments into a fixed-size array after the arity check
fn fixed<const N: usize>(spec: &OperationSpec, args: Vec<Value>) -> Result<[Value; N]> {
    <[Value; N]>::try_from(args)
        .map_err(|args| ReqlError::arity(spec.name, spec.arity.to_string(), args.len()))
}

/// Extract a non-empty string or symbol name
fn name_arg(operation: &str, position: usize, value: Value) -> Result<String> {
    match value {
        Value::String(s) | Value::Symbol(s) if !s.is_empty() => Ok(s),
        other => Err(ReqlError::category(
            operation,
            position,
            "a name",
            other.type_name(),
        )),
    }
}

/// Extract a name, treating null as absent
fn optional_name_arg(operation: &str, position: usize, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        other => name_arg(operation, position, other).map(Some),
    }
}

/// Extract a string argument (may be empty)
fn string_arg(operation: &str, position: usize, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(ReqlError::category(
            operation,
            position,
            "a string",
            other.type_name(),
        )),
    }
}

fn attr_names(
    operation: &str,
    first_position: usize,
    values: impl IntoIterator<Item = Value>,
) -> Result<Vec<String>> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| name_arg(operation, first_position + i, v))
        .collect()
}

/// Convert a plain data value into a JSON payload
fn value_to_json(value: Value) -> Result<JsonValue> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(b)),
        Value::Int(n) => Ok(JsonValue::from(n)),
        Value::Float(n) => serde_json::Number::from_f64(n)
            .map(JsonValue::Number)
            .ok_or_else(|| ReqlError::unsupported_value("non-finite float")),
        Value::String(s) => Ok(JsonValue::String(s)),
        Value::Array(items) => items
            .into_iter()
            .map(value_to_json)
            .collect::<Result<Vec<_>>>()
            .map(JsonValue::Array),
        Value::Object(fields) => fields
            .into_iter()
            .map(|(k, v)| value_to_json(v).map(|v| (k, v)))
            .collect::<Result<serde_json::Map<_, _>>>()
            .map(JsonValue::Object),
        other => Err(ReqlError::unsupported_value(other.type_name())),
    }
}
