//! Sequence operators
//!
//! Category rules:
//! - `union` takes the unified category of its operands
//! - `to_stream` turns a JSON array into a `Stream`, `to_array` the reverse
//! - `map` always yields a `Stream`
//! - `filter` keeps a `Stream` a `Stream` and narrows a table or view to a `View`
//! - `count` and `nth` yield JSON

use log::trace;
use reql_ast::{Category, Operation, Term, TermKind};
use reql_diagnostics::{ReqlError, Result};
use reql_types::{BuildContext, Value, coerce, coerce_all, unify};

use crate::QueryBuilder;
use crate::builder::{require_json, require_sequence, require_value};
use crate::registry;

impl QueryBuilder {
    /// Concatenate sequences or arrays
    ///
    /// Operands must unify; an empty union is an empty JSON array. Duplicates
    /// are kept.
    pub fn union<I, V>(&self, ctx: &BuildContext, operands: I) -> Result<Term>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let operands: Vec<Value> = operands.into_iter().map(Into::into).collect();
        registry::call_spec(Operation::Union)?.check_arity(operands.len())?;

        let terms = coerce_all(ctx, operands)?
            .into_iter()
            .enumerate()
            .map(|(i, term)| require_union_operand(i + 1, term))
            .collect::<Result<Vec<_>>>()?;

        let category = unify("union", terms.iter().map(Term::category))?.unwrap_or(Category::Json);
        trace!("union of {} operand(s) is {}", terms.len(), category);
        Ok(Term::call(Operation::Union, terms, category))
    }

    /// Lift a JSON array into a stream
    pub fn to_stream(&self, ctx: &BuildContext, value: impl Into<Value>) -> Result<Term> {
        let value = require_json("to_stream", 1, coerce(ctx, value.into())?)?;
        Ok(Term::call(Operation::ToStream, vec![value], Category::Stream))
    }

    /// Collect a sequence into a JSON array
    pub fn to_array(&self, ctx: &BuildContext, sequence: impl Into<Value>) -> Result<Term> {
        let sequence = require_sequence("to_array", 1, coerce(ctx, sequence.into())?)?;
        Ok(Term::call(Operation::ToArray, vec![sequence], Category::Json))
    }

    /// Transform each row of a sequence
    ///
    /// `mapping` is a one-parameter function or a JSON expression over the
    /// implicit variable.
    pub fn map(
        &self,
        ctx: &BuildContext,
        sequence: impl Into<Value>,
        mapping: impl Into<Value>,
    ) -> Result<Term> {
        let sequence = require_sequence("map", 1, coerce(ctx, sequence.into())?)?;
        let mapping = row_function(ctx, "map", mapping.into())?;
        Ok(Term::call(Operation::Map, vec![sequence, mapping], Category::Stream))
    }

    /// Keep the rows matching a predicate
    pub fn filter(
        &self,
        ctx: &BuildContext,
        sequence: impl Into<Value>,
        predicate: impl Into<Value>,
    ) -> Result<Term> {
        let sequence = require_sequence("filter", 1, coerce(ctx, sequence.into())?)?;
        let category = match sequence.category() {
            Category::Table | Category::View => Category::View,
            other => other,
        };
        let predicate = row_function(ctx, "filter", predicate.into())?;
        Ok(Term::call(Operation::Filter, vec![sequence, predicate], category))
    }

    /// Number of elements of a sequence or array
    pub fn count(&self, ctx: &BuildContext, sequence: impl Into<Value>) -> Result<Term> {
        let sequence = require_value("count", 1, coerce(ctx, sequence.into())?)?;
        Ok(Term::call(Operation::Count, vec![sequence], Category::Json))
    }

    /// Element at `index` of a sequence or array
    pub fn nth(
        &self,
        ctx: &BuildContext,
        sequence: impl Into<Value>,
        index: impl Into<Value>,
    ) -> Result<Term> {
        let sequence = require_value("nth", 1, coerce(ctx, sequence.into())?)?;
        let index = require_json("nth", 2, coerce(ctx, index.into())?)?;
        Ok(Term::call(Operation::Nth, vec![sequence, index], Category::Json))
    }
}

/// Reject operands that can never be concatenated
fn require_union_operand(position: usize, term: Term) -> Result<Term> {
    let found = match term.kind() {
        TermKind::Literal(datum) => Some(datum.kind().to_string()),
        TermKind::Object(_) => Some("object".to_string()),
        _ if !term.category().is_value() => Some(term.category().to_string()),
        _ => None,
    };
    match found {
        Some(found) => Err(ReqlError::category(
            "union",
            position,
            "an array or sequence",
            found,
        )),
        None => Ok(term),
    }
}

/// Coerce the per-row argument of `map`/`filter`
fn row_function(ctx: &BuildContext, operation: &str, value: Value) -> Result<Term> {
    let term = coerce(ctx, value)?;
    match (term.kind(), term.category()) {
        (TermKind::Function { params, .. }, Category::Function) if params.len() == 1 => Ok(term),
        (TermKind::Function { params, .. }, _) => Err(ReqlError::category(
            operation,
            2,
            "a function of 1 parameter",
            format!("a function of {} parameters", params.len()),
        )),
        (_, Category::Json) => Ok(term),
        (_, found) => Err(ReqlError::category(
            operation,
            2,
            "a function or JSON expression",
            found,
        )),
    }
}
