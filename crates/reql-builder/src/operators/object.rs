//! Object operators
//!
//! Attribute names are stored as string literal arguments following the
//! receiver. The implicit forms omit the receiver and act on the row bound by
//! the enclosing `map`/`filter`.

use reql_ast::{Category, Operation, Term};
use reql_diagnostics::Result;
use reql_types::{BuildContext, Value, coerce};

use crate::QueryBuilder;
use crate::builder::require_json;

impl QueryBuilder {
    /// Read attribute `name` of an object
    pub fn get_attr(
        &self,
        ctx: &BuildContext,
        receiver: impl Into<Value>,
        name: impl Into<String>,
    ) -> Result<Term> {
        self.attr_call(ctx, Operation::GetAttr, receiver.into(), [name.into()])
    }

    /// Test whether an object has attribute `name`
    pub fn has_attr(
        &self,
        ctx: &BuildContext,
        receiver: impl Into<Value>,
        name: impl Into<String>,
    ) -> Result<Term> {
        self.attr_call(ctx, Operation::HasAttr, receiver.into(), [name.into()])
    }

    /// Keep only the named attributes
    pub fn pick<I, S>(&self, ctx: &BuildContext, receiver: impl Into<Value>, names: I) -> Result<Term>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attr_call(
            ctx,
            Operation::PickAttrs,
            receiver.into(),
            names.into_iter().map(Into::into),
        )
    }

    /// Drop the named attributes
    pub fn without<I, S>(
        &self,
        ctx: &BuildContext,
        receiver: impl Into<Value>,
        names: I,
    ) -> Result<Term>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attr_call(
            ctx,
            Operation::Without,
            receiver.into(),
            names.into_iter().map(Into::into),
        )
    }

    /// Read attribute `name` of the implicit variable
    ///
    /// Identical to coercing the bare symbol `name`.
    pub fn implicit_get_attr(&self, name: impl Into<String>) -> Term {
        implicit_call(Operation::ImplicitGetAttr, [name.into()])
    }

    pub fn implicit_has_attr(&self, name: impl Into<String>) -> Term {
        implicit_call(Operation::ImplicitHasAttr, [name.into()])
    }

    pub fn implicit_pick<I, S>(&self, names: I) -> Term
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        implicit_call(Operation::ImplicitPickAttrs, names.into_iter().map(Into::into))
    }

    pub fn implicit_without<I, S>(&self, names: I) -> Term
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        implicit_call(Operation::ImplicitWithout, names.into_iter().map(Into::into))
    }

    /// Merge two objects, right-hand attributes winning
    pub fn merge(
        &self,
        ctx: &BuildContext,
        left: impl Into<Value>,
        right: impl Into<Value>,
    ) -> Result<Term> {
        self.json_call(ctx, Operation::MapMerge, vec![left.into(), right.into()])
    }

    /// Append an element to an array
    pub fn append(
        &self,
        ctx: &BuildContext,
        array: impl Into<Value>,
        element: impl Into<Value>,
    ) -> Result<Term> {
        self.json_call(ctx, Operation::Append, vec![array.into(), element.into()])
    }

    /// Reference to the row bound by the enclosing `map`/`filter`
    pub fn row(&self, ctx: &BuildContext) -> Term {
        ctx.implicit_variable()
    }

    fn attr_call(
        &self,
        ctx: &BuildContext,
        op: Operation,
        receiver: Value,
        names: impl IntoIterator<Item = String>,
    ) -> Result<Term> {
        let receiver = require_json(op.name(), 1, coerce(ctx, receiver)?)?;
        let args = std::iter::once(receiver)
            .chain(names.into_iter().map(Term::literal))
            .collect();
        Ok(Term::call(op, args, Category::Json))
    }
}

fn implicit_call(op: Operation, names: impl IntoIterator<Item = String>) -> Term {
    Term::call(op, names.into_iter().map(Term::literal).collect(), Category::Json)
}
