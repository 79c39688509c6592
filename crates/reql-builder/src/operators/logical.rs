//! Logical operators
//!
//! `any` and `all` are n-ary disjunction and conjunction; `not` is unary.

use reql_ast::{Operation, Term};
use reql_diagnostics::Result;
use reql_types::{BuildContext, Value};

use crate::QueryBuilder;

impl QueryBuilder {
    /// True when any operand is true
    pub fn any<I, V>(&self, ctx: &BuildContext, operands: I) -> Result<Term>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.json_call(ctx, Operation::Any, operands.into_iter().map(Into::into).collect())
    }

    /// True when every operand is true
    pub fn all<I, V>(&self, ctx: &BuildContext, operands: I) -> Result<Term>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.json_call(ctx, Operation::All, operands.into_iter().map(Into::into).collect())
    }

    pub fn not(&self, ctx: &BuildContext, operand: impl Into<Value>) -> Result<Term> {
        self.json_call(ctx, Operation::Not, vec![operand.into()])
    }
}
