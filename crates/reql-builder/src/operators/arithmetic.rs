//! Arithmetic operators
//!
//! `add` and `multiply` take two or more operands and build a single n-ary
//! node. The rest are strictly binary. All operands must be JSON values.

use reql_ast::{Operation, Term};
use reql_diagnostics::Result;
use reql_types::{BuildContext, Value};

use crate::QueryBuilder;

impl QueryBuilder {
    /// Sum of two or more operands
    pub fn add<I, V>(&self, ctx: &BuildContext, operands: I) -> Result<Term>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.json_call(ctx, Operation::Add, operands.into_iter().map(Into::into).collect())
    }

    /// Product of two or more operands
    pub fn multiply<I, V>(&self, ctx: &BuildContext, operands: I) -> Result<Term>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.json_call(
            ctx,
            Operation::Multiply,
            operands.into_iter().map(Into::into).collect(),
        )
    }

    pub fn subtract(
        &self,
        ctx: &BuildContext,
        left: impl Into<Value>,
        right: impl Into<Value>,
    ) -> Result<Term> {
        self.json_call(ctx, Operation::Subtract, vec![left.into(), right.into()])
    }

    pub fn divide(
        &self,
        ctx: &BuildContext,
        left: impl Into<Value>,
        right: impl Into<Value>,
    ) -> Result<Term> {
        self.json_call(ctx, Operation::Divide, vec![left.into(), right.into()])
    }

    pub fn modulo(
        &self,
        ctx: &BuildContext,
        left: impl Into<Value>,
        right: impl Into<Value>,
    ) -> Result<Term> {
        self.json_call(ctx, Operation::Modulo, vec![left.into(), right.into()])
    }
}
