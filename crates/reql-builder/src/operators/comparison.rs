//! Comparison operators
//!
//! Every comparison is a chain: `lt(a, b, c)` means `a < b < c`. Each relation
//! holds pairwise across the ordered operands, so operand order is preserved
//! exactly.

use reql_ast::{Operation, Term};
use reql_diagnostics::Result;
use reql_types::{BuildContext, Value};

use crate::QueryBuilder;

macro_rules! comparison {
    ($(#[$doc:meta])* $method:ident => $op:ident) => {
        $(#[$doc])*
        pub fn $method<I, V>(&self, ctx: &BuildContext, operands: I) -> Result<Term>
        where
            I: IntoIterator<Item = V>,
            V: Into<Value>,
        {
            self.json_call(ctx, Operation::$op, operands.into_iter().map(Into::into).collect())
        }
    };
}

impl QueryBuilder {
    comparison!(
        /// Each operand equals the next
        eq => Eq
    );
    comparison!(
        /// Each operand differs from the next
        ne => Ne
    );
    comparison!(
        /// Strictly increasing
        lt => Lt
    );
    comparison!(le => Le);
    comparison!(
        /// Strictly decreasing
        gt => Gt
    );
    comparison!(ge => Ge);
}
