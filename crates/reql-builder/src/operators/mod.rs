//! Operator builders, grouped by family
//!
//! Each module adds methods to [`QueryBuilder`](crate::QueryBuilder).

pub mod arithmetic;
pub mod comparison;
pub mod control;
pub mod escape;
pub mod logical;
pub mod namespace;
pub mod object;
pub mod sequence;
