//! Operator integration tests for the query builder
//!
//! These tests verify:
//! - Node shape and operand order for each operation family
//! - Result categories
//! - Arity and category violations raised at construction time

pub mod arithmetic;
pub mod comparison;
pub mod logical;
pub mod object;
pub mod sequence;
