//! Logical Operator Tests
//!
//! Tests for: any, all, not

use pretty_assertions::assert_eq;
use reql_ast::{Category, Operation};
use reql_builder::QueryBuilder;
use reql_types::{BuildContext, Value};

fn builder() -> QueryBuilder {
    QueryBuilder::new()
}

fn ctx() -> BuildContext {
    builder().context()
}

#[test]
fn test_any_accepts_single_operand() {
    let term = builder().any(&ctx(), [true]).unwrap();
    assert_eq!(term.as_call().map(|(op, args)| (op, args.len())), Some((Operation::Any, 1)));
}

#[test]
fn test_all_is_variadic() {
    let term = builder().all(&ctx(), [true, false, true]).unwrap();
    assert_eq!(term.children().len(), 3);
    assert_eq!(term.category(), Category::Json);
}

#[test]
fn test_any_rejects_no_operands() {
    let err = builder().any(&ctx(), Vec::<bool>::new()).unwrap_err();
    assert_eq!(err.to_string(), "RQL0104: any: expected at least 1 argument(s), got 0");
}

#[test]
fn test_not_is_unary() {
    let b = builder();
    let ctx = ctx();
    assert!(b.not(&ctx, false).is_ok());
    let err = b
        .invoke(&ctx, "not", vec![true.into(), false.into()])
        .unwrap_err();
    assert_eq!(err.to_string(), "RQL0104: not: expected 1 argument(s), got 2");
}

#[test]
fn test_not_over_attribute_of_row() {
    let b = builder();
    let ctx = ctx();
    let term = b.not(&ctx, Value::symbol("archived")).unwrap();
    assert_eq!(*term.children()[0], b.implicit_get_attr("archived"));
}
