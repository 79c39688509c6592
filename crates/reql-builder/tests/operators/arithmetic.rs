//! Arithmetic Operator Tests
//!
//! Tests for: add, subtract, multiply, divide, modulo

use pretty_assertions::assert_eq;
use reql_ast::{Category, Datum, Operation, Term};
use reql_builder::QueryBuilder;
use reql_diagnostics::{ReqlError, Violation};
use reql_types::{BuildContext, Value};
use rstest::rstest;

fn builder() -> QueryBuilder {
    QueryBuilder::new()
}

fn ctx() -> BuildContext {
    builder().context()
}

fn int_args(term: &Term) -> Vec<i64> {
    term.children()
        .into_iter()
        .map(|child| match child.as_literal() {
            Some(Datum::Int(n)) => *n,
            other => panic!("expected int literal, got {:?}", other),
        })
        .collect()
}

#[test]
fn test_add_builds_one_node_for_all_operands() {
    let term = builder().add(&ctx(), [1, 2, 3]).unwrap();
    let (op, args) = term.as_call().unwrap();
    assert_eq!(op, Operation::Add);
    assert_eq!(args.len(), 3);
    assert_eq!(int_args(&term), vec![1, 2, 3]);
    assert_eq!(term.category(), Category::Json);
}

#[test]
fn test_multiply_is_variadic() {
    let term = builder().multiply(&ctx(), [2, 3, 4, 5]).unwrap();
    assert_eq!(int_args(&term), vec![2, 3, 4, 5]);
}

#[test]
fn test_nested_add_is_not_flattened() {
    let b = builder();
    let ctx = ctx();
    let inner = b.add(&ctx, [1, 2]).unwrap();
    let outer = b.add(&ctx, [Value::from(inner.clone()), Value::from(3)]).unwrap();
    let (_, args) = outer.as_call().unwrap();
    assert_eq!(args[0], inner);
    assert_eq!(outer.size(), 5);
}

#[rstest]
#[case("subtract", Operation::Subtract)]
#[case("divide", Operation::Divide)]
#[case("modulo", Operation::Modulo)]
fn test_binary_operations_keep_operand_order(#[case] name: &str, #[case] op: Operation) {
    let b = builder();
    let term = b.invoke(&ctx(), name, vec![10.into(), 3.into()]).unwrap();
    assert_eq!(term.as_call().map(|(o, _)| o), Some(op));
    assert_eq!(int_args(&term), vec![10, 3]);
}

#[test]
fn test_subtract_rejects_three_operands() {
    let err = builder()
        .invoke(&ctx(), "subtract", vec![1.into(), 2.into(), 3.into()])
        .unwrap_err();
    assert_eq!(err.to_string(), "RQL0104: subtract: expected 2 argument(s), got 3");
}

#[test]
fn test_add_rejects_single_operand() {
    let err = builder().add(&ctx(), [1]).unwrap_err();
    match err {
        ReqlError::ArityOrCategoryViolation { operation, violation } => {
            assert_eq!(operation, "add");
            assert_eq!(
                violation,
                Violation::Arity {
                    expected: "at least 2".to_string(),
                    found: 1
                }
            );
        }
        other => panic!("expected arity violation, got {:?}", other),
    }
}

#[test]
fn test_stream_operand_is_rejected() {
    let b = builder();
    let ctx = ctx();
    let stream = b.to_stream(&ctx, vec![1, 2]).unwrap();
    let err = b.add(&ctx, [Value::from(stream), Value::from(1)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "RQL0105: add: argument 1 must be JSON, got STREAM"
    );
}

#[test]
fn test_float_operands() {
    let term = builder().divide(&ctx(), 1.5, 0.5).unwrap();
    let kinds: Vec<_> = term
        .children()
        .into_iter()
        .filter_map(|c| c.as_literal().map(Datum::kind))
        .collect();
    assert_eq!(kinds, vec!["float", "float"]);
}
