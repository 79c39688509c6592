//! Comparison Operator Tests
//!
//! Tests for: eq, ne, lt, le, gt, ge

use pretty_assertions::assert_eq;
use reql_ast::{Category, Datum, Operation};
use reql_builder::QueryBuilder;
use reql_types::{BuildContext, Value};
use rstest::rstest;

fn builder() -> QueryBuilder {
    QueryBuilder::new()
}

fn ctx() -> BuildContext {
    builder().context()
}

fn operands(name: &str, args: Vec<Value>) -> Vec<i64> {
    let term = builder().invoke(&ctx(), name, args).unwrap();
    assert_eq!(term.category(), Category::Json);
    term.children()
        .into_iter()
        .map(|c| match c.as_literal() {
            Some(Datum::Int(n)) => *n,
            other => panic!("expected int literal, got {:?}", other),
        })
        .collect()
}

#[test]
fn test_chain_order_is_preserved() {
    assert_eq!(operands("lt", vec![1.into(), 2.into(), 3.into()]), vec![1, 2, 3]);
    assert_eq!(operands("lt", vec![1.into(), 3.into(), 2.into()]), vec![1, 3, 2]);
}

#[test]
fn test_ne_keeps_every_operand_in_order() {
    // 1 != 2 != 1 is a pairwise chain, so the repeated operand stays
    assert_eq!(operands("ne", vec![1.into(), 2.into(), 1.into()]), vec![1, 2, 1]);
    let b = builder();
    let ctx = ctx();
    assert_ne!(b.ne(&ctx, [1, 2, 1]).unwrap(), b.ne(&ctx, [1, 1, 2]).unwrap());
}

#[test]
fn test_reordered_chains_differ() {
    let b = builder();
    let ctx = ctx();
    let ascending = b.lt(&ctx, [1, 2, 3]).unwrap();
    let shuffled = b.lt(&ctx, [1, 3, 2]).unwrap();
    assert_ne!(ascending, shuffled);
}

#[rstest]
#[case("eq", Operation::Eq)]
#[case("ne", Operation::Ne)]
#[case("lt", Operation::Lt)]
#[case("le", Operation::Le)]
#[case("gt", Operation::Gt)]
#[case("ge", Operation::Ge)]
fn test_comparisons_are_variadic(#[case] name: &str, #[case] op: Operation) {
    let term = builder()
        .invoke(&ctx(), name, vec![1.into(), 2.into(), 3.into(), 4.into()])
        .unwrap();
    let (found, args) = term.as_call().unwrap();
    assert_eq!(found, op);
    assert_eq!(args.len(), 4);
}

#[rstest]
#[case("eq")]
#[case("ge")]
fn test_comparison_needs_two_operands(#[case] name: &str) {
    let err = builder().invoke(&ctx(), name, vec![1.into()]).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("RQL0104: {}: expected at least 2 argument(s), got 1", name)
    );
}

#[test]
fn test_named_method_matches_invoke() {
    let b = builder();
    let ctx = ctx();
    assert_eq!(
        b.ge(&ctx, ["b", "a"]).unwrap(),
        b.invoke(&ctx, "ge", vec!["b".into(), "a".into()]).unwrap()
    );
}
