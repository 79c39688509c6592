//! Sequence Operator Tests
//!
//! Tests for: union, to_stream, to_array, map, filter, count, nth

use pretty_assertions::assert_eq;
use reql_ast::{Category, Operation, Term};
use reql_builder::QueryBuilder;
use reql_diagnostics::ReqlError;
use reql_types::{BuildContext, Value};

fn builder() -> QueryBuilder {
    QueryBuilder::new()
}

fn ctx() -> BuildContext {
    builder().context()
}

fn stream(b: &QueryBuilder, ctx: &BuildContext) -> Term {
    b.to_stream(ctx, vec![1, 2, 3]).unwrap()
}

#[test]
fn test_union_of_json_and_stream_is_incompatible() {
    let b = builder();
    let ctx = ctx();
    let err = b
        .union(&ctx, [Value::from(vec![1, 2]), Value::from(stream(&b, &ctx))])
        .unwrap_err();
    assert!(matches!(err, ReqlError::IncompatibleBranchTypes { .. }));
    assert_eq!(
        err.to_string(),
        "RQL0101: union branches have incompatible types JSON and STREAM"
    );
}

#[test]
fn test_union_keeps_duplicates() {
    let b = builder();
    let ctx = ctx();
    let s = stream(&b, &ctx);
    let term = b.union(&ctx, [s.clone(), s.clone()]).unwrap();
    assert_eq!(term.children(), vec![&s, &s]);
    assert_eq!(term.category(), Category::Stream);
}

#[test]
fn test_union_keeps_duplicate_arrays() {
    let b = builder();
    let term = b.union(&ctx(), [vec![1, 2], vec![1, 2]]).unwrap();
    let (op, args) = term.as_call().unwrap();
    assert_eq!(op, Operation::Union);
    let elements: Vec<usize> = args.iter().map(|a| a.children().len()).collect();
    assert_eq!(elements, vec![2, 2]);
    assert_eq!(args[0], args[1]);
    assert_eq!(term.category(), Category::Json);
}

#[test]
fn test_union_takes_the_most_general_category() {
    let b = builder();
    let ctx = ctx();
    let tables = b.union(&ctx, [b.table("a"), b.table_in("other", "b")]).unwrap();
    assert_eq!(tables.category(), Category::Table);

    let view = b.filter(&ctx, b.table("a"), true).unwrap();
    let mixed = b.union(&ctx, [Value::from(b.table("a")), Value::from(view)]).unwrap();
    assert_eq!(mixed.category(), Category::View);
}

#[test]
fn test_union_of_arrays_is_json() {
    let term = builder()
        .union(&ctx(), [vec![1], vec![2, 3]])
        .unwrap();
    assert_eq!(term.category(), Category::Json);
    assert_eq!(term.as_call().map(|(op, args)| (op, args.len())), Some((Operation::Union, 2)));
}

#[test]
fn test_union_rejects_scalar_literal() {
    let err = builder()
        .invoke(&ctx(), "union", vec![vec![1].into(), "x".into()])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "RQL0105: union: argument 2 must be an array or sequence, got string"
    );
}

#[test]
fn test_union_rejects_database() {
    let b = builder();
    let err = b.union(&ctx(), [b.db("test")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "RQL0105: union: argument 1 must be an array or sequence, got DATABASE"
    );
}

#[test]
fn test_stream_array_conversions() {
    let b = builder();
    let ctx = ctx();
    let s = stream(&b, &ctx);
    assert_eq!(s.category(), Category::Stream);
    let back = b.invoke(&ctx, "streamtoarray", vec![s.into()]).unwrap();
    assert_eq!(back.category(), Category::Json);
    assert!(b.to_array(&ctx, vec![1]).is_err());
}

#[test]
fn test_filter_categories() {
    let b = builder();
    let ctx = ctx();
    let view = b.filter(&ctx, b.table("users"), Value::symbol("active")).unwrap();
    assert_eq!(view.category(), Category::View);

    let again = b.filter(&ctx, view, Value::symbol("admin")).unwrap();
    assert_eq!(again.category(), Category::View);

    let filtered = b.filter(&ctx, stream(&b, &ctx), true).unwrap();
    assert_eq!(filtered.category(), Category::Stream);
}

#[test]
fn test_map_accepts_function_or_row_expression() {
    let b = builder();
    let ctx = ctx();
    let double = b
        .func_with(&ctx, ["x"], |scope| b.multiply(scope, [Value::symbol("$x"), Value::from(2)]))
        .unwrap();
    let mapped = b.map(&ctx, b.table("t"), double).unwrap();
    assert_eq!(mapped.category(), Category::Stream);

    let by_row = b.map(&ctx, b.table("t"), Value::symbol("name")).unwrap();
    assert_eq!(*by_row.children()[1], b.implicit_get_attr("name"));
}

#[test]
fn test_map_rejects_two_parameter_function() {
    let b = builder();
    let ctx = ctx();
    let f = b.func(&ctx, ["a", "b"], Value::symbol("$a")).unwrap();
    let err = b.map(&ctx, stream(&b, &ctx), f).unwrap_err();
    assert_eq!(
        err.to_string(),
        "RQL0105: map: argument 2 must be a function of 1 parameter, got a function of 2 parameters"
    );
}

#[test]
fn test_count_and_nth() {
    let b = builder();
    let ctx = ctx();
    let count = b.invoke(&ctx, "length", vec![b.table("t").into()]).unwrap();
    assert_eq!(count.as_call().map(|(op, _)| op), Some(Operation::Count));
    assert_eq!(count.category(), Category::Json);

    let first = b.nth(&ctx, vec!["a", "b"], 0).unwrap();
    assert_eq!(first.category(), Category::Json);
    assert!(b.nth(&ctx, stream(&b, &ctx), stream(&b, &ctx)).is_err());
}
