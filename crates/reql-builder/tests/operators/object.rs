//! Object Operator Tests
//!
//! Tests for: getattr, hasattr, pickattrs, without, the implicit forms,
//! mapmerge, append

use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use reql_ast::{Category, Datum, Operation, Term};
use reql_builder::QueryBuilder;
use reql_types::{BuildContext, Value};
use rstest::rstest;

fn builder() -> QueryBuilder {
    QueryBuilder::new()
}

fn ctx() -> BuildContext {
    builder().context()
}

fn doc() -> Value {
    let mut fields = IndexMap::new();
    fields.insert("name".to_string(), Value::from("ada"));
    fields.insert("age".to_string(), Value::from(36));
    Value::from(fields)
}

fn names(args: &[Term]) -> Vec<&str> {
    args.iter()
        .filter_map(|t| t.as_literal().and_then(Datum::as_str))
        .collect()
}

#[test]
fn test_get_attr_shape() {
    let term = builder().get_attr(&ctx(), doc(), "name").unwrap();
    let (op, args) = term.as_call().unwrap();
    assert_eq!(op, Operation::GetAttr);
    assert_eq!(args[0].tag(), "object");
    assert_eq!(names(&args[1..]), vec!["name"]);
    assert_eq!(term.category(), Category::Json);
}

#[rstest]
#[case("get", Operation::GetAttr)]
#[case("attr", Operation::GetAttr)]
#[case("has", Operation::HasAttr)]
fn test_attribute_aliases(#[case] alias: &str, #[case] op: Operation) {
    let term = builder()
        .invoke(&ctx(), alias, vec![doc(), "age".into()])
        .unwrap();
    assert_eq!(term.as_call().map(|(o, _)| o), Some(op));
}

#[test]
fn test_pick_and_without_keep_name_order() {
    let b = builder();
    let ctx = ctx();
    let picked = b.pick(&ctx, doc(), ["age", "name"]).unwrap();
    let (_, args) = picked.as_call().unwrap();
    assert_eq!(names(&args[1..]), vec!["age", "name"]);

    let dropped = b
        .invoke(&ctx, "without", vec![doc(), "name".into()])
        .unwrap();
    assert_eq!(dropped.as_call().map(|(o, _)| o), Some(Operation::Without));
}

#[test]
fn test_attribute_name_must_be_a_string() {
    let err = builder()
        .invoke(&ctx(), "getattr", vec![doc(), 3.into()])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "RQL0105: getattr: argument 2 must be a name, got int"
    );
}

#[test]
fn test_implicit_forms_have_no_receiver() {
    let b = builder();
    let ctx = ctx();
    let term = b
        .invoke(&ctx, "implicit_pickattrs", vec!["a".into(), "b".into()])
        .unwrap();
    assert_eq!(term, b.implicit_pick(["a", "b"]));
    assert_eq!(term.children().len(), 2);

    let has = b.invoke(&ctx, "implicit_hasattr", vec!["a".into()]).unwrap();
    assert_eq!(has, b.implicit_has_attr("a"));
}

#[test]
fn test_bare_symbol_is_implicit_get_attr() {
    let b = builder();
    let ctx = ctx();
    assert_eq!(
        b.expr(&ctx, Value::symbol("age")).unwrap(),
        b.invoke(&ctx, "implicit_getattr", vec!["age".into()]).unwrap()
    );
}

#[test]
fn test_merge_and_append() {
    let b = builder();
    let ctx = ctx();
    let merged = b.invoke(&ctx, "merge", vec![doc(), doc()]).unwrap();
    assert_eq!(merged.as_call().map(|(o, _)| o), Some(Operation::MapMerge));

    let appended = b.append(&ctx, vec![1, 2], 3).unwrap();
    let (op, args) = appended.as_call().unwrap();
    assert_eq!(op, Operation::Append);
    assert_eq!(args[0].tag(), "array");
    assert_eq!(args[1], Term::literal(3));
}

#[test]
fn test_table_receiver_is_rejected() {
    let b = builder();
    let err = b.get_attr(&ctx(), b.table("users"), "name").unwrap_err();
    assert_eq!(
        err.to_string(),
        "RQL0105: getattr: argument 1 must be JSON, got TABLE"
    );
}
