//! Operation registry for the query builder
//!
//! Maps every invocable operation name to its construction form and arity
//! policy, and maps alternate names to canonical ones. Both tables are built
//! once on first use and are read-only afterwards.

use indexmap::IndexMap;
use log::trace;
use reql_ast::Operation;
use reql_diagnostics::{ReqlError, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Number of arguments an operation accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    /// Minimum argument count
    pub min: usize,
    /// Maximum argument count, `None` for variadic
    pub max: Option<usize>,
}

impl Arity {
    /// Exactly `n` arguments
    pub const fn exactly(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    /// `n` or more arguments
    pub const fn at_least(n: usize) -> Self {
        Self { min: n, max: None }
    }

    /// Between `min` and `max` arguments, inclusive
    pub const fn range(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Check if the policy allows `count` arguments
    pub const fn accepts(&self, count: usize) -> bool {
        if count < self.min {
            return false;
        }
        match self.max {
            Some(max) => count <= max,
            None => true,
        }
    }

    /// Check if the operation is variadic
    pub const fn is_variadic(&self) -> bool {
        self.max.is_none()
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", max),
            Some(max) => write!(f, "{} to {}", self.min, max),
            None => write!(f, "at least {}", self.min),
        }
    }
}

/// How an operation is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Call term applying a built-in operation
    Call(Operation),
    /// Conditional
    If,
    /// Let binding
    Let,
    /// Anonymous function
    Func,
    /// Script expression, wrapped in a return
    Js,
    /// Script function body, passed through
    JsBody,
    /// Pre-parsed JSON payload
    Json,
    /// Explicit error term
    Error,
    /// Database reference
    Db,
    /// Table reference
    Table,
    /// Create a database
    DbCreate,
    /// Drop a database
    DbDrop,
    /// List databases
    DbList,
    /// Create a table
    TableCreate,
    /// Drop a table
    TableDrop,
    /// List tables
    TableList,
}

/// Static description of an invocable operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    /// Canonical name
    pub name: &'static str,
    /// Construction form
    pub form: Form,
    /// Arity policy
    pub arity: Arity,
}

impl OperationSpec {
    const fn new(name: &'static str, form: Form, arity: Arity) -> Self {
        Self { name, form, arity }
    }

    const fn call(op: Operation, arity: Arity) -> Self {
        Self::new(op.name(), Form::Call(op), arity)
    }

    /// Check an argument count against the arity policy
    pub fn check_arity(&self, count: usize) -> Result<()> {
        if self.arity.accepts(count) {
            Ok(())
        } else {
            Err(ReqlError::arity(self.name, self.arity.to_string(), count))
        }
    }
}

static OPERATIONS: LazyLock<IndexMap<&'static str, OperationSpec>> = LazyLock::new(|| {
    use Operation as Op;

    let specs = [
        // Arithmetic
        OperationSpec::call(Op::Add, Arity::at_least(2)),
        OperationSpec::call(Op::Subtract, Arity::exactly(2)),
        OperationSpec::call(Op::Multiply, Arity::at_least(2)),
        OperationSpec::call(Op::Divide, Arity::exactly(2)),
        OperationSpec::call(Op::Modulo, Arity::exactly(2)),
        // Boolean
        OperationSpec::call(Op::Any, Arity::at_least(1)),
        OperationSpec::call(Op::All, Arity::at_least(1)),
        OperationSpec::call(Op::Not, Arity::exactly(1)),
        // Comparison
        OperationSpec::call(Op::Eq, Arity::at_least(2)),
        OperationSpec::call(Op::Ne, Arity::at_least(2)),
        OperationSpec::call(Op::Lt, Arity::at_least(2)),
        OperationSpec::call(Op::Le, Arity::at_least(2)),
        OperationSpec::call(Op::Gt, Arity::at_least(2)),
        OperationSpec::call(Op::Ge, Arity::at_least(2)),
        // Objects
        OperationSpec::call(Op::GetAttr, Arity::exactly(2)),
        OperationSpec::call(Op::HasAttr, Arity::exactly(2)),
        OperationSpec::call(Op::PickAttrs, Arity::at_least(1)),
        OperationSpec::call(Op::Without, Arity::at_least(1)),
        OperationSpec::call(Op::ImplicitGetAttr, Arity::exactly(1)),
        OperationSpec::call(Op::ImplicitHasAttr, Arity::exactly(1)),
        OperationSpec::call(Op::ImplicitPickAttrs, Arity::at_least(0)),
        OperationSpec::call(Op::ImplicitWithout, Arity::at_least(0)),
        OperationSpec::call(Op::MapMerge, Arity::exactly(2)),
        OperationSpec::call(Op::Append, Arity::exactly(2)),
        // Sequences
        OperationSpec::call(Op::Union, Arity::at_least(0)),
        OperationSpec::call(Op::ToStream, Arity::exactly(1)),
        OperationSpec::call(Op::ToArray, Arity::exactly(1)),
        OperationSpec::call(Op::Map, Arity::exactly(2)),
        OperationSpec::call(Op::Filter, Arity::exactly(2)),
        OperationSpec::call(Op::Count, Arity::exactly(1)),
        OperationSpec::call(Op::Nth, Arity::exactly(2)),
        // Control
        OperationSpec::new("if", Form::If, Arity::exactly(3)),
        OperationSpec::new("let", Form::Let, Arity::exactly(2)),
        OperationSpec::new("func", Form::Func, Arity::exactly(2)),
        // Escape hatches
        OperationSpec::new("js", Form::Js, Arity::exactly(1)),
        OperationSpec::new("js_body", Form::JsBody, Arity::exactly(1)),
        OperationSpec::new("json", Form::Json, Arity::exactly(1)),
        OperationSpec::new("error", Form::Error, Arity::exactly(1)),
        // Namespaces
        OperationSpec::new("db", Form::Db, Arity::exactly(1)),
        OperationSpec::new("table", Form::Table, Arity::range(1, 2)),
        OperationSpec::new("db_create", Form::DbCreate, Arity::exactly(1)),
        OperationSpec::new("db_drop", Form::DbDrop, Arity::exactly(1)),
        OperationSpec::new("db_list", Form::DbList, Arity::exactly(0)),
        OperationSpec::new("table_create", Form::TableCreate, Arity::range(2, 3)),
        OperationSpec::new("table_drop", Form::TableDrop, Arity::exactly(2)),
        OperationSpec::new("table_list", Form::TableList, Arity::exactly(1)),
    ];

    specs.into_iter().map(|spec| (spec.name, spec)).collect()
});

static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("plus", "add"),
        ("sub", "subtract"),
        ("minus", "subtract"),
        ("mul", "multiply"),
        ("times", "multiply"),
        ("div", "divide"),
        ("mod", "modulo"),
        ("or", "any"),
        ("and", "all"),
        ("negate", "not"),
        ("equals", "eq"),
        ("neq", "ne"),
        ("lte", "le"),
        ("gte", "ge"),
        ("get", "getattr"),
        ("attr", "getattr"),
        ("has", "hasattr"),
        ("pick", "pickattrs"),
        ("unpick", "without"),
        ("merge", "mapmerge"),
        ("arrayappend", "append"),
        ("stream", "to_stream"),
        ("arraytostream", "to_stream"),
        ("array", "to_array"),
        ("streamtoarray", "to_array"),
        ("length", "count"),
        ("branch", "if"),
        ("bind", "let"),
        ("fn", "func"),
        ("lambda", "func"),
        ("javascript", "js"),
        ("raise", "error"),
        ("create_db", "db_create"),
        ("drop_db", "db_drop"),
        ("list_dbs", "db_list"),
        ("create_table", "table_create"),
        ("drop_table", "table_drop"),
        ("list_tables", "table_list"),
    ])
});

/// Look up an operation by canonical name
pub fn spec(name: &str) -> Option<&'static OperationSpec> {
    OPERATIONS.get(name)
}

/// Look up the registration of a built-in call operation
pub(crate) fn call_spec(op: Operation) -> Result<&'static OperationSpec> {
    OPERATIONS
        .get(op.name())
        .ok_or_else(|| ReqlError::unknown_operation(op.name()))
}

/// Resolve a primary name or alias to its registration
pub fn resolve(name: &str) -> Result<&'static OperationSpec> {
    if let Some(spec) = OPERATIONS.get(name) {
        return Ok(spec);
    }
    match ALIASES.get(name).and_then(|canonical| OPERATIONS.get(canonical)) {
        Some(spec) => {
            trace!("alias {} -> {}", name, spec.name);
            Ok(spec)
        }
        None => Err(ReqlError::unknown_operation(name)),
    }
}

/// Canonical operation names, in registration order
pub fn operation_names() -> impl Iterator<Item = &'static str> {
    OPERATIONS.keys().copied()
}

/// All aliases as (alias, canonical) pairs
pub fn aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    ALIASES.iter().map(|(alias, canonical)| (*alias, *canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_display() {
        assert_eq!(Arity::exactly(2).to_string(), "2");
        assert_eq!(Arity::at_least(2).to_string(), "at least 2");
        assert_eq!(Arity::range(1, 2).to_string(), "1 to 2");
    }

    #[test]
    fn test_arity_accepts() {
        assert!(Arity::at_least(0).accepts(0));
        assert!(!Arity::at_least(2).accepts(1));
        assert!(Arity::range(2, 3).accepts(3));
        assert!(!Arity::exactly(1).accepts(2));
        assert!(Arity::at_least(2).is_variadic());
    }

    #[test]
    fn test_every_alias_targets_a_primary_name() {
        for (alias, canonical) in aliases() {
            assert!(spec(canonical).is_some(), "{alias} -> {canonical}");
            assert!(spec(alias).is_none(), "{alias} shadows a primary name");
        }
    }

    #[test]
    fn test_every_operation_is_registered() {
        for op in Operation::ALL {
            let spec = call_spec(*op).unwrap();
            assert_eq!(spec.form, Form::Call(*op));
        }
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("add").unwrap().name, "add");
        assert_eq!(resolve("plus").unwrap().name, "add");
        assert!(matches!(
            resolve("frobnicate"),
            Err(ReqlError::UnknownOperation { .. })
        ));
    }

    #[test]
    fn test_check_arity() {
        let spec = resolve("subtract").unwrap();
        assert!(spec.check_arity(2).is_ok());
        let err = spec.check_arity(3).unwrap_err();
        assert_eq!(err.to_string(), "RQL0104: subtract: expected 2 argument(s), got 3");
    }
}
