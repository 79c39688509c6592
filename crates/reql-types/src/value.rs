//! Native values accepted by the query builder
//!
//! [`Value`] is the closed set of host values the builder understands. Host
//! adapters map their own runtime values onto it; kinds with no query
//! representation are carried as [`Value::Bytes`] or [`Value::Foreign`] so that
//! coercion can reject them with a typed error instead of at the adapter.

use indexmap::IndexMap;
use reql_ast::{Category, Term, TermKind};
use serde_json::Value as JsonValue;

/// A native value that can be coerced into a term
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating point
    Float(f64),
    /// String
    String(String),
    /// Ordered, possibly heterogeneous sequence
    Array(Vec<Value>),
    /// Mapping with unique keys
    Object(IndexMap<String, Value>),
    /// Symbolic name: a variable when marked, an implicit attribute otherwise
    Symbol(String),
    /// Handle to a table
    Table(TableHandle),
    /// Already-built term
    Term(Term),
    /// Binary blob (not representable in a query)
    Bytes(Vec<u8>),
    /// Host value with no mapping, named by its host type
    Foreign(String),
}

impl Value {
    /// Create a symbol
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Host-facing name of the value kind
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Symbol(_) => "symbol",
            Self::Table(_) => "table",
            Self::Term(_) => "term",
            Self::Bytes(_) => "bytes",
            Self::Foreign(name) => name,
        }
    }

    /// Get as string or symbol name
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Symbol(s) => Some(s),
            _ => None,
        }
    }
}

/// Handle to a table, carrying its pre-built reference term
#[derive(Debug, Clone, PartialEq)]
pub struct TableHandle {
    db: Option<String>,
    name: String,
    term: Term,
}

impl TableHandle {
    /// Create a handle for `name`, optionally qualified by a database
    pub fn new(db: Option<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let term = Term::new(
            TermKind::Table {
                db: db.clone(),
                name: name.clone(),
            },
            Category::Table,
        );
        Self { db, name, term }
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Database qualifier
    pub fn db(&self) -> Option<&str> {
        self.db.as_deref()
    }

    /// The table reference term
    pub fn as_term(&self) -> &Term {
        &self.term
    }

    /// Consume the handle, returning its term
    pub fn into_term(self) -> Term {
        self.term
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self::Object(map)
    }
}

impl From<Term> for Value {
    fn from(term: Term) -> Self {
        Self::Term(term)
    }
}

impl From<TableHandle> for Value {
    fn from(table: TableHandle) -> Self {
        Self::Table(table)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::Array(items.into_iter().map(Into::into).collect()),
            JsonValue::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
