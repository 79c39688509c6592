//! Built-in operations and administrative commands

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in operation applied by a call term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    // Arithmetic
    /// Addition, or array concatenation when every operand is an array
    Add,
    /// Subtraction
    Subtract,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
    /// Modulo
    Modulo,

    // Boolean
    /// True if any operand is true (does not short-circuit)
    Any,
    /// True if every operand is true (does not short-circuit)
    All,
    /// Logical negation
    Not,

    // Comparison, pairwise across all operands
    /// Equal
    Eq,
    /// Not equal
    Ne,
    /// Strictly increasing
    Lt,
    /// Non-decreasing
    Le,
    /// Strictly decreasing
    Gt,
    /// Non-increasing
    Ge,

    // Object manipulation
    /// Attribute of an explicit receiver
    GetAttr,
    /// Attribute existence on an explicit receiver
    HasAttr,
    /// Attribute subset of an explicit receiver
    PickAttrs,
    /// Explicit receiver minus the named attributes
    Without,
    /// Attribute of the implicit variable
    ImplicitGetAttr,
    /// Attribute existence on the implicit variable
    ImplicitHasAttr,
    /// Attribute subset of the implicit variable
    ImplicitPickAttrs,
    /// Implicit variable minus the named attributes
    ImplicitWithout,
    /// Merge two objects, right operand wins on collision
    MapMerge,
    /// Append an element to an array
    Append,

    // Sequences
    /// Concatenation of sequences, duplicates preserved
    Union,
    /// Array to stream
    ToStream,
    /// Stream to array
    ToArray,
    /// Transform each element
    Map,
    /// Keep elements matching a predicate
    Filter,
    /// Number of elements
    Count,
    /// Element at an index
    Nth,
}

impl Operation {
    /// Every built-in operation
    pub const ALL: &'static [Operation] = &[
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Any,
        Self::All,
        Self::Not,
        Self::Eq,
        Self::Ne,
        Self::Lt,
        Self::Le,
        Self::Gt,
        Self::Ge,
        Self::GetAttr,
        Self::HasAttr,
        Self::PickAttrs,
        Self::Without,
        Self::ImplicitGetAttr,
        Self::ImplicitHasAttr,
        Self::ImplicitPickAttrs,
        Self::ImplicitWithout,
        Self::MapMerge,
        Self::Append,
        Self::Union,
        Self::ToStream,
        Self::ToArray,
        Self::Map,
        Self::Filter,
        Self::Count,
        Self::Nth,
    ];

    /// Canonical operation name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Modulo => "modulo",
            Self::Any => "any",
            Self::All => "all",
            Self::Not => "not",
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::GetAttr => "getattr",
            Self::HasAttr => "hasattr",
            Self::PickAttrs => "pickattrs",
            Self::Without => "without",
            Self::ImplicitGetAttr => "implicit_getattr",
            Self::ImplicitHasAttr => "implicit_hasattr",
            Self::ImplicitPickAttrs => "implicit_pickattrs",
            Self::ImplicitWithout => "implicit_without",
            Self::MapMerge => "mapmerge",
            Self::Append => "append",
            Self::Union => "union",
            Self::ToStream => "to_stream",
            Self::ToArray => "to_array",
            Self::Map => "map",
            Self::Filter => "filter",
            Self::Count => "count",
            Self::Nth => "nth",
        }
    }

    /// Check if this is a comparison operation
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Ne | Self::Lt | Self::Le | Self::Gt | Self::Ge
        )
    }

    /// Check if this operation reads the implicit variable
    pub const fn is_implicit(&self) -> bool {
        matches!(
            self,
            Self::ImplicitGetAttr
                | Self::ImplicitHasAttr
                | Self::ImplicitPickAttrs
                | Self::ImplicitWithout
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Administrative command carried by a meta term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum MetaOp {
    /// Create a database
    DbCreate { name: String },
    /// Drop a database
    DbDrop { name: String },
    /// List databases
    DbList,
    /// Create a table
    TableCreate {
        db: Option<String>,
        name: String,
        primary_key: String,
    },
    /// Drop a table
    TableDrop { db: Option<String>, name: String },
    /// List tables of a database
    TableList { db: Option<String> },
}

impl MetaOp {
    /// Command name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DbCreate { .. } => "db_create",
            Self::DbDrop { .. } => "db_drop",
            Self::DbList => "db_list",
            Self::TableCreate { .. } => "table_create",
            Self::TableDrop { .. } => "table_drop",
            Self::TableList { .. } => "table_list",
        }
    }
}
