//! Scalar literal values

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A scalar literal embedded in a query
///
/// Floats stored here are always finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Datum {
    /// Absence of value
    Null,
    /// Boolean literal
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// Double-precision float
    Float(f64),
    /// UTF-8 string
    String(String),
}

impl Datum {
    /// Primitive kind of the literal
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }

    /// Get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Decode to a JSON value
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Int(n) => JsonValue::from(*n),
            Self::Float(n) => serde_json::Number::from_f64(*n)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Self::String(s) => JsonValue::String(s.clone()),
        }
    }
}

impl From<bool> for Datum {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Datum {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<i64> for Datum {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
