//! Builder configuration

use serde::{Deserialize, Serialize};

/// Settings that shape how values are turned into terms
///
/// Loadable from any serde source; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Leading character that marks a symbol as a bound variable
    pub variable_marker: char,
    /// Wrap `js` expression bodies in `return (...);`
    pub js_wrap_expressions: bool,
    /// Primary key used by `table_create` when none is given
    pub default_primary_key: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            variable_marker: '$',
            js_wrap_expressions: true,
            default_primary_key: "id".to_string(),
        }
    }
}

impl BuilderConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variable marker
    pub fn with_variable_marker(mut self, marker: char) -> Self {
        self.variable_marker = marker;
        self
    }

    /// Enable or disable wrapping of `js` expression bodies
    pub fn with_js_wrapping(mut self, wrap: bool) -> Self {
        self.js_wrap_expressions = wrap;
        self
    }

    /// Set the default primary key
    pub fn with_default_primary_key(mut self, key: impl Into<String>) -> Self {
        self.default_primary_key = key.into();
        self
    }
}
